//! Length-sorted word storage.
//!
//! The store keeps every dictionary word ordered by character count, then
//! lexicographically. Neighbors of a word can only be one character shorter,
//! the same length, or one character longer, so with this order they all sit
//! in one contiguous run that [`LengthIndex`] locates directly.

use std::ops::Range;

use ahash::AHashMap;
use log::{debug, info};

/// Position of a word in a [`WordStore`].
pub type WordId = usize;

/// First store position for every word length.
///
/// `start_of(len)` is the first position holding a word of at least `len`
/// characters. Lengths missing from the dictionary map forward to the next
/// length that is present, and anything past the longest word maps to the end
/// of the store, so the table never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthIndex {
    starts: Vec<usize>,
}

impl LengthIndex {
    /// Build the index from the per-word lengths of a length-sorted store.
    pub fn new(lengths: &[usize]) -> Self {
        let max_length = lengths.last().copied().unwrap_or(0);
        let starts = (0..=max_length + 1)
            .map(|len| lengths.partition_point(|&l| l < len))
            .collect();

        LengthIndex { starts }
    }

    /// Longest word length covered by the index.
    pub fn max_length(&self) -> usize {
        self.starts.len() - 2
    }

    /// First position of a word with at least `len` characters.
    pub fn start_of(&self, len: usize) -> usize {
        match self.starts.get(len) {
            Some(&start) => start,
            None => self.end(),
        }
    }

    /// Positions of the words with exactly `len` characters.
    pub fn range_of(&self, len: usize) -> Range<usize> {
        self.start_of(len)..self.start_of(len + 1)
    }

    /// One past the last position in the store.
    pub fn end(&self) -> usize {
        self.starts[self.starts.len() - 1]
    }
}

/// The dictionary, sorted by length and then lexicographically.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Box<str>>,
    lengths: Vec<usize>,
    positions: AHashMap<Box<str>, WordId>,
    length_index: LengthIndex,
    max_word_length: usize,
}

impl WordStore {
    /// Build a store from words in any order.
    ///
    /// Words longer than `max_word_length` characters and duplicates are
    /// dropped.
    pub fn new<I, S>(words: I, max_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut skipped = 0usize;
        let mut entries: Vec<(usize, Box<str>)> = Vec::new();
        for word in words {
            let word: String = word.into();
            let len = word.chars().count();
            if len > max_word_length {
                debug!("Skipping '{word}': longer than {max_word_length} characters");
                skipped += 1;
                continue;
            }
            entries.push((len, word.into_boxed_str()));
        }

        entries.sort_unstable();
        entries.dedup();

        let mut words = Vec::with_capacity(entries.len());
        let mut lengths = Vec::with_capacity(entries.len());
        let mut positions = AHashMap::with_capacity(entries.len());
        for (id, (len, word)) in entries.into_iter().enumerate() {
            positions.insert(word.clone(), id);
            lengths.push(len);
            words.push(word);
        }

        let length_index = LengthIndex::new(&lengths);
        info!(
            "Word store holds {} words up to {} characters ({} skipped as too long)",
            words.len(),
            length_index.max_length(),
            skipped
        );

        WordStore {
            words,
            lengths,
            positions,
            length_index,
            max_word_length,
        }
    }

    /// Number of words in the store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Longest word the store accepts.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// The word at a position.
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// Character count of the word at a position.
    pub fn word_len(&self, id: WordId) -> usize {
        self.lengths[id]
    }

    /// Position of a word, if it is in the dictionary.
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.positions.get(word).copied()
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// The length index over this store.
    pub fn length_index(&self) -> &LengthIndex {
        &self.length_index
    }

    /// Iterate over the words in store order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_ref())
    }
}
