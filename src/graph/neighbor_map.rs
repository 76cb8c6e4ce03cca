//! Cache of computed neighbor lists.

use ahash::AHashMap;

use crate::dictionary::{WordId, WordStore};
use crate::graph::builder::build_lazy;

/// Maps a word to the store positions of the words one edit away.
///
/// Entries are filled once and never changed. An empty list is a cached
/// answer ("no neighbors"), distinct from a word with no entry yet.
#[derive(Debug, Clone, Default)]
pub struct NeighborMap {
    entries: AHashMap<Box<str>, Vec<WordId>>,
}

impl NeighborMap {
    /// Create an empty map.
    pub fn new() -> Self {
        NeighborMap {
            entries: AHashMap::new(),
        }
    }

    /// Number of words with a computed entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been computed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the neighbors of `word` have been computed.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The cached neighbors of `word`, without computing them.
    pub fn get(&self, word: &str) -> Option<&[WordId]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// The neighbors of `word`, computing and caching them on first use.
    pub fn get_or_build(&mut self, store: &WordStore, word: &str) -> &[WordId] {
        if !self.entries.contains_key(word) {
            let neighbors = build_lazy(store, word);
            self.entries.insert(word.into(), neighbors);
        }
        self.get(word).unwrap_or_default()
    }

    /// Store a list unless the word already has one. Returns whether it was stored.
    pub fn insert_if_absent(&mut self, word: &str, neighbors: Vec<WordId>) -> bool {
        if self.entries.contains_key(word) {
            return false;
        }
        self.entries.insert(word.into(), neighbors);
        true
    }

    /// Iterate over the computed entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordId])> {
        self.entries
            .iter()
            .map(|(word, neighbors)| (word.as_ref(), neighbors.as_slice()))
    }
}
