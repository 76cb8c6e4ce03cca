//! Dictionary file loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;

/// Words read from a dictionary, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedWords {
    /// Words that passed the length filter.
    pub words: Vec<String>,
    /// Number of words dropped for exceeding the length limit.
    pub skipped_too_long: usize,
}

/// Reads one word per line, dropping words over the length limit.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryLoader {
    max_word_length: usize,
}

impl DictionaryLoader {
    /// Create a loader accepting words of up to `max_word_length` characters.
    pub fn new(max_word_length: usize) -> Self {
        DictionaryLoader { max_word_length }
    }

    /// Load dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadedWords> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let loaded = self.load_from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} words from {}",
            loaded.words.len(),
            path.display()
        );
        Ok(loaded)
    }

    /// Load words from any buffered reader.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<LoadedWords> {
        let mut loaded = LoadedWords::default();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if word.chars().count() > self.max_word_length {
                debug!(
                    "Skipping '{word}': longer than {} characters",
                    self.max_word_length
                );
                loaded.skipped_too_long += 1;
                continue;
            }
            loaded.words.push(word.to_string());
        }

        if loaded.skipped_too_long > 0 {
            warn!(
                "Skipped {} words longer than {} characters",
                loaded.skipped_too_long, self.max_word_length
            );
        }

        Ok(loaded)
    }
}
