//! Configuration for loading dictionaries and searching for paths.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordPathError};
use crate::search::SearchStrategy;

/// Longest word accepted by default. The longest entry in common English
/// word lists is 29 characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 30;

/// Configuration for a [`WordGraph`](crate::graph::WordGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPathConfig {
    /// Words longer than this are dropped at load time and never get neighbors.
    pub max_word_length: usize,
    /// Build the whole neighbor map eagerly when the graph is created.
    pub build_full_map: bool,
    /// Strategy used by `find_shortest_paths`.
    pub strategy: SearchStrategy,
}

impl Default for WordPathConfig {
    fn default() -> Self {
        WordPathConfig {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            build_full_map: false,
            strategy: SearchStrategy::Levels,
        }
    }
}

impl WordPathConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: WordPathConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum word length.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable the eager full build.
    pub fn with_full_map(mut self, build_full_map: bool) -> Self {
        self.build_full_map = build_full_map;
        self
    }

    /// Check the configuration for values the graph cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(WordPathError::config(
                "max_word_length must be at least 1",
            ));
        }
        Ok(())
    }
}
