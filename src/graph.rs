//! The word graph: dictionary words joined by single edits.
//!
//! [`WordGraph`] owns the word store and the neighbor map. Edges are never
//! stored up front unless [`WordGraph::build_full_neighbor_map`] is called;
//! otherwise each word's edges are computed the first time something asks
//! for them.

pub mod builder;
pub mod neighbor_map;
pub mod stats;

pub use builder::*;
pub use neighbor_map::*;
pub use stats::*;

use std::path::Path;

use log::info;

use crate::config::WordPathConfig;
use crate::dictionary::{DictionaryLoader, WordId, WordStore};
use crate::error::Result;
use crate::search::{PathFinder, PathSet};

/// Dictionary words plus the lazily filled neighbor relation between them.
#[derive(Debug, Clone)]
pub struct WordGraph {
    store: WordStore,
    neighbors: NeighborMap,
    config: WordPathConfig,
}

impl WordGraph {
    /// Create a graph over an already built store.
    ///
    /// Runs the full build right away when the configuration asks for it.
    pub fn new(store: WordStore, config: WordPathConfig) -> Self {
        let mut graph = WordGraph {
            store,
            neighbors: NeighborMap::new(),
            config,
        };
        if graph.config.build_full_map {
            graph.build_full_neighbor_map();
        }
        graph
    }

    /// Create a graph from words in any order.
    pub fn from_words<I, S>(words: I, config: WordPathConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let store = WordStore::new(words, config.max_word_length);
        Ok(Self::new(store, config))
    }

    /// Create a graph from a dictionary file with one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P, config: WordPathConfig) -> Result<Self> {
        config.validate()?;
        let loaded = DictionaryLoader::new(config.max_word_length).load_from_file(path)?;
        Self::from_words(loaded.words, config)
    }

    /// The dictionary.
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// The neighbor lists computed so far.
    pub fn neighbor_map(&self) -> &NeighborMap {
        &self.neighbors
    }

    /// The configuration the graph was created with.
    pub fn config(&self) -> &WordPathConfig {
        &self.config
    }

    /// Compute the neighbors of every dictionary word.
    pub fn build_full_neighbor_map(&mut self) -> BuildStats {
        info!("Building full neighbor map over {} words", self.store.len());
        build_full(&self.store, &mut self.neighbors)
    }

    /// Store positions of the neighbors of `word`, computing them if needed.
    pub fn neighbor_ids(&mut self, word: &str) -> &[WordId] {
        self.neighbors.get_or_build(&self.store, word)
    }

    /// The words one edit away from `word`, computing them if needed.
    ///
    /// Returns an empty list for words without neighbors, including words
    /// over the length limit.
    pub fn get_neighbors(&mut self, word: &str) -> Vec<&str> {
        let ids = self.neighbors.get_or_build(&self.store, word);
        ids.iter().map(|&id| self.store.word(id)).collect()
    }

    /// Whether `word` has at least one neighbor.
    pub fn has_neighbors(&mut self, word: &str) -> bool {
        !self.neighbor_ids(word).is_empty()
    }

    /// Summary of the neighbor lists computed so far.
    pub fn stats(&self) -> NeighborStats {
        NeighborStats::from_map(&self.neighbors)
    }

    /// Every shortest edit path from `from` to `to`, using the configured strategy.
    pub fn find_shortest_paths(&mut self, from: &str, to: &str) -> Result<PathSet> {
        PathFinder::new(self).find_shortest_paths(from, to)
    }

    pub(crate) fn parts_mut(&mut self) -> (&WordStore, &mut NeighborMap) {
        (&self.store, &mut self.neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> WordGraph {
        WordGraph::from_words(
            vec!["dog", "cog", "cot", "cat", "bat", "bad", "bid", "big"],
            WordPathConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_get_neighbors() {
        let mut graph = graph();
        assert_eq!(graph.get_neighbors("cot"), vec!["cat", "cog"]);
        assert_eq!(graph.get_neighbors("dog"), vec!["cog"]);
        assert!(graph.get_neighbors("zzzzzzlongwordnotindictionary").is_empty());
    }

    #[test]
    fn test_get_neighbors_is_idempotent() {
        let mut graph = graph();
        let first: Vec<String> = graph.get_neighbors("bat").iter().map(|s| s.to_string()).collect();
        let cached = graph.neighbor_map().len();
        let second: Vec<String> = graph.get_neighbors("bat").iter().map(|s| s.to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(graph.neighbor_map().len(), cached);
    }

    #[test]
    fn test_full_build_on_creation() {
        let config = WordPathConfig::default().with_full_map(true);
        let graph = WordGraph::from_words(vec!["dog", "cog", "cot"], config).unwrap();
        assert_eq!(graph.neighbor_map().len(), 3);
        assert_eq!(graph.stats().words_with_neighbors, 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = WordPathConfig::default().with_max_word_length(0);
        assert!(WordGraph::from_words(vec!["dog"], config).is_err());
    }
}
