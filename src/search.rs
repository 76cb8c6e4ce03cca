//! Shortest edit path search between dictionary words.
//!
//! Two strategies produce the same set of paths:
//!
//! - [`SearchStrategy::Levels`]: one breadth-first search from the source,
//!   processed a level at a time.
//! - [`SearchStrategy::Bidirectional`]: frontiers grown from both words until
//!   they meet.

pub mod bidirectional;
pub mod levels;
pub mod path;

pub use path::*;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordPathError};
use crate::graph::WordGraph;

/// How to search the word graph.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Level-synchronized search from the source word
    #[default]
    Levels,
    /// Search from both words at once
    Bidirectional,
}

/// Finds every shortest path between two words of a [`WordGraph`].
pub struct PathFinder<'g> {
    graph: &'g mut WordGraph,
    strategy: SearchStrategy,
}

impl<'g> PathFinder<'g> {
    /// Create a finder using the graph's configured strategy.
    pub fn new(graph: &'g mut WordGraph) -> Self {
        let strategy = graph.config().strategy;
        PathFinder { graph, strategy }
    }

    /// Use a different strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The strategy in use.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Every minimum-length path from `from` to `to`.
    ///
    /// Fails with [`WordPathError::UnknownWord`] if either word is not in the
    /// dictionary and with [`WordPathError::NoNeighbors`] if either word has no
    /// neighbors; no search is attempted in those cases. A word paired with
    /// itself yields the single path `[word]`. Words that are not connected
    /// yield an empty set.
    pub fn find_shortest_paths(&mut self, from: &str, to: &str) -> Result<PathSet> {
        let store = self.graph.store();
        let source = store
            .id_of(from)
            .ok_or_else(|| WordPathError::unknown_word(from))?;
        let target = store
            .id_of(to)
            .ok_or_else(|| WordPathError::unknown_word(to))?;

        if source == target {
            return Ok(PathSet::trivial(from));
        }

        for word in [from, to] {
            if !self.graph.has_neighbors(word) {
                return Err(WordPathError::no_neighbors(word));
            }
        }

        debug!(
            "Searching for paths from '{from}' to '{to}' with {:?}",
            self.strategy
        );
        let (store, neighbors) = self.graph.parts_mut();
        let raw = match self.strategy {
            SearchStrategy::Levels => levels::search(store, neighbors, source, target),
            SearchStrategy::Bidirectional => {
                bidirectional::search(store, neighbors, source, target)
            }
        };

        Ok(PathSet::from_raw(store, from, to, raw))
    }
}
