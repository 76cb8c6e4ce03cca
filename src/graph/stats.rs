//! Statistics about neighbor map construction and shape.

use serde::{Deserialize, Serialize};

use crate::graph::neighbor_map::NeighborMap;

/// Counters from a full neighbor map build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Words in the store.
    pub words: usize,
    /// Pairs actually compared.
    pub comparisons: u64,
    /// Pairs skipped because the rest of a row was too long.
    pub skipped_comparisons: u64,
    /// Neighbor pairs found (each pair counted once).
    pub relations: u64,
}

impl BuildStats {
    /// Fraction of the upper-triangle comparisons that were skipped.
    pub fn skip_ratio(&self) -> f64 {
        let total = self.comparisons + self.skipped_comparisons;
        if total == 0 {
            return 0.0;
        }
        self.skipped_comparisons as f64 / total as f64
    }
}

/// Shape of the computed part of a neighbor map.
///
/// Word lengths and neighbor counts are taken over the words that have at
/// least one neighbor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborStats {
    /// Words with a computed entry, including empty ones.
    pub computed_words: usize,
    /// Words with at least one neighbor.
    pub words_with_neighbors: usize,
    /// Sum of all neighbor list lengths.
    pub total_neighbors: usize,
    pub min_word_length: usize,
    pub avg_word_length: f64,
    pub max_word_length: usize,
    pub min_neighbor_count: usize,
    pub avg_neighbor_count: f64,
    pub max_neighbor_count: usize,
}

impl NeighborStats {
    /// Summarize the entries computed so far.
    pub fn from_map(map: &NeighborMap) -> Self {
        let mut stats = NeighborStats {
            computed_words: map.len(),
            min_word_length: usize::MAX,
            min_neighbor_count: usize::MAX,
            ..Default::default()
        };
        let mut total_length = 0usize;

        for (word, neighbors) in map.iter().filter(|(_, n)| !n.is_empty()) {
            let length = word.chars().count();
            stats.words_with_neighbors += 1;
            stats.min_word_length = stats.min_word_length.min(length);
            stats.max_word_length = stats.max_word_length.max(length);
            total_length += length;

            stats.min_neighbor_count = stats.min_neighbor_count.min(neighbors.len());
            stats.max_neighbor_count = stats.max_neighbor_count.max(neighbors.len());
            stats.total_neighbors += neighbors.len();
        }

        if stats.words_with_neighbors == 0 {
            stats.min_word_length = 0;
            stats.min_neighbor_count = 0;
        } else {
            let count = stats.words_with_neighbors as f64;
            stats.avg_word_length = total_length as f64 / count;
            stats.avg_neighbor_count = stats.total_neighbors as f64 / count;
        }

        stats
    }
}
