//! Search results.

use serde::{Deserialize, Serialize};

use crate::dictionary::{WordId, WordStore};

/// Counters from a single path search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Words whose neighbors were examined.
    pub nodes_expanded: usize,
    /// Levels (distances from a root) that were fully explored.
    pub levels: usize,
}

/// Paths found by a strategy, as store positions.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawPaths {
    pub paths: Vec<Vec<WordId>>,
    pub stats: SearchStats,
}

/// Every shortest path between two words.
///
/// Each path starts with `source` and ends with `target`. An empty set means
/// the words are not connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSet {
    pub source: String,
    pub target: String,
    pub paths: Vec<Vec<String>>,
    pub stats: SearchStats,
}

impl PathSet {
    /// The single zero-edit path from a word to itself.
    pub fn trivial(word: &str) -> Self {
        PathSet {
            source: word.to_string(),
            target: word.to_string(),
            paths: vec![vec![word.to_string()]],
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn from_raw(store: &WordStore, source: &str, target: &str, raw: RawPaths) -> Self {
        let paths = raw
            .paths
            .into_iter()
            .map(|path| path.into_iter().map(|id| store.word(id).to_string()).collect())
            .collect();

        PathSet {
            source: source.to_string(),
            target: target.to_string(),
            paths,
            stats: raw.stats,
        }
    }

    /// Whether no path was found.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of paths found.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Number of edits along each path, or `None` when there is no path.
    pub fn edit_count(&self) -> Option<usize> {
        self.paths.first().map(|path| path.len() - 1)
    }

    /// Iterate over the paths in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.paths.iter().map(Vec::as_slice)
    }

    /// Whether the set contains exactly this sequence of words.
    pub fn contains_path(&self, words: &[&str]) -> bool {
        self.paths
            .iter()
            .any(|path| path.len() == words.len() && path.iter().zip(words).all(|(a, b)| a == b))
    }

    /// The paths in lexicographic order, for comparing results.
    pub fn sorted_paths(&self) -> Vec<Vec<String>> {
        let mut paths = self.paths.clone();
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_path() {
        let paths = PathSet::trivial("dog");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.edit_count(), Some(0));
        assert!(paths.contains_path(&["dog"]));
    }

    #[test]
    fn test_from_raw() {
        let store = WordStore::new(vec!["dog", "cog", "cot"], 30);
        let raw = RawPaths {
            paths: vec![vec![
                store.id_of("dog").unwrap(),
                store.id_of("cog").unwrap(),
                store.id_of("cot").unwrap(),
            ]],
            stats: SearchStats {
                nodes_expanded: 2,
                levels: 2,
            },
        };

        let paths = PathSet::from_raw(&store, "dog", "cot", raw);
        assert!(!paths.is_empty());
        assert_eq!(paths.edit_count(), Some(2));
        assert!(paths.contains_path(&["dog", "cog", "cot"]));
        assert!(!paths.contains_path(&["dog", "cot"]));
        assert_eq!(paths.iter().count(), 1);
        assert_eq!(paths.stats.nodes_expanded, 2);
    }

    #[test]
    fn test_empty_path_set() {
        let store = WordStore::new(vec!["dog", "ape"], 30);
        let paths = PathSet::from_raw(&store, "dog", "ape", RawPaths::default());
        assert!(paths.is_empty());
        assert_eq!(paths.edit_count(), None);
    }
}
