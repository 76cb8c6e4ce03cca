//! # wordpath
//!
//! Finds every shortest chain of single-letter edits between two dictionary
//! words, where each step is itself a dictionary word.
//!
//! ## Features
//!
//! - Cheap adjacency test for words one insertion, deletion or substitution apart
//! - Neighbor lists built lazily on first use, or for the whole dictionary at once
//! - Level-synchronized and bidirectional breadth-first search
//! - Every minimum-length path, not just the first one found
//!
//! ```no_run
//! use wordpath::prelude::*;
//!
//! let mut graph = WordGraph::from_file("words.txt", WordPathConfig::default())?;
//! for path in graph.find_shortest_paths("dog", "cat")?.iter() {
//!     println!("{}", path.join(" -> "));
//! }
//! # Ok::<(), wordpath::error::WordPathError>(())
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod graph;
pub mod search;

pub mod prelude {
    pub use crate::config::WordPathConfig;
    pub use crate::dictionary::{DictionaryLoader, WordId, WordStore};
    pub use crate::distance::{LevenshteinMatrix, is_adjacent, levenshtein_distance};
    pub use crate::error::{Result, WordPathError};
    pub use crate::graph::{BuildStats, NeighborMap, NeighborStats, WordGraph};
    pub use crate::search::{PathFinder, PathSet, SearchStats, SearchStrategy};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
