//! Edit distance between words.
//!
//! The neighbor graph only ever needs to know whether two words are exactly
//! one edit apart, which [`adjacency`] answers in time linear in the word
//! length. [`levenshtein`] holds the classic dynamic-programming distance,
//! used to verify the adjacency test and to report full distances.

pub mod adjacency;
pub mod levenshtein;

pub use adjacency::*;
pub use levenshtein::*;
