//! Error types for the wordpath library.
//!
//! All failures are represented by the [`WordPathError`] enum. Input problems
//! (a word that is too long, not in the dictionary, or has no neighbors) are
//! kept apart from system failures so callers can report them and carry on.
//!
//! # Examples
//!
//! ```
//! use wordpath::error::{Result, WordPathError};
//!
//! fn lookup(word: &str) -> Result<()> {
//!     Err(WordPathError::unknown_word(word))
//! }
//!
//! match lookup("xyz") {
//!     Ok(_) => println!("Found"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordpath operations.
#[derive(Error, Debug)]
pub enum WordPathError {
    /// I/O errors (dictionary and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word is longer than the configured limit
    #[error("Word too long: '{word}' exceeds the {limit} character limit")]
    WordTooLong { word: String, limit: usize },

    /// A word is not in the dictionary
    #[error("Unknown word: '{0}' is not in the dictionary")]
    UnknownWord(String),

    /// A dictionary word with no neighbors, so no path can start or end there
    #[error("No neighbors: '{0}' has no words one edit away")]
    NoNeighbors(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordPathError.
pub type Result<T> = std::result::Result<T, WordPathError>;

impl WordPathError {
    /// Create a new word too long error.
    pub fn word_too_long<S: Into<String>>(word: S, limit: usize) -> Self {
        WordPathError::WordTooLong {
            word: word.into(),
            limit,
        }
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        WordPathError::UnknownWord(word.into())
    }

    /// Create a new no neighbors error.
    pub fn no_neighbors<S: Into<String>>(word: S) -> Self {
        WordPathError::NoNeighbors(word.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordPathError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordPathError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordPathError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Whether this error was caused by the words a user supplied rather than
    /// by the system.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WordPathError::WordTooLong { .. }
                | WordPathError::UnknownWord(_)
                | WordPathError::NoNeighbors(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordPathError::unknown_word("xyz");
        assert_eq!(
            error.to_string(),
            "Unknown word: 'xyz' is not in the dictionary"
        );

        let error = WordPathError::no_neighbors("xylophone");
        assert_eq!(
            error.to_string(),
            "No neighbors: 'xylophone' has no words one edit away"
        );

        let error = WordPathError::word_too_long("abcdef", 3);
        assert_eq!(
            error.to_string(),
            "Word too long: 'abcdef' exceeds the 3 character limit"
        );

        let error = WordPathError::invalid_argument("two words required");
        assert_eq!(
            error.to_string(),
            "Error: Invalid argument: two words required"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordPathError::from(io_error);

        match error {
            WordPathError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_input_errors() {
        assert!(WordPathError::unknown_word("a").is_input_error());
        assert!(WordPathError::no_neighbors("a").is_input_error());
        assert!(WordPathError::word_too_long("a", 0).is_input_error());
        assert!(!WordPathError::config("bad").is_input_error());
        assert!(!WordPathError::other("bad").is_input_error());
    }
}
