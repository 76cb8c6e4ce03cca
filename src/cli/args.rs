//! Command line argument parsing for the wordpath CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::WordPathConfig;
use crate::error::Result;
use crate::search::SearchStrategy;

/// wordpath - shortest single-letter edit paths between dictionary words
#[derive(Parser, Debug, Clone)]
#[command(name = "wordpath")]
#[command(about = "Find every shortest chain of single-letter edits between two words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordPathArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Longest word to load from the dictionary
    #[arg(long, value_name = "N")]
    pub max_word_length: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordPathArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The configuration file, if any, with command line overrides applied.
    pub fn load_config(&self) -> Result<WordPathConfig> {
        let mut config = match &self.config {
            Some(path) => WordPathConfig::load_from_file(path)?,
            None => WordPathConfig::default(),
        };
        if let Some(max_word_length) = self.max_word_length {
            config = config.with_max_word_length(max_word_length);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find every shortest path between two words
    Path(PathArgs),

    /// List the words one edit away from a word
    Neighbors(NeighborsArgs),

    /// Build the whole neighbor map and report statistics
    Build(BuildArgs),

    /// Compare two words without a dictionary
    Distance(DistanceArgs),

    /// Read "FROM TO" pairs from stdin and search each one
    Interactive(InteractiveArgs),
}

/// Arguments for a single path search
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to start from
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Word to reach
    #[arg(value_name = "TO")]
    pub to: String,

    /// Search strategy (defaults to the configured one)
    #[arg(short, long)]
    pub strategy: Option<SearchStrategy>,

    /// Build the whole neighbor map before searching
    #[arg(long)]
    pub full: bool,
}

/// Arguments for listing neighbors
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for the full build
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Arguments for comparing two words
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(value_name = "FIRST")]
    pub first: String,

    #[arg(value_name = "SECOND")]
    pub second: String,
}

/// Arguments for interactive mode
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Search strategy (defaults to the configured one)
    #[arg(short, long)]
    pub strategy: Option<SearchStrategy>,

    /// Build the whole neighbor map before reading input
    #[arg(long)]
    pub full: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Graphviz digraph of the paths (path searches only)
    Dot,
}
