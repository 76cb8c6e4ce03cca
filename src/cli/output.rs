//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordPathArgs};
use crate::error::{Result, WordPathError};
use crate::graph::{BuildStats, NeighborStats};
use crate::search::{PathSet, SearchStats, SearchStrategy};

/// A command result that can be printed for people as well as serialized.
pub trait CommandOutput: Serialize {
    /// Lines for the human-readable format.
    fn human_lines(&self) -> Vec<String>;

    /// Graphviz rendering, for results that have one.
    fn dot(&self) -> Option<String> {
        None
    }
}

/// Result structure for a path search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    pub source: String,
    pub target: String,
    pub strategy: SearchStrategy,
    pub edit_count: Option<usize>,
    pub paths: Vec<Vec<String>>,
    pub stats: SearchStats,
    pub duration_ms: u64,
}

impl PathResult {
    pub fn new(paths: PathSet, strategy: SearchStrategy, duration_ms: u64) -> Self {
        PathResult {
            edit_count: paths.edit_count(),
            source: paths.source,
            target: paths.target,
            strategy,
            paths: paths.paths,
            stats: paths.stats,
            duration_ms,
        }
    }
}

impl CommandOutput for PathResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self.edit_count {
            Some(edits) => {
                lines.push(format!(
                    "{} shortest path(s) from '{}' to '{}', {} edit(s) each:",
                    self.paths.len(),
                    self.source,
                    self.target,
                    edits
                ));
                for path in &self.paths {
                    lines.push(format!("  {}", path.join(" -> ")));
                }
            }
            None => lines.push(format!(
                "No path from '{}' to '{}'",
                self.source, self.target
            )),
        }
        lines.push(format!(
            "Search time: {}ms, {} words expanded",
            self.duration_ms, self.stats.nodes_expanded
        ));
        lines
    }

    fn dot(&self) -> Option<String> {
        Some(render_dot(
            &self.source,
            &self.target,
            self.edit_count.unwrap_or(0),
            &self.paths,
        ))
    }
}

/// Result structure for a neighbor lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<String>,
    pub duration_ms: u64,
}

impl CommandOutput for NeighborsResult {
    fn human_lines(&self) -> Vec<String> {
        if self.neighbors.is_empty() {
            return vec![format!("'{}' has no neighbors", self.word)];
        }
        vec![
            format!("{} neighbor(s) of '{}':", self.neighbors.len(), self.word),
            format!("  {}", self.neighbors.join(", ")),
        ]
    }
}

/// Result structure for the full build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    pub dictionary: String,
    pub build: BuildStats,
    pub neighbors: NeighborStats,
    pub duration_ms: u64,
}

impl CommandOutput for BuildResult {
    fn human_lines(&self) -> Vec<String> {
        let build = &self.build;
        let stats = &self.neighbors;
        vec![
            format!("Dictionary: {}", self.dictionary),
            format!("Words: {}", build.words),
            format!(
                "Comparisons: {} ({} skipped, {:.1}%)",
                build.comparisons,
                build.skipped_comparisons,
                build.skip_ratio() * 100.0
            ),
            format!("Neighbor pairs: {}", build.relations),
            format!(
                "Words with neighbors: {} of {}",
                stats.words_with_neighbors, stats.computed_words
            ),
            format!(
                "Word length: min {}, avg {:.2}, max {}",
                stats.min_word_length, stats.avg_word_length, stats.max_word_length
            ),
            format!(
                "Neighbor count: min {}, avg {:.2}, max {}",
                stats.min_neighbor_count, stats.avg_neighbor_count, stats.max_neighbor_count
            ),
            format!("Build time: {}ms", self.duration_ms),
        ]
    }
}

/// Result structure for comparing two words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    pub adjacent: bool,
    pub distance: usize,
}

impl CommandOutput for DistanceResult {
    fn human_lines(&self) -> Vec<String> {
        vec![
            format!("Edit distance: {}", self.distance),
            format!(
                "'{}' and '{}' are {}",
                self.first,
                self.second,
                if self.adjacent { "neighbors" } else { "not neighbors" }
            ),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T: CommandOutput>(message: &str, result: &T, args: &WordPathArgs) -> Result<()> {
    let rendered = render_result(message, result, args)?;
    println!("{rendered}");
    Ok(())
}

/// Render a result in the specified format.
pub fn render_result<T: CommandOutput>(
    message: &str,
    result: &T,
    args: &WordPathArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut lines = Vec::new();
            if args.verbosity() > 1 {
                lines.push(message.to_string());
            }
            lines.extend(result.human_lines());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json)
        }
        OutputFormat::Dot => result.dot().ok_or_else(|| {
            WordPathError::invalid_argument("dot output is only available for path searches")
        }),
    }
}

/// A Graphviz digraph with one edge line per consecutive pair of each path.
///
/// Edges shared between paths repeat; `concentrate=true` merges them when drawn.
pub fn render_dot(source: &str, target: &str, edits: usize, paths: &[Vec<String>]) -> String {
    let mut dot = format!("digraph {source}_{target}_{edits}{{concentrate=true;\n");
    for path in paths {
        for pair in path.windows(2) {
            dot.push_str(&format!("{} -> {};\n", pair[0], pair[1]));
        }
    }
    dot.push('}');
    dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(format: &str) -> WordPathArgs {
        WordPathArgs::try_parse_from(["wordpath", "-f", format, "distance", "a", "b"]).unwrap()
    }

    fn path_result() -> PathResult {
        let paths = PathSet {
            source: "dog".to_string(),
            target: "cat".to_string(),
            paths: vec![
                vec!["dog", "cog", "cot", "cat"],
                vec!["dog", "dot", "cot", "cat"],
            ]
            .into_iter()
            .map(|p| p.into_iter().map(String::from).collect())
            .collect(),
            stats: SearchStats::default(),
        };
        PathResult::new(paths, SearchStrategy::Levels, 3)
    }

    #[test]
    fn test_render_dot() {
        let dot = path_result().dot().unwrap();
        assert_eq!(
            dot,
            "digraph dog_cat_3{concentrate=true;\n\
             dog -> cog;\ncog -> cot;\ncot -> cat;\n\
             dog -> dot;\ndot -> cot;\ncot -> cat;\n}"
        );
    }

    #[test]
    fn test_render_human_paths() {
        let rendered = render_result("Path search completed", &path_result(), &args("human")).unwrap();
        assert!(rendered.starts_with("2 shortest path(s) from 'dog' to 'cat', 3 edit(s) each:"));
        assert!(rendered.contains("  dog -> cog -> cot -> cat"));
        assert!(!rendered.contains("Path search completed"));
    }

    #[test]
    fn test_render_json() {
        let rendered = render_result("", &path_result(), &args("json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["edit_count"], 3);
        assert_eq!(value["strategy"], "levels");
        assert_eq!(value["paths"][1][1], "dot");
    }

    #[test]
    fn test_dot_requires_paths() {
        let result = DistanceResult {
            first: "dog".to_string(),
            second: "dogs".to_string(),
            adjacent: true,
            distance: 1,
        };
        let err = render_result("", &result, &args("dot")).unwrap_err();
        assert!(err.to_string().contains("only available for path searches"));
    }

    #[test]
    fn test_no_path_message() {
        let result = PathResult::new(
            PathSet {
                source: "dog".to_string(),
                target: "ape".to_string(),
                paths: Vec::new(),
                stats: SearchStats::default(),
            },
            SearchStrategy::Bidirectional,
            0,
        );
        assert_eq!(result.human_lines()[0], "No path from 'dog' to 'ape'");
        assert_eq!(result.dot().unwrap(), "digraph dog_ape_0{concentrate=true;\n}");
    }
}
