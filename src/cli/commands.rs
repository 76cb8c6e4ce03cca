//! Command implementations for the wordpath CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::distance::{is_adjacent, levenshtein_distance};
use crate::error::{Result, WordPathError};
use crate::graph::WordGraph;
use crate::search::{PathFinder, SearchStrategy};

/// Execute a CLI command.
pub fn execute_command(args: WordPathArgs) -> Result<()> {
    match &args.command {
        Command::Path(path_args) => find_path(path_args.clone(), &args),
        Command::Neighbors(neighbors_args) => show_neighbors(neighbors_args.clone(), &args),
        Command::Build(build_args) => build_map(build_args.clone(), &args),
        Command::Distance(distance_args) => compare_words(distance_args.clone(), &args),
        Command::Interactive(interactive_args) => interactive(interactive_args.clone(), &args),
    }
}

/// Load the dictionary with the configuration the arguments describe.
fn load_graph(dictionary: &Path, full: bool, cli_args: &WordPathArgs) -> Result<WordGraph> {
    let config = cli_args.load_config()?;
    let config = if full { config.with_full_map(true) } else { config };

    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", dictionary.display());
    }
    let start_time = Instant::now();
    let graph = WordGraph::from_file(dictionary, config)?;
    info!(
        "Loaded {} words in {}ms",
        graph.store().len(),
        start_time.elapsed().as_millis()
    );
    Ok(graph)
}

/// Find every shortest path between two words.
fn find_path(args: PathArgs, cli_args: &WordPathArgs) -> Result<()> {
    let mut graph = load_graph(&args.dictionary, args.full, cli_args)?;
    let strategy = args.strategy.unwrap_or(graph.config().strategy);
    let result = search_pair(&mut graph, strategy, &args.from, &args.to)?;
    output_result("Path search completed", &result, cli_args)
}

/// Search one pair and time it.
fn search_pair(
    graph: &mut WordGraph,
    strategy: SearchStrategy,
    from: &str,
    to: &str,
) -> Result<PathResult> {
    let start_time = Instant::now();
    let paths = PathFinder::new(graph)
        .with_strategy(strategy)
        .find_shortest_paths(from, to)?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    Ok(PathResult::new(paths, strategy, duration_ms))
}

/// List the neighbors of a word.
fn show_neighbors(args: NeighborsArgs, cli_args: &WordPathArgs) -> Result<()> {
    let mut graph = load_graph(&args.dictionary, false, cli_args)?;
    if !graph.store().contains(&args.word) {
        warn!("'{}' is not in the dictionary", args.word);
    }

    let start_time = Instant::now();
    let neighbors = graph
        .get_neighbors(&args.word)
        .into_iter()
        .map(String::from)
        .collect();
    let result = NeighborsResult {
        word: args.word,
        neighbors,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    output_result("Neighbor lookup completed", &result, cli_args)
}

/// Build the full neighbor map and report on it.
fn build_map(args: BuildArgs, cli_args: &WordPathArgs) -> Result<()> {
    let mut graph = load_graph(&args.dictionary, false, cli_args)?;

    let start_time = Instant::now();
    let build = graph.build_full_neighbor_map();
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let result = BuildResult {
        dictionary: args.dictionary.display().to_string(),
        build,
        neighbors: graph.stats(),
        duration_ms,
    };

    output_result("Neighbor map built", &result, cli_args)
}

/// Compare two words directly.
fn compare_words(args: DistanceArgs, cli_args: &WordPathArgs) -> Result<()> {
    let result = DistanceResult {
        adjacent: is_adjacent(&args.first, &args.second),
        distance: levenshtein_distance(&args.first, &args.second),
        first: args.first,
        second: args.second,
    };

    output_result("Comparison completed", &result, cli_args)
}

/// Answer path queries read from stdin.
fn interactive(args: InteractiveArgs, cli_args: &WordPathArgs) -> Result<()> {
    let mut graph = load_graph(&args.dictionary, args.full, cli_args)?;
    let strategy = args.strategy.unwrap_or(graph.config().strategy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_interactive(&mut graph, strategy, stdin.lock(), &mut stdout.lock(), cli_args)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Answered {} queries ({} failed)",
            summary.queries, summary.failures
        );
    }
    Ok(())
}

/// Counts from an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveSummary {
    pub queries: usize,
    pub failures: usize,
}

/// Read "FROM TO" lines from `input` until an empty line or end of input and
/// write each result to `output`.
///
/// A failed query is reported on `output` and does not end the session. Only
/// failures to read input or write output are returned as errors.
pub fn run_interactive<R: BufRead, W: Write>(
    graph: &mut WordGraph,
    strategy: SearchStrategy,
    input: R,
    output: &mut W,
    cli_args: &WordPathArgs,
) -> Result<InteractiveSummary> {
    let mut summary = InteractiveSummary::default();

    if cli_args.verbosity() > 0 {
        eprintln!("Enter two words per line (empty line to quit):");
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        summary.queries += 1;
        let rendered = parse_query(line).and_then(|(from, to)| {
            let result = search_pair(graph, strategy, from, to)?;
            render_result("Path search completed", &result, cli_args)
        });

        match rendered {
            Ok(text) => writeln!(output, "{text}")?,
            Err(e) => {
                summary.failures += 1;
                if !e.is_input_error() {
                    warn!("Query '{line}' failed: {e}");
                }
                writeln!(output, "Error: {e}")?;
            }
        }
    }

    Ok(summary)
}

fn parse_query(line: &str) -> Result<(&str, &str)> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [from, to] => Ok((*from, *to)),
        _ => Err(WordPathError::from(anyhow::anyhow!(
            "Expected two words, got {}: '{line}'",
            words.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordPathConfig;
    use clap::Parser;
    use std::io::Cursor;

    fn graph() -> WordGraph {
        WordGraph::from_words(
            vec![
                "dog", "cog", "cot", "cat", "bat", "bad", "bid", "big", "xylophone",
            ],
            WordPathConfig::default(),
        )
        .unwrap()
    }

    fn quiet_args() -> WordPathArgs {
        WordPathArgs::try_parse_from(["wordpath", "-q", "interactive", "words.txt"]).unwrap()
    }

    fn run(input: &str) -> (InteractiveSummary, String) {
        let mut graph = graph();
        let mut output = Vec::new();
        let summary = run_interactive(
            &mut graph,
            SearchStrategy::Levels,
            Cursor::new(input),
            &mut output,
            &quiet_args(),
        )
        .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("dog cat").unwrap(), ("dog", "cat"));
        assert_eq!(parse_query("  dog \t cat ").unwrap(), ("dog", "cat"));
        assert!(parse_query("dog").is_err());
        assert!(parse_query("dog cat cot").is_err());
    }

    #[test]
    fn test_interactive_answers_each_line() {
        let (summary, output) = run("dog cat\nbat big\n");
        assert_eq!(summary, InteractiveSummary { queries: 2, failures: 0 });
        assert!(output.contains("dog -> cog -> cot -> cat"));
        assert!(output.contains("bat -> bad -> bid -> big"));
    }

    #[test]
    fn test_interactive_continues_after_errors() {
        let (summary, output) = run("dog xyz\ndog\nxylophone dog\ndog cat\n");
        assert_eq!(summary, InteractiveSummary { queries: 4, failures: 3 });
        assert!(output.contains("Error: Unknown word: 'xyz'"));
        assert!(output.contains("Expected two words, got 1"));
        assert!(output.contains("Error: No neighbors: 'xylophone'"));
        assert!(output.contains("dog -> cog -> cot -> cat"));
    }

    #[test]
    fn test_interactive_stops_at_empty_line() {
        let (summary, output) = run("dog cat\n\nbat big\n");
        assert_eq!(summary.queries, 1);
        assert!(!output.contains("bat -> bad"));
    }

    #[test]
    fn test_search_pair_records_strategy() {
        let mut graph = graph();
        let result = search_pair(&mut graph, SearchStrategy::Bidirectional, "dog", "cot").unwrap();
        assert_eq!(result.strategy, SearchStrategy::Bidirectional);
        assert_eq!(result.edit_count, Some(2));
        assert_eq!(result.paths, vec![vec!["dog", "cog", "cot"]]);
    }
}
