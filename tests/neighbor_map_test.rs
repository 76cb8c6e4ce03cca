//! Integration tests for the adjacency test and neighbor map construction.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordpath::distance::{LevenshteinMatrix, is_adjacent, levenshtein_distance};
use wordpath::error::Result;
use wordpath::prelude::*;

const SAMPLE_WORDS: [&str; 8] = ["dog", "cog", "cot", "cat", "bat", "bad", "bid", "big"];

fn random_word(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn random_dictionary(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet = ['a', 'b', 'c'];
    let mut words = BTreeSet::new();
    while words.len() < count {
        words.insert(random_word(&mut rng, &alphabet, 4));
    }
    words.into_iter().collect()
}

#[test]
fn test_adjacency_scenarios() {
    assert!(is_adjacent("dog", "cog"));
    assert!(is_adjacent("dog", "dogs"));
    assert!(is_adjacent("dogs", "dog"));
    assert!(!is_adjacent("dog", "cat"));
    assert!(!is_adjacent("dog", "dog"));
}

#[test]
fn test_adjacency_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet = ['a', 'b', 'c', 'd'];

    for _ in 0..2000 {
        let a = random_word(&mut rng, &alphabet, 6);
        let b = random_word(&mut rng, &alphabet, 6);
        assert_eq!(is_adjacent(&a, &b), is_adjacent(&b, &a), "{a} / {b}");
    }
}

#[test]
fn test_adjacency_matches_reference_distance() {
    let mut rng = StdRng::seed_from_u64(11);
    let alphabet = ['a', 'b', 'c'];
    let mut matrix = LevenshteinMatrix::new(8);

    let mut adjacent_pairs = 0;
    for _ in 0..3000 {
        let a = random_word(&mut rng, &alphabet, 6);
        let b = random_word(&mut rng, &alphabet, 6);
        if a.len().abs_diff(b.len()) > 1 {
            continue;
        }

        let distance = matrix.distance(&a, &b);
        assert_eq!(distance, levenshtein_distance(&a, &b));
        assert_eq!(is_adjacent(&a, &b), distance == 1, "{a} / {b}");
        if distance == 1 {
            adjacent_pairs += 1;
        }
    }
    assert!(adjacent_pairs > 0);
}

#[test]
fn test_lazy_neighbors_match_full_build() -> Result<()> {
    let words = random_dictionary(3, 60);
    let mut lazy = WordGraph::from_words(words.clone(), WordPathConfig::default())?;
    let full = WordGraph::from_words(words.clone(), WordPathConfig::default().with_full_map(true))?;
    assert_eq!(full.neighbor_map().len(), words.len());

    for word in &words {
        let mut expected: Vec<&str> = full
            .neighbor_map()
            .get(word)
            .unwrap_or_default()
            .iter()
            .map(|&id| full.store().word(id))
            .collect();
        let mut actual = lazy.get_neighbors(word);
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected, "neighbors of {word}");
    }

    Ok(())
}

#[test]
fn test_neighbor_lists_are_exact() -> Result<()> {
    let words = random_dictionary(5, 50);
    let mut graph = WordGraph::from_words(words.clone(), WordPathConfig::default())?;

    for word in &words {
        let expected: BTreeSet<&str> = words
            .iter()
            .filter(|other| is_adjacent(word, other))
            .map(String::as_str)
            .collect();
        let actual: BTreeSet<&str> = graph.get_neighbors(word).into_iter().collect();
        assert_eq!(actual, expected, "neighbors of {word}");
    }

    Ok(())
}

#[test]
fn test_get_neighbors_is_idempotent() -> Result<()> {
    let mut graph = WordGraph::from_words(SAMPLE_WORDS, WordPathConfig::default())?;

    let first: Vec<String> = graph.get_neighbors("cot").into_iter().map(String::from).collect();
    let second: Vec<String> = graph.get_neighbors("cot").into_iter().map(String::from).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec!["cat", "cog"]);

    Ok(())
}

#[test]
fn test_over_long_word_has_no_neighbors() -> Result<()> {
    let config = WordPathConfig::default().with_max_word_length(5);
    let mut graph = WordGraph::from_words(SAMPLE_WORDS, config)?;

    assert!(graph.get_neighbors("dogcatcher").is_empty());
    // The empty answer is remembered.
    assert_eq!(graph.neighbor_map().get("dogcatcher"), Some(&[][..]));

    Ok(())
}

#[test]
fn test_isolated_word_has_no_neighbors() -> Result<()> {
    let mut words = SAMPLE_WORDS.to_vec();
    words.push("xylophone");
    let mut graph = WordGraph::from_words(words, WordPathConfig::default())?;

    assert!(graph.get_neighbors("xylophone").is_empty());
    assert!(!graph.has_neighbors("xylophone"));

    Ok(())
}

#[test]
fn test_full_build_statistics() -> Result<()> {
    let mut graph = WordGraph::from_words(SAMPLE_WORDS, WordPathConfig::default())?;
    let build = graph.build_full_neighbor_map();

    assert_eq!(build.words, 8);
    // dog-cog, cog-cot, cot-cat, cat-bat, bat-bad, bad-bid, bid-big
    assert_eq!(build.relations, 7);
    assert_eq!(build.comparisons + build.skipped_comparisons, 8 * 7 / 2);

    let stats = graph.stats();
    assert_eq!(stats.computed_words, 8);
    assert_eq!(stats.words_with_neighbors, 8);
    assert_eq!(stats.total_neighbors, 14);
    assert_eq!(stats.min_neighbor_count, 1);
    assert_eq!(stats.max_neighbor_count, 2);

    Ok(())
}
