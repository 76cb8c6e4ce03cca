//! Bidirectional breadth-first search for every shortest path.
//!
//! Frontiers grow from both ends, the smaller one first, until they share a
//! word. Each frontier records every parent a word was reached from, so the
//! paths on either side of a meeting word can all be rebuilt and joined.

use ahash::AHashMap;
use log::debug;

use crate::dictionary::{WordId, WordStore};
use crate::graph::NeighborMap;
use crate::search::path::{RawPaths, SearchStats};

/// Word -> the words it was reached from on the previous level.
type Parents = AHashMap<WordId, Vec<WordId>>;

/// Find every shortest path from `source` to `target`.
pub(crate) fn search(
    store: &WordStore,
    neighbors: &mut NeighborMap,
    source: WordId,
    target: WordId,
) -> RawPaths {
    let mut left_frontier: Parents = Parents::from_iter([(source, Vec::new())]);
    let mut left_explored = Parents::new();
    let mut right_frontier: Parents = Parents::from_iter([(target, Vec::new())]);
    let mut right_explored = Parents::new();
    let mut stats = SearchStats::default();

    while !left_frontier.is_empty() && !right_frontier.is_empty() {
        let mut meeting: Vec<WordId> = left_frontier
            .keys()
            .filter(|word| right_frontier.contains_key(*word))
            .copied()
            .collect();

        if !meeting.is_empty() {
            meeting.sort_unstable();
            let mut paths = Vec::new();
            for word in meeting {
                let left = chains_to(word, parents_of(&left_frontier, word), &left_explored);
                let right = chains_to(word, parents_of(&right_frontier, word), &right_explored);
                for head in &left {
                    for tail in &right {
                        let mut path = head.clone();
                        path.extend(tail.iter().rev().skip(1));
                        paths.push(path);
                    }
                }
            }

            debug!(
                "Bidirectional search from '{}' to '{}': {} nodes expanded, {} paths",
                store.word(source),
                store.word(target),
                stats.nodes_expanded,
                paths.len()
            );
            return RawPaths { paths, stats };
        }

        if left_frontier.len() <= right_frontier.len() {
            left_frontier = advance(store, neighbors, left_frontier, &mut left_explored, &mut stats);
        } else {
            right_frontier =
                advance(store, neighbors, right_frontier, &mut right_explored, &mut stats);
        }
        stats.levels += 1;
    }

    debug!(
        "Bidirectional search from '{}' to '{}': frontier exhausted after {} nodes",
        store.word(source),
        store.word(target),
        stats.nodes_expanded
    );
    RawPaths {
        paths: Vec::new(),
        stats,
    }
}

/// Move `frontier` into `explored` and return the next frontier out from it.
fn advance(
    store: &WordStore,
    neighbors: &mut NeighborMap,
    frontier: Parents,
    explored: &mut Parents,
    stats: &mut SearchStats,
) -> Parents {
    let mut words: Vec<WordId> = frontier.keys().copied().collect();
    words.sort_unstable();
    explored.extend(frontier);

    let mut next = Parents::new();
    for word in words {
        stats.nodes_expanded += 1;
        for &neighbor in neighbors.get_or_build(store, store.word(word)) {
            if explored.contains_key(&neighbor) {
                continue;
            }
            next.entry(neighbor).or_default().push(word);
        }
    }

    next
}

fn parents_of(parents: &Parents, word: WordId) -> &[WordId] {
    parents.get(&word).map(Vec::as_slice).unwrap_or_default()
}

/// Every chain from the root of one side to `word`, root first.
fn chains_to(word: WordId, parents: &[WordId], explored: &Parents) -> Vec<Vec<WordId>> {
    if parents.is_empty() {
        return vec![vec![word]];
    }

    let mut chains = Vec::new();
    for &parent in parents {
        for mut chain in chains_to(parent, parents_of(explored, parent), explored) {
            chain.push(word);
            chains.push(chain);
        }
    }
    chains
}
