//! Level-synchronized breadth-first search for every shortest path.
//!
//! The queue is split into levels by `EndOfLevel` markers. When a marker is
//! popped the level behind it is sealed: its words join the visited set, so
//! no deeper level can expand them again. Within a level the same word may
//! be queued once per parent, which is what lets every shortest path be
//! rebuilt rather than only the first one found.

use std::collections::VecDeque;

use ahash::AHashSet;
use log::debug;

use crate::dictionary::{WordId, WordStore};
use crate::graph::NeighborMap;
use crate::search::path::{RawPaths, SearchStats};

type NodeId = usize;

/// One step in the exploration tree. Parents are indices into the arena.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    word: WordId,
    parent: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frontier {
    EndOfLevel,
    Node(NodeId),
}

/// Find every shortest path from `source` to `target`.
///
/// Stops at the first level boundary after any path was recorded, so every
/// path returned has the minimum length.
pub(crate) fn search(
    store: &WordStore,
    neighbors: &mut NeighborMap,
    source: WordId,
    target: WordId,
) -> RawPaths {
    let mut arena = vec![PathNode {
        word: source,
        parent: None,
    }];
    let mut queue = VecDeque::from([Frontier::EndOfLevel, Frontier::Node(0)]);
    let mut visited: AHashSet<WordId> = AHashSet::new();
    let mut paths = Vec::new();
    let mut stats = SearchStats::default();

    while let Some(entry) = queue.pop_front() {
        let node_id = match entry {
            Frontier::EndOfLevel => {
                if queue.is_empty() || !paths.is_empty() {
                    break;
                }
                for queued in &queue {
                    if let Frontier::Node(id) = *queued {
                        visited.insert(arena[id].word);
                    }
                }
                queue.push_back(Frontier::EndOfLevel);
                stats.levels += 1;
                continue;
            }
            Frontier::Node(id) => id,
        };

        stats.nodes_expanded += 1;
        let word = arena[node_id].word;
        for &next in neighbors.get_or_build(store, store.word(word)) {
            if next == target {
                paths.push(reconstruct_path(&arena, node_id, next));
            }
            if !visited.contains(&next) {
                arena.push(PathNode {
                    word: next,
                    parent: Some(node_id),
                });
                queue.push_back(Frontier::Node(arena.len() - 1));
            }
        }
    }

    debug!(
        "Level search from '{}' to '{}': {} nodes expanded over {} levels, {} paths",
        store.word(source),
        store.word(target),
        stats.nodes_expanded,
        stats.levels,
        paths.len()
    );

    RawPaths { paths, stats }
}

/// Walk parents from `node` back to the root and append `last`.
fn reconstruct_path(arena: &[PathNode], node: NodeId, last: WordId) -> Vec<WordId> {
    let mut path = vec![last];
    let mut current = Some(node);

    while let Some(id) = current {
        path.push(arena[id].word);
        current = arena[id].parent;
    }

    path.reverse();
    path
}
