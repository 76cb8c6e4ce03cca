//! Neighbor list construction.
//!
//! [`build_full`] compares every pair of dictionary words once, up front.
//! [`build_lazy`] computes the neighbors of a single word on demand, looking
//! only at the words within one character of its length.

use log::{debug, info, warn};

use crate::dictionary::{WordId, WordStore};
use crate::distance::{deletion_count, is_adjacent_with_lengths, substitution_count};
use crate::error::WordPathError;
use crate::graph::neighbor_map::NeighborMap;
use crate::graph::stats::BuildStats;

const PROGRESS_INTERVAL: usize = 10_000;

/// Fill `map` with the neighbors of every word in the store.
///
/// Each pair is compared once (j > i). Because the store is sorted by
/// length, a row stops as soon as it reaches a word two or more characters
/// longer. Words already cached in `map` keep their entries.
pub fn build_full(store: &WordStore, map: &mut NeighborMap) -> BuildStats {
    let word_count = store.len();
    let mut lists: Vec<Vec<WordId>> = vec![Vec::new(); word_count];
    let mut stats = BuildStats {
        words: word_count,
        ..Default::default()
    };

    for i in 0..word_count {
        let w1 = store.word(i);
        let w1l = store.word_len(i);

        for j in (i + 1)..word_count {
            let w2l = store.word_len(j);
            let adjacent = if w1l == w2l {
                substitution_count(w1, store.word(j)) == 1
            } else if w2l == w1l + 1 {
                deletion_count(w1, store.word(j)) == 1
            } else {
                stats.skipped_comparisons += (word_count - j) as u64;
                break;
            };
            stats.comparisons += 1;

            if adjacent {
                lists[i].push(j);
                lists[j].push(i);
                stats.relations += 1;
            }
        }

        if i > 0 && i % PROGRESS_INTERVAL == 0 {
            debug!(
                "Finished '{}' ({}/{} words), {} comparisons, {} relations",
                w1, i, word_count, stats.comparisons, stats.relations
            );
        }
    }

    for (id, list) in lists.into_iter().enumerate() {
        map.insert_if_absent(store.word(id), list);
    }

    info!(
        "Built full neighbor map: {} comparisons, {} skipped, {} relations",
        stats.comparisons, stats.skipped_comparisons, stats.relations
    );

    stats
}

/// Compute the neighbors of one word, which need not be in the store.
///
/// Scans from the first word one character shorter than `word` to the last
/// word one character longer. A word over the store's length limit gets no
/// neighbors.
pub fn build_lazy(store: &WordStore, word: &str) -> Vec<WordId> {
    let len = word.chars().count();
    if len > store.max_word_length() {
        warn!(
            "{}; no neighbors computed",
            WordPathError::word_too_long(word, store.max_word_length())
        );
        return Vec::new();
    }

    let index = store.length_index();
    let start = index.start_of(len.saturating_sub(1));
    let end = index.start_of(len + 2);

    (start..end)
        .filter(|&id| is_adjacent_with_lengths(word, len, store.word(id), store.word_len(id)))
        .collect()
}
