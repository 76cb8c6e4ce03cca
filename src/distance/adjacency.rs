//! Linear-time test for words exactly one edit apart.
//!
//! Two words can only be one substitution apart when they have the same
//! length, and one insertion or deletion apart when their lengths differ by
//! exactly one. Each case is a single left-to-right scan that gives up as
//! soon as a second difference shows up.

/// Count the positions where two equal-length words differ.
///
/// Stops counting at 2, so the result is 0, 1 or 2. The caller guarantees
/// both words have the same number of characters.
pub fn substitution_count(a: &str, b: &str) -> usize {
    let mut diffs = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            diffs += 1;
            if diffs > 1 {
                break;
            }
        }
    }
    diffs
}

/// Count the deletions from `longer` needed to reach `shorter`.
///
/// The caller guarantees `longer` has exactly one more character than
/// `shorter`. Each mismatch skips one character of `longer`; a character left
/// over at the end of `longer` counts as the final deletion. Stops early once
/// two mismatches are seen, so the result only matters when it equals 1.
pub fn deletion_count(shorter: &str, longer: &str) -> usize {
    let mut short = shorter.chars().peekable();
    let mut long = longer.chars();
    let mut diffs = 0;

    while diffs < 2 {
        let Some(&s) = short.peek() else {
            break;
        };
        match long.next() {
            Some(l) if l == s => {
                short.next();
            }
            Some(_) => diffs += 1,
            None => break,
        }
    }

    if long.next().is_some() {
        diffs += 1;
    }

    diffs
}

/// Whether two words are exactly one edit apart, given their character counts.
///
/// Identical words are distance 0 and so are not adjacent.
#[inline]
pub fn is_adjacent_with_lengths(a: &str, a_len: usize, b: &str, b_len: usize) -> bool {
    if a_len == b_len {
        substitution_count(a, b) == 1
    } else if a_len + 1 == b_len {
        deletion_count(a, b) == 1
    } else if b_len + 1 == a_len {
        deletion_count(b, a) == 1
    } else {
        false
    }
}

/// Whether two words are exactly one insertion, deletion or substitution apart.
///
/// # Examples
///
/// ```
/// use wordpath::distance::is_adjacent;
///
/// assert!(is_adjacent("dog", "cog"));
/// assert!(is_adjacent("dog", "dogs"));
/// assert!(!is_adjacent("dog", "cat"));
/// assert!(!is_adjacent("dog", "dog"));
/// ```
pub fn is_adjacent(a: &str, b: &str) -> bool {
    is_adjacent_with_lengths(a, a.chars().count(), b, b.chars().count())
}
