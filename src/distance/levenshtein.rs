//! Levenshtein distance calculation.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Create a matrix to store distances
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    // Fill the matrix
    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// A reusable distance matrix for comparing many word pairs.
///
/// The first row and column of the Levenshtein matrix never change, so they
/// are filled once up front and only the interior is rewritten per call.
/// Words longer than the capacity fall back to [`levenshtein_distance`].
#[derive(Debug, Clone)]
pub struct LevenshteinMatrix {
    capacity: usize,
    cells: Vec<usize>,
    left: Vec<char>,
    right: Vec<char>,
}

impl LevenshteinMatrix {
    /// Create a matrix able to compare words of up to `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        let width = capacity + 1;
        let mut cells = vec![0; width * width];
        for i in 0..width {
            cells[i * width] = i;
            cells[i] = i;
        }

        LevenshteinMatrix {
            capacity,
            cells,
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    /// Longest word this matrix handles without allocating.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Calculate the Levenshtein distance between two strings.
    pub fn distance(&mut self, s1: &str, s2: &str) -> usize {
        self.left.clear();
        self.left.extend(s1.chars());
        self.right.clear();
        self.right.extend(s2.chars());

        let len1 = self.left.len();
        let len2 = self.right.len();
        if len1 > self.capacity || len2 > self.capacity {
            return levenshtein_distance(s1, s2);
        }

        let width = self.capacity + 1;
        for i in 1..=len1 {
            for j in 1..=len2 {
                let cost = if self.left[i - 1] == self.right[j - 1] {
                    0
                } else {
                    1
                };

                self.cells[i * width + j] = min(
                    min(
                        self.cells[(i - 1) * width + j] + 1, // deletion
                        self.cells[i * width + j - 1] + 1,   // insertion
                    ),
                    self.cells[(i - 1) * width + j - 1] + cost, // substitution
                );
            }
        }

        self.cells[len1 * width + len2]
    }
}
