//! The three directional finders. Each independently scans the grid (or a
//! transform of it) for every word in both reading orientations; the
//! aggregator in [`crate::solver`] concatenates their results.

pub mod diagonal;
pub mod horizontal;
pub mod vertical;

use crate::letters::find_overlapping;
use crate::coords::GridCoordinate;
use crate::matches::Match;

/// Reading orientation of a scan: the word's given letter order, or its
/// character-reversed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    Forward,
    Reverse,
}

pub(crate) const ORIENTATIONS: [Orientation; 2] = [Orientation::Forward, Orientation::Reverse];

impl Orientation {
    /// The needle actually scanned for: the uppercased word itself, or its
    /// reversal.
    pub(crate) fn needle(self, upper_word: &str) -> Vec<char> {
        match self {
            Orientation::Forward => upper_word.chars().collect(),
            Orientation::Reverse => upper_word.chars().rev().collect(),
        }
    }

    /// Build a [`Match`] from the first and last cell of the scanned run.
    ///
    /// The reported word is always the original uppercase word. For a reverse
    /// hit the scanned run spells the word backwards, so start and end are
    /// swapped: the match starts where the word's first letter sits.
    pub(crate) fn into_match(
        self,
        word: &str,
        run_start: GridCoordinate,
        run_end: GridCoordinate,
    ) -> Match {
        match self {
            Orientation::Forward => Match::new(word, run_start, run_end),
            Orientation::Reverse => Match::new(word, run_end, run_start),
        }
    }
}

/// Scan a flattened row-major grid for every occurrence of `needle`,
/// rejecting any hit that would wrap past the end of its line into the next
/// one. Returns `(start_index, end_index)` pairs into the flat data.
///
/// Flattening makes a run that crosses a row boundary look contiguous; the
/// wrap test (`end column >= column_count`) filters those out.
pub(crate) fn scan_flat(
    data: &[char],
    needle: &[char],
    column_count: usize,
) -> Vec<(usize, usize)> {
    find_overlapping(data, needle)
        .into_iter()
        .filter(|&start| {
            let start_col = start % column_count;
            start_col + needle.len() <= column_count
        })
        .map(|start| (start, start + needle.len() - 1))
        .collect()
}
