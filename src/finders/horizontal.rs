//! Finds words horizontally (left-to-right and right-to-left), never
//! spanning rows.

use super::{scan_flat, ORIENTATIONS};
use crate::grid::{index_to_coordinates, Grid};
use crate::matches::Match;

/// Find every horizontal occurrence of every word, in both orientations.
///
/// The grid is flattened to one long string with row boundaries implicit via
/// the column count; [`scan_flat`] rejects hits that wrap into the next row.
/// Emission order is deterministic: word-list order, forward before reverse,
/// then ascending position.
#[must_use]
pub fn find(grid: &Grid, words: &[String]) -> Vec<Match> {
    let column_count = grid.cols();
    let data: Vec<char> = grid.flatten().chars().collect();

    let mut found = Vec::new();
    for word in words {
        let upper = word.to_uppercase();
        for orientation in ORIENTATIONS {
            let needle = orientation.needle(&upper);
            for (start, end) in scan_flat(&data, &needle, column_count) {
                let run_start = index_to_coordinates(start, column_count);
                let run_end = index_to_coordinates(end, column_count);
                found.push(orientation.into_match(&upper, run_start, run_end));
            }
        }
    }
    found
}
