//! Finds words vertically (top-to-bottom and bottom-to-top), never spanning
//! columns. Works by transposing the grid so that columns become rows, then
//! scanning exactly like the horizontal finder and swapping the coordinate
//! roles back.

use super::{scan_flat, ORIENTATIONS};
use crate::coords::GridCoordinate;
use crate::grid::{index_to_coordinates, Grid};
use crate::matches::Match;

/// Find every vertical occurrence of every word, in both orientations.
///
/// In the transposed grid a hit's row is the original column and vice versa;
/// the wrap-rejection test in [`scan_flat`] here means "does not spill into
/// the next column".
#[must_use]
pub fn find(grid: &Grid, words: &[String]) -> Vec<Match> {
    let transposed = grid.transpose();
    let column_count = transposed.cols();
    let data: Vec<char> = transposed.flatten().chars().collect();

    let mut found = Vec::new();
    for word in words {
        let upper = word.to_uppercase();
        for orientation in ORIENTATIONS {
            let needle = orientation.needle(&upper);
            for (start, end) in scan_flat(&data, &needle, column_count) {
                let run_start = swap_axes(index_to_coordinates(start, column_count));
                let run_end = swap_axes(index_to_coordinates(end, column_count));
                found.push(orientation.into_match(&upper, run_start, run_end));
            }
        }
    }
    found
}

/// Map a transposed-grid coordinate back to the original grid.
fn swap_axes(c: GridCoordinate) -> GridCoordinate {
    GridCoordinate::new(c.col, c.row)
}
