//! Finds words along diagonals, covering all four diagonal reading
//! directions by sweeping both diagonal families in both orientations.

use super::ORIENTATIONS;
use crate::coords::GridCoordinate;
use crate::grid::Grid;
use crate::letters::find_overlapping;
use crate::matches::Match;

/// One of the two sets of diagonals a grid decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalFamily {
    /// Diagonals running down-right (↘): cells sharing `row - col`.
    FromLeft,
    /// Diagonals running down-left (↙): cells sharing `row + col`.
    FromRight,
}

impl DiagonalFamily {
    /// Bucket index of a cell within this family, in `0..rows + cols - 1`.
    fn bucket_index(self, row: usize, col: usize, cols: usize) -> usize {
        match self {
            // row - col, shifted by cols - 1 to stay non-negative
            DiagonalFamily::FromLeft => row + (cols - 1) - col,
            DiagonalFamily::FromRight => row + col,
        }
    }
}

/// One diagonal: its letters and the grid cell behind each letter, in
/// increasing-row order.
struct Diagonal {
    letters: Vec<char>,
    cells: Vec<GridCoordinate>,
}

/// Partition every grid cell into the `rows + cols - 1` diagonals of one
/// family. Row-major traversal guarantees increasing-row order per bucket.
fn extract_diagonals(grid: &Grid, family: DiagonalFamily) -> Vec<Diagonal> {
    let (rows, cols) = (grid.rows(), grid.cols());

    let mut diagonals: Vec<Diagonal> = (0..rows + cols - 1)
        .map(|_| Diagonal { letters: Vec::new(), cells: Vec::new() })
        .collect();

    for row in 0..rows {
        for col in 0..cols {
            let bucket = &mut diagonals[family.bucket_index(row, col, cols)];
            bucket.letters.push(grid.get(row, col));
            bucket.cells.push(GridCoordinate::new(row as i32, col as i32));
        }
    }

    diagonals
}

/// Find every diagonal occurrence of every word.
///
/// Both families are swept in both orientations, which yields the four
/// diagonal reading directions (↘, ↖, ↙, ↗). Bucket membership already
/// guarantees a run stays on one diagonal, so no wrap rejection is needed;
/// matched string indices map back through the bucket's cell list.
#[must_use]
pub fn find(grid: &Grid, words: &[String]) -> Vec<Match> {
    let from_left = extract_diagonals(grid, DiagonalFamily::FromLeft);
    let from_right = extract_diagonals(grid, DiagonalFamily::FromRight);

    let mut found = Vec::new();
    for word in words {
        let upper = word.to_uppercase();
        for family in [&from_left, &from_right] {
            for orientation in ORIENTATIONS {
                let needle = orientation.needle(&upper);
                for diagonal in family {
                    if diagonal.letters.len() < needle.len() {
                        continue;
                    }
                    for start in find_overlapping(&diagonal.letters, &needle) {
                        let run_start = diagonal.cells[start];
                        let run_end = diagonal.cells[start + needle.len() - 1];
                        found.push(orientation.into_match(&upper, run_start, run_end));
                    }
                }
            }
        }
    }
    found
}
