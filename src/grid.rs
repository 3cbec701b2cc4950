//! The letter grid and its matrix utilities: transpose, flatten, and
//! index-to-coordinate conversion. Finders only ever read a grid; nothing
//! here mutates one after construction.

use crate::coords::{Dimensions, GridCoordinate};
use crate::errors::ParseError;

/// A rectangular rows×cols grid of letters, stored flat in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from row strings, validating that at least one non-empty
    /// row exists and that every row has the same number of letters.
    ///
    /// Character case is preserved as given; finders compare case-insensitively.
    ///
    /// # Errors
    ///
    /// `EmptyGrid` for zero rows or zero-length rows, `RaggedRow` when a row's
    /// length differs from the first row's.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let Some(first) = rows.first() else {
            return Err(ParseError::EmptyGrid);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(ParseError::EmptyGrid);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        let dims = Dimensions::new(rows.len(), cols);
        let cells = rows.into_iter().flatten().collect();

        Ok(Grid { dims, cells })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Letter at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(row < self.dims.rows && col < self.dims.cols,
                "position {row}:{col} outside {} grid", self.dims);
        self.cells[row * self.dims.cols + col]
    }

    /// Return a new grid with the axes swapped: `result[c][r] == self[r][c]`.
    ///
    /// Transposing is involutive: doing it twice restores the original grid
    /// exactly, for any rectangular shape.
    #[must_use]
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.dims.cols {
            for row in 0..self.dims.rows {
                cells.push(self.get(row, col));
            }
        }
        Grid {
            dims: Dimensions::new(self.dims.cols, self.dims.rows),
            cells,
        }
    }

    /// Concatenate every row left-to-right, top-to-bottom into one string of
    /// `rows * cols` characters, preserving original character case.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.cells.iter().collect()
    }
}

/// Convert a flat row-major index back to grid coordinates:
/// `row = index / column_count`, `col = index % column_count`.
///
/// Only meaningful for `column_count > 0`.
#[must_use]
pub fn index_to_coordinates(index: usize, column_count: usize) -> GridCoordinate {
    debug_assert!(column_count > 0);
    GridCoordinate::new((index / column_count) as i32, (index % column_count) as i32)
}
