//! Coordinate and dimension value types with their canonical text forms.
//!
//! Both types round-trip through `Display`/`FromStr`: formatting a value and
//! parsing the result yields an equal value. Parsers fail with a [`ParseError`]
//! naming the offending string; they never substitute defaults.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::ParseError;

/// A position in the word search grid.
///
/// Rows and columns are signed so that coordinate arithmetic (deltas, steps)
/// stays in one type; valid grid positions are always non-negative.
///
/// Canonical text form: `"{row}:{col}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub row: i32,
    pub col: i32,
}

impl GridCoordinate {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Display for GridCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl FromStr for GridCoordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoordinate { input: s.to_string() };

        let (row_str, col_str) = s.split_once(':').ok_or_else(invalid)?;
        let row = row_str.trim().parse().map_err(|_| invalid())?;
        let col = col_str.trim().parse().map_err(|_| invalid())?;

        Ok(GridCoordinate::new(row, col))
    }
}

/// Shape classification of a grid: more rows than columns, the opposite,
/// or equal extents. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixShape {
    Tall,
    Wide,
    Square,
}

/// The extents of a word search grid, both positive once validated.
///
/// Canonical text form: `"{rows}x{columns}"`; the separator letter is
/// case-insensitive when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Classify the grid shape by comparing extents.
    #[must_use]
    pub fn shape(&self) -> MatrixShape {
        if self.rows > self.cols {
            MatrixShape::Tall
        } else if self.cols > self.rows {
            MatrixShape::Wide
        } else {
            MatrixShape::Square
        }
    }

    /// Total number of cells in a grid of these dimensions.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for Dimensions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDimensions { input: s.to_string() };

        let (rows_str, cols_str) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let rows: usize = rows_str.trim().parse().map_err(|_| invalid())?;
        let cols: usize = cols_str.trim().parse().map_err(|_| invalid())?;

        if rows == 0 || cols == 0 {
            return Err(ParseError::DegenerateDimensions { rows, cols });
        }

        Ok(Dimensions::new(rows, cols))
    }
}
