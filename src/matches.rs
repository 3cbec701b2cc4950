//! A located word occurrence: the matched word plus the coordinates of its
//! first and last cell along the reading direction.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::coords::GridCoordinate;
use crate::errors::ParseError;

/// A found word in the grid.
///
/// `start` is the cell where the word *begins in the direction actually read*:
/// a word read right-to-left has `start.col > end.col`. A palindrome found in
/// both directions yields two distinct records with start/end swapped.
///
/// Canonical text form: `"{word} {start} {end}"`, round-trippable through
/// [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub word: String,
    pub start: GridCoordinate,
    pub end: GridCoordinate,
}

impl Match {
    #[must_use]
    pub fn new(word: impl Into<String>, start: GridCoordinate, end: GridCoordinate) -> Self {
        Self { word: word.into(), start, end }
    }

    /// Every grid cell from `start` to `end` inclusive, one unit step at a
    /// time along the direction implied by `end - start` (each axis delta
    /// normalized to -1, 0 or 1). The path has `max(|Δrow|, |Δcol|) + 1` cells.
    #[must_use]
    pub fn path(&self) -> Vec<GridCoordinate> {
        let row_step = (self.end.row - self.start.row).signum();
        let col_step = (self.end.col - self.start.col).signum();
        let steps = (self.end.row - self.start.row)
            .abs()
            .max((self.end.col - self.start.col).abs());

        (0..=steps)
            .map(|i| GridCoordinate::new(self.start.row + i * row_step, self.start.col + i * col_step))
            .collect()
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.word, self.start, self.end)
    }
}

impl FromStr for Match {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(word), Some(start), Some(end), None) => {
                Ok(Match::new(word, start.parse()?, end.parse()?))
            }
            _ => Err(ParseError::InvalidMatch { input: s.to_string() }),
        }
    }
}
