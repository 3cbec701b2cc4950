//! `puzzle` — Module to load and parse a word search puzzle from its textual
//! file format.
//!
//! The expected format:
//! - First non-empty line: dimensions (e.g., `5x5`).
//! - Next `rows` lines: the letter grid, either continuous (`CATXX`) or with
//!   spaces between letters (`C A T X X`).
//! - Remaining lines: the words to find, one per line.
//!
//! All line-ending styles (LF, CRLF, bare CR) are tolerated, blank lines are
//! skipped, and letters and words are normalized to uppercase. The search
//! engine itself never depends on this module; it exists so a grid can come
//! straight from a file.
//!
//! The public API provides:
//! - `Puzzle::parse_from_str(...)` — parse in-memory text.
//! - `Puzzle::load_from_path(...)` — convenience method to read from a file path.

use crate::coords::Dimensions;
use crate::errors::ParseError;
use crate::grid::Grid;

/// A parsed, ready-to-search puzzle: validated grid plus target word list.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub dimensions: Dimensions,
    pub grid: Grid,
    pub words: Vec<String>,
}

impl Puzzle {
    /// Parse a puzzle from in-memory text.
    ///
    /// # Errors
    ///
    /// - `EmptyPuzzle` when the text holds fewer than two non-empty lines.
    /// - `InvalidDimensions` / `DegenerateDimensions` for a bad header line.
    /// - `MissingGridRows` when the header declares more rows than exist.
    /// - `RaggedRow` when a grid row's letter count differs from the declared
    ///   column count.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, ParseError> {
        // Tolerate all line-ending styles and skip blank lines.
        let lines: Vec<&str> = contents
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(ParseError::EmptyPuzzle);
        }

        let dimensions: Dimensions = lines[0].parse()?;

        if lines.len() < dimensions.rows + 1 {
            return Err(ParseError::MissingGridRows {
                expected: dimensions.rows,
                found: lines.len() - 1,
            });
        }

        // Grid rows: strip the optional spaces between letters, uppercase,
        // and hold each row to the declared column count.
        let mut grid_rows = Vec::with_capacity(dimensions.rows);
        for (i, line) in lines[1..=dimensions.rows].iter().enumerate() {
            let row: String = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase();
            let letter_count = row.chars().count();
            if letter_count != dimensions.cols {
                return Err(ParseError::RaggedRow {
                    row: i,
                    expected: dimensions.cols,
                    actual: letter_count,
                });
            }
            grid_rows.push(row);
        }

        let grid = Grid::from_rows(&grid_rows)?;

        // Everything after the grid is a target word.
        let words = lines[dimensions.rows + 1..]
            .iter()
            .map(|line| line.to_uppercase())
            .collect();

        Ok(Puzzle { dimensions, grid, words })
    }

    /// Read a puzzle file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, or when its contents
    /// fail to parse (the `ParseError` is converted into an `io::Error`).
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Puzzle> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data)?)
    }
}
