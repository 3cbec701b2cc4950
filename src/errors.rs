//! Error types for parsing operations with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E008) for documentation lookup:
//!
//! - E001: `InvalidCoordinate` (Malformed `"row:col"` text)
//! - E002: `InvalidDimensions` (Malformed `"ROWSxCOLS"` text)
//! - E003: `DegenerateDimensions` (Zero rows or columns)
//! - E004: `InvalidMatch` (Malformed `"WORD start end"` text)
//! - E005: `EmptyPuzzle` (Puzzle text too short to contain a grid)
//! - E006: `MissingGridRows` (Fewer grid rows than the header declares)
//! - E007: `RaggedRow` (Grid row with the wrong number of letters)
//! - E008: `EmptyGrid` (Grid built from zero rows or zero-length rows)
//!
//! # Examples
//!
//! ```
//! use gridseek::errors::ParseError;
//!
//! let err = ParseError::InvalidCoordinate { input: "3;7".to_string() };
//! println!("Error: {}", err);
//! println!("Code: {}", err.code());
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::io;

/// Custom error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid coordinate: \"{input}\"")]
    InvalidCoordinate { input: String },

    #[error("Invalid dimensions: \"{input}\"")]
    InvalidDimensions { input: String },

    #[error("Dimensions must be positive: {rows}x{cols}")]
    DegenerateDimensions { rows: usize, cols: usize },

    #[error("Invalid match: \"{input}\"")]
    InvalidMatch { input: String },

    #[error("Puzzle must contain a dimensions line and at least one grid row")]
    EmptyPuzzle,

    #[error("Expected {expected} grid rows but found {found}")]
    MissingGridRows { expected: usize, found: usize },

    #[error("Grid row {row} has {actual} letters but expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidData, pe.to_string())
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidCoordinate { .. } => "E001",
            ParseError::InvalidDimensions { .. } => "E002",
            ParseError::DegenerateDimensions { .. } => "E003",
            ParseError::InvalidMatch { .. } => "E004",
            ParseError::EmptyPuzzle => "E005",
            ParseError::MissingGridRows { .. } => "E006",
            ParseError::RaggedRow { .. } => "E007",
            ParseError::EmptyGrid => "E008",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidCoordinate { .. } => Some("Expected format: ROW:COL (e.g., '3:7')"),
            ParseError::InvalidDimensions { .. } => Some("Expected format: ROWSxCOLUMNS (e.g., '10x10')"),
            ParseError::DegenerateDimensions { .. } => Some("Both the row count and the column count must be at least 1"),
            ParseError::InvalidMatch { .. } => Some("Expected format: WORD START END (e.g., 'CAT 0:0 0:2')"),
            ParseError::EmptyPuzzle => Some("A puzzle file starts with a dimensions line like '5x5', followed by the letter grid"),
            ParseError::RaggedRow { .. } => Some("Every grid row must have the same number of letters as the declared column count"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
