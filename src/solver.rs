//! The public search surface: run all three directional finders over a grid
//! and concatenate their results.
//!
//! # Examples
//!
//! ```
//! use gridseek::grid::Grid;
//! use gridseek::solver;
//!
//! let grid = Grid::from_rows(["CAT", "XXX", "TAC"])?;
//! let matches = solver::find_words(&grid, ["CAT"]);
//!
//! // CAT appears forward in row 0 and reversed in row 2
//! for m in &matches {
//!     println!("{m}");
//! }
//! assert_eq!(matches.len(), 2);
//! # Ok::<(), gridseek::errors::ParseError>(())
//! ```

use crate::finders::{diagonal, horizontal, vertical};
use crate::grid::Grid;
use crate::matches::Match;

/// Find every occurrence of every word in the grid, across all eight reading
/// directions.
///
/// The word list is materialized once and handed to each finder; results are
/// concatenated (horizontal, then vertical, then diagonal) with no
/// deduplication, reordering, or filtering — a palindrome or a single-letter
/// word produces one record per direction it is read in. An empty word list
/// or a grid with no occurrences yields an empty vector, not an error.
#[must_use]
pub fn find_words<I, S>(grid: &Grid, words: I) -> Vec<Match>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let word_list: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .collect();

    log::debug!(
        "searching {} grid for {} words",
        grid.dimensions(),
        word_list.len()
    );

    let mut found = horizontal::find(grid, &word_list);
    found.extend(vertical::find(grid, &word_list));
    found.extend(diagonal::find(grid, &word_list));

    log::debug!("found {} matches", found.len());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::GridCoordinate;

    #[test]
    fn test_aggregator_completeness() {
        // HELLO placed horizontally (row 0), vertically (col 0, rows 1-5),
        // and diagonally ((1,1) to (5,5)), in disjoint locations
        let grid = Grid::from_rows([
            "HELLOX",
            "HHXXXX",
            "EXEXXX",
            "LXXLXX",
            "LXXXLX",
            "OXXXXO",
        ])
        .unwrap();

        let found = find_words(&grid, ["HELLO"]);
        assert_eq!(found.len(), 3);

        let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert!(rendered.contains(&"HELLO 0:0 0:4".to_string()));
        assert!(rendered.contains(&"HELLO 1:0 5:0".to_string()));
        assert!(rendered.contains(&"HELLO 1:1 5:5".to_string()));
    }

    #[test]
    fn test_empty_word_list() {
        let grid = Grid::from_rows(["AB", "CD"]).unwrap();
        assert!(find_words(&grid, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_no_occurrences_is_empty_not_error() {
        let grid = Grid::from_rows(["AB", "CD"]).unwrap();
        assert!(find_words(&grid, ["ZEBRA"]).is_empty());
    }

    #[test]
    fn test_duplicate_words_reported_per_listing() {
        let grid = Grid::from_rows(["CATXX"]).unwrap();
        let found = find_words(&grid, ["CAT", "CAT"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);
    }

    #[test]
    fn test_single_char_word_in_1x1_grid() {
        // each finder reads the lone cell both forward and reverse:
        // 2 horizontal + 2 vertical + 4 diagonal (two families)
        let grid = Grid::from_rows(["A"]).unwrap();
        let found = find_words(&grid, ["a"]);
        assert_eq!(found.len(), 8);
        for m in &found {
            assert_eq!(m.word, "A");
            assert_eq!(m.start, GridCoordinate::new(0, 0));
            assert_eq!(m.end, GridCoordinate::new(0, 0));
        }
    }

    #[test]
    fn test_word_in_multiple_directions_at_once() {
        // CAT horizontal in row 0 and down the main diagonal, sharing (0,0)
        let grid = Grid::from_rows(["CAT", "XAX", "XXT"]).unwrap();
        let found = find_words(&grid, ["CAT"]);

        let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["CAT 0:0 0:2", "CAT 0:0 2:2"]);
    }
}
