//! Integration tests for the gridseek word search solver.
//!
//! These tests verify the complete pipeline from puzzle-file parsing through
//! the directional finders to match serialization, using realistic puzzles.

use std::collections::HashSet;

use gridseek::coords::{Dimensions, GridCoordinate, MatrixShape};
use gridseek::grid::Grid;
use gridseek::matches::Match;
use gridseek::puzzle::Puzzle;
use gridseek::solver;

/// Load the fixture puzzle from disk
fn load_fixture() -> Puzzle {
    Puzzle::load_from_path("tests/fixtures/animals.puzzle")
        .expect("Failed to read fixture puzzle")
}

/// Helper to render matches as their canonical strings
fn rendered(matches: &[Match]) -> Vec<String> {
    matches.iter().map(ToString::to_string).collect()
}

mod puzzle_pipeline {
    use super::*;

    #[test]
    fn test_fixture_parses() {
        let puzzle = load_fixture();
        assert_eq!(puzzle.dimensions, Dimensions::new(5, 5));
        assert_eq!(puzzle.dimensions.shape(), MatrixShape::Square);
        assert_eq!(puzzle.words, vec!["CAT", "DOG", "TEN", "CODE"]);
        assert_eq!(puzzle.grid.flatten().len(), 25);
    }

    #[test]
    fn test_fixture_full_solve() {
        let puzzle = load_fixture();
        let found = solver::find_words(&puzzle.grid, &puzzle.words);

        let expected: HashSet<String> = [
            "CAT 0:0 0:2",  // horizontal, row 0
            "CAT 0:0 2:2",  // down-right diagonal
            "DOG 3:1 3:3",  // horizontal, row 3
            "TEN 2:2 2:4",  // horizontal, row 2
            "CODE 0:0 3:0", // vertical, column 0
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert_eq!(found.len(), 5, "matches: {:?}", rendered(&found));
        let actual: HashSet<String> = rendered(&found).into_iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_found_paths_stay_inside_grid() {
        let puzzle = load_fixture();
        let dims = puzzle.dimensions;

        for m in solver::find_words(&puzzle.grid, &puzzle.words) {
            let path = m.path();
            assert_eq!(path.len(), m.word.chars().count());
            for cell in path {
                assert!(cell.row >= 0 && (cell.row as usize) < dims.rows);
                assert!(cell.col >= 0 && (cell.col as usize) < dims.cols);
            }
        }
    }

    #[test]
    fn test_path_letters_spell_the_word() {
        let puzzle = load_fixture();

        for m in solver::find_words(&puzzle.grid, &puzzle.words) {
            let spelled: String = m
                .path()
                .iter()
                .map(|c| puzzle.grid.get(c.row as usize, c.col as usize))
                .collect();
            assert_eq!(spelled, m.word, "match {m}");
        }
    }

    #[test]
    fn test_extra_words_searched_case_insensitively() {
        let puzzle = load_fixture();
        let found = solver::find_words(&puzzle.grid, ["code"]);
        assert_eq!(rendered(&found), vec!["CODE 0:0 3:0"]);
    }
}

mod round_trips {
    use super::*;

    #[test]
    fn test_every_found_match_round_trips() {
        let puzzle = load_fixture();
        for m in solver::find_words(&puzzle.grid, &puzzle.words) {
            let reparsed: Match = m.to_string().parse().unwrap();
            assert_eq!(reparsed, m);
        }
    }

    #[test]
    fn test_coordinate_and_dimension_round_trips() {
        let coord = GridCoordinate::new(4, 2);
        assert_eq!(coord.to_string().parse::<GridCoordinate>().unwrap(), coord);

        let dims = Dimensions::new(5, 5);
        assert_eq!(dims.to_string().parse::<Dimensions>().unwrap(), dims);
    }
}

mod degenerate_inputs {
    use super::*;

    #[test]
    fn test_empty_word_list_yields_no_matches() {
        let puzzle = load_fixture();
        assert!(solver::find_words(&puzzle.grid, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_absent_words_yield_no_matches() {
        let puzzle = load_fixture();
        assert!(solver::find_words(&puzzle.grid, ["ZEBRA", "MONGOOSE"]).is_empty());
    }

    #[test]
    fn test_word_longer_than_any_line_is_no_match() {
        let puzzle = load_fixture();
        assert!(solver::find_words(&puzzle.grid, ["CATERPILLAR"]).is_empty());
    }

    #[test]
    fn test_one_by_one_grid() {
        let grid = Grid::from_rows(["Q"]).unwrap();
        assert!(solver::find_words(&grid, ["CAT"]).is_empty());
        // a matching single letter is read once per direction
        assert_eq!(solver::find_words(&grid, ["Q"]).len(), 8);
    }

    #[test]
    fn test_malformed_puzzle_file_reports_detail() {
        let err = Puzzle::parse_from_str("5x5\nCAT").unwrap_err();
        assert_eq!(err.code(), "E006");
        assert!(err.display_detailed().contains("E006"));
    }
}
