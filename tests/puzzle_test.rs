// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word search over the worked example puzzle.

mod common;

use common::{assert_snaking_path, puzzle_grid, PUZZLE};
use snaking_katas::puzzle::{count_paths, find_path, Coord, Grid};
use snaking_katas::{find_string_in_snaking_puzzle, InvalidInput};

#[test]
fn test_words_present() {
    for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
        assert!(
            find_string_in_snaking_puzzle(&PUZZLE, word).unwrap(),
            "{} should be found",
            word
        );
    }
}

#[test]
fn test_words_absent() {
    for word in ["FUNCTION", "NULL", "ANGULARS", "Z"] {
        assert!(
            !find_string_in_snaking_puzzle(&PUZZLE, word).unwrap(),
            "{} should not be found",
            word
        );
    }
}

#[test]
fn test_found_paths_are_snaking() {
    let grid = puzzle_grid();
    for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
        let path = find_path(&grid, word).unwrap().unwrap();
        assert_snaking_path(&grid, word, &path);
    }
}

#[test]
fn test_react_path_bends() {
    let grid = puzzle_grid();
    // Top-right R, then down, left, left, down.
    assert_eq!(
        find_path(&grid, "REACT").unwrap(),
        Some(vec![
            Coord::new(6, 0),
            Coord::new(6, 1),
            Coord::new(5, 1),
            Coord::new(4, 1),
            Coord::new(4, 2),
        ])
    );
}

#[test]
fn test_row_major_start_order() {
    let grid = puzzle_grid();
    // RED occurs twice; the start at row 1 comes before the one at row 4.
    assert_eq!(
        find_path(&grid, "RED").unwrap(),
        Some(vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)])
    );
}

#[test]
fn test_path_counts() {
    let grid = puzzle_grid();
    assert_eq!(count_paths(&grid, "REACT").unwrap(), 2);
    assert_eq!(count_paths(&grid, "RED").unwrap(), 2);
    assert_eq!(count_paths(&grid, "ANGULAR").unwrap(), 1);
    assert_eq!(count_paths(&grid, "FUNCTION").unwrap(), 0);
    // A one-letter word has one path per matching cell.
    assert_eq!(count_paths(&grid, "A").unwrap(), 5);
    assert_eq!(count_paths(&grid, "E").unwrap(), 3);
}

#[test]
fn test_single_cell_boundary() {
    assert!(find_string_in_snaking_puzzle(&["Q"], "Q").unwrap());
    assert!(!find_string_in_snaking_puzzle(&["Q"], "R").unwrap());
    assert!(!find_string_in_snaking_puzzle(&["Q"], "QQ").unwrap());
}

#[test]
fn test_word_longer_than_grid() {
    let grid = Grid::from_rows(&["AA", "AA"]).unwrap();
    assert!(find_path(&grid, "AAAA").unwrap().is_some());
    assert!(find_path(&grid, "AAAAA").unwrap().is_none());
    // Four starts, two directions each, then forced: a cycle either way.
    assert_eq!(count_paths(&grid, "AAAA").unwrap(), 8);
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        find_string_in_snaking_puzzle(&PUZZLE, ""),
        Err(InvalidInput::EmptyWord)
    );
    assert_eq!(
        find_string_in_snaking_puzzle(&["ABC", "AB"], "AB"),
        Err(InvalidInput::RaggedGrid {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    let no_rows: [String; 0] = [];
    assert_eq!(
        find_string_in_snaking_puzzle(&no_rows, "A"),
        Err(InvalidInput::EmptyGrid)
    );
}
