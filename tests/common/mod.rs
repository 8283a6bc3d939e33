// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use snaking_katas::puzzle::{Coord, Grid};

/// The worked example puzzle.
pub const PUZZLE: [&str; 5] = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];

pub fn puzzle_grid() -> Grid {
    Grid::from_rows(&PUZZLE).expect("fixture grid is rectangular")
}

/// Check every snaking-path law for `path` spelling `word` in `grid`.
pub fn assert_snaking_path(grid: &Grid, word: &str, path: &[Coord]) {
    let chars: Vec<char> = word.chars().collect();
    assert_eq!(path.len(), chars.len(), "path length for {:?}", word);

    for (coord, ch) in path.iter().zip(&chars) {
        assert_eq!(grid.get(*coord), Some(*ch), "letter at {}", coord);
    }
    for pair in path.windows(2) {
        assert_eq!(pair[0].distance(pair[1]), 1, "{} -> {} not adjacent", pair[0], pair[1]);
    }
    for (i, coord) in path.iter().enumerate() {
        assert!(!path[..i].contains(coord), "{} reused", coord);
    }
}
