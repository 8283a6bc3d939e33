// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Snaking word search.
//!
//! A word occurs in a grid if it can be traced as a path of cells, each
//! left, right, above or below the previous one, that never visits a cell
//! twice:
//!
//! ```text
//! ANGULAR     'ANGULAR'  => true  (first row)
//! REDNCAE     'REACT'    => true  (top-right R, then down, left, left, down)
//! RFIDTCL     'ARRAY'    => true  (first column)
//! AGNEGSA     'FUNCTION' => false
//! YTIRTSP
//! ```
//!
//! The search runs on the backtracking [engine](crate::engine): every cell
//! is a candidate start, every path extends in four directions, and the
//! visited-cell flags live on a [trail](crate::trail) so each abandoned
//! branch is undone exactly.

pub mod context;
pub mod grid;
pub mod predicates;
pub mod search;
pub mod statistics;

pub use context::PuzzleContext;
pub use grid::{Coord, Direction, Grid};
pub use predicates::{ExtendPathPredicate, StartCellPredicate};
pub use search::{count_paths, find_path, find_string_in_snaking_puzzle};
pub use statistics::{Counters, Statistics};
