// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking word search in a letter grid, with three smaller katas.
//!
//! # Architecture
//!
//! The word search is built from two tiers:
//!
//! ## Tier 1: Immutable data
//!
//! The [`Grid`](puzzle::Grid) and the word being traced. Grids are validated
//! on construction: no empty grids, no ragged rows.
//!
//! ## Tier 2: Dynamic data
//!
//! Search state that changes during search, tracked on the trail:
//! - [`Trail`](trail::Trail) - records state changes for O(1) backtracking
//! - Visited flags - one per cell, set while the cell is on the current path
//!
//! # Search Algorithm
//!
//! [`find_string_in_snaking_puzzle`] runs the predicate program
//! `StartCell -> ExtendPath -> Suspend` on the [engine](engine). Start
//! cells are tried in row-major order; each path extends left, right, up,
//! then down; and the visited flags are rewound whenever the engine
//! backtracks, so a cell is never reused within one path but is free again
//! for every other path.
//!
//! # Other katas
//!
//! - [`permutations()`]: every ordering of a string's characters
//! - [`most_profit_from_stock_quotes`]: optimal buy/sell profit via suffix maxima
//! - [`UrlShortener`]: reversible two-characters-per-code packing

pub mod codec;
pub mod engine;
pub mod error;
pub mod logging;
pub mod permutations;
pub mod profit;
pub mod puzzle;
pub mod trail;

// Re-export commonly used types
pub use codec::UrlShortener;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::InvalidInput;
pub use permutations::{permutations, permutations_distinct, Permutations};
pub use profit::most_profit_from_stock_quotes;
pub use puzzle::{find_string_in_snaking_puzzle, Grid};
pub use trail::Trail;
