// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one word search.
//!
//! The context splits into an immutable part (the grid and the word) and a
//! dynamic part (visited flags and the path under construction). Only the
//! visited flags go on the trail: the path is rebuilt by position, so a
//! cell placed at depth `d` simply overwrites whatever was there before.

use super::grid::{Coord, Grid};
use super::statistics::Statistics;
use crate::engine::Backtrack;
use crate::error::InvalidInput;
use crate::trail::{Trail, TrailedFlags};

/// Search state for tracing one word through one grid.
///
/// # Memory Model
///
/// ```text
/// PuzzleContext {
///     grid: &Grid,           // immutable, borrowed
///     word: Vec<char>,       // immutable
///     trail: Trail,          // mutable, owned
///     visited: TrailedFlags, // mutable, restored from the trail
///     path: Vec<Coord>,      // mutable, rebuilt by depth
/// }
/// ```
///
/// Independent contexts may search the same grid concurrently: nothing
/// here is shared except the borrowed grid.
#[derive(Debug)]
pub struct PuzzleContext<'g> {
    grid: &'g Grid,
    word: Vec<char>,

    /// The trail recording visited-flag changes.
    pub trail: Trail,

    /// One flag per cell: set while the cell is on the current path.
    visited: TrailedFlags,

    /// Cells of the current path. Entries past the current depth are stale
    /// until overwritten; once the engine suspends on a solution, this is
    /// the complete path.
    path: Vec<Coord>,

    /// Search counters.
    pub statistics: Statistics,
}

impl<'g> PuzzleContext<'g> {
    /// Create a context for tracing `word` through `grid`.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::EmptyWord`] if `word` is empty.
    pub fn new(grid: &'g Grid, word: &str) -> Result<Self, InvalidInput> {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() {
            return Err(InvalidInput::EmptyWord);
        }

        Ok(Self {
            grid,
            trail: Trail::with_capacity(word.len()),
            visited: TrailedFlags::new(grid.cell_count()),
            path: Vec::with_capacity(word.len()),
            word,
            statistics: Statistics::new(),
        })
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn word(&self) -> &[char] {
        &self.word
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// True while `coord` is on the current path.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.grid.contains(coord) && self.visited.get(self.grid.index_of(coord))
    }

    /// Number of cells currently on the path.
    pub fn visited_count(&self) -> usize {
        self.visited.count_set()
    }

    /// Try to place `coord` as the cell matching `word[depth]`.
    ///
    /// Fails without changing anything if the cell is out of bounds, already
    /// on the path, or holds the wrong character. On success the cell is
    /// marked visited (on the trail) and becomes `path[depth]`.
    pub fn try_place(&mut self, depth: usize, coord: Coord) -> bool {
        let Some(expected) = self.word.get(depth).copied() else {
            return false;
        };
        if self.grid.get(coord) != Some(expected) || self.is_visited(coord) {
            return false;
        }

        let index = self.grid.index_of(coord);
        self.visited.set(&mut self.trail, index, true);
        self.path.truncate(depth);
        self.path.push(coord);
        true
    }
}

impl Backtrack for PuzzleContext<'_> {
    fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.visited);
    }
}
