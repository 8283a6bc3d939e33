// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Public entry points for the snaking word search.

use super::context::PuzzleContext;
use super::grid::{Coord, Grid};
use super::predicates::{ExtendPathPredicate, StartCellPredicate};
use super::statistics::{Counters, Statistics};
use crate::engine::{EngineBuilder, FailPredicate, SearchEngine, SuspendPredicate, TerminalPredicate};
use crate::error::InvalidInput;

/// The word-tracing program, closed by `terminal`.
fn word_program<'g, T>(terminal: T) -> SearchEngine<PuzzleContext<'g>>
where
    T: TerminalPredicate<PuzzleContext<'g>> + 'static,
{
    EngineBuilder::<PuzzleContext<'g>>::new()
        .add(Box::new(StartCellPredicate))
        .add(Box::new(ExtendPathPredicate))
        .add(Statistics::counting_predicate(Counters::Paths, None))
        .terminal(terminal)
        .build()
}

/// Returns true if `word` can be traced through `puzzle` as a snaking path.
///
/// A snaking path moves left, right, up or down between consecutive letters
/// and never uses a cell twice.
///
/// # Errors
///
/// - [`InvalidInput::EmptyGrid`] / [`InvalidInput::RaggedGrid`] for a malformed puzzle
/// - [`InvalidInput::EmptyWord`] if `word` is empty
///
/// # Example
///
/// ```
/// use snaking_katas::find_string_in_snaking_puzzle;
///
/// let puzzle = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
/// assert!(find_string_in_snaking_puzzle(&puzzle, "REACT").unwrap());
/// assert!(!find_string_in_snaking_puzzle(&puzzle, "FUNCTION").unwrap());
/// ```
pub fn find_string_in_snaking_puzzle<S: AsRef<str>>(
    puzzle: &[S],
    word: &str,
) -> Result<bool, InvalidInput> {
    let grid = Grid::from_rows(puzzle)?;
    Ok(find_path(&grid, word)?.is_some())
}

/// The first snaking path spelling `word`, if any.
///
/// Starting cells are tried in row-major order and moves in the order
/// left, right, up, down, so the result is deterministic.
pub fn find_path(grid: &Grid, word: &str) -> Result<Option<Vec<Coord>>, InvalidInput> {
    let mut ctx = PuzzleContext::new(grid, word)?;
    let engine = word_program(SuspendPredicate);

    let path = engine.search(&mut ctx).map(|_| ctx.path().to_vec());

    log::debug!(
        "{:?} {} in {}x{} grid ({})",
        word,
        if path.is_some() { "found" } else { "not found" },
        grid.width(),
        grid.height(),
        ctx.statistics
    );
    Ok(path)
}

/// Number of distinct snaking paths spelling `word`.
///
/// Every path is enumerated, so this costs as much as a failing search.
pub fn count_paths(grid: &Grid, word: &str) -> Result<u64, InvalidInput> {
    let mut ctx = PuzzleContext::new(grid, word)?;
    let engine = word_program(FailPredicate);

    // A FAIL-terminated program always exhausts.
    let _ = engine.search(&mut ctx);

    log::debug!(
        "{:?} in {}x{} grid: {}",
        word,
        grid.width(),
        grid.height(),
        ctx.statistics
    );
    Ok(ctx.statistics.get(Counters::Paths))
}
