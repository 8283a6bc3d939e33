// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that trace a word through a grid.
//!
//! A word search is the program
//!
//! ```text
//! StartCell -> ExtendPath (one round per remaining letter) -> ... -> terminal
//! ```
//!
//! `StartCell` offers every cell in row-major order. `ExtendPath` at round
//! `r` has placed `r + 1` letters; it offers the four neighbours of the last
//! placed cell (left, right, up, down) for letter `r + 1`, or succeeds once
//! the whole word is placed. The engine rewinds the visited flags before each
//! alternative, so a cell is marked exactly while it lies on the current path.

use super::context::PuzzleContext;
use super::grid::Direction;
use super::statistics::Counters;
use crate::engine::{Predicate, PredicateResult};
use strum::EnumCount;

/// Chooses the first cell of the path.
#[derive(Debug, Default, Clone, Copy)]
pub struct StartCellPredicate;

impl<'g> Predicate<PuzzleContext<'g>> for StartCellPredicate {
    fn try_pred(&mut self, ctx: &mut PuzzleContext<'g>, _round: usize) -> PredicateResult {
        PredicateResult::Choices(ctx.grid().cell_count())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut PuzzleContext<'g>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let start = ctx.grid().coord_of(choice);
        if ctx.try_place(0, start) {
            ctx.statistics.increment_counter(Counters::StartCells);
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "StartCell"
    }
}

/// Extends the path by one adjacent cell per round.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtendPathPredicate;

impl<'g> Predicate<PuzzleContext<'g>> for ExtendPathPredicate {
    fn try_pred(&mut self, ctx: &mut PuzzleContext<'g>, round: usize) -> PredicateResult {
        if round + 1 >= ctx.word().len() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(Direction::COUNT)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut PuzzleContext<'g>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let Some(direction) = Direction::from_choice(choice) else {
            return PredicateResult::Failure;
        };
        let Some(&from) = ctx.path().get(round) else {
            return PredicateResult::Failure;
        };
        let Some(next) = ctx.grid().neighbor(from, direction) else {
            return PredicateResult::Failure;
        };

        if ctx.try_place(round + 1, next) {
            ctx.statistics.increment_counter(Counters::Extensions);
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "ExtendPath"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Backtrack, EngineBuilder, FailPredicate, SuspendPredicate};
    use crate::puzzle::grid::{Coord, Grid};
    use crate::puzzle::statistics::Statistics;

    #[test]
    fn test_start_cell_offers_every_cell() {
        let grid = Grid::from_rows(&["AB", "CA"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "A").unwrap();
        let mut start = StartCellPredicate;

        assert_eq!(start.try_pred(&mut ctx, 0), PredicateResult::Choices(4));
        assert_eq!(start.retry_pred(&mut ctx, 0, 1), PredicateResult::Failure);

        let checkpoint = ctx.checkpoint();
        assert_eq!(start.retry_pred(&mut ctx, 0, 3), PredicateResult::Success);
        assert_eq!(ctx.path(), &[Coord::new(1, 1)]);
        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.visited_count(), 0);
    }

    #[test]
    fn test_extend_stops_at_word_end() {
        let grid = Grid::from_rows(&["AB"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "AB").unwrap();
        let mut extend = ExtendPathPredicate;

        assert_eq!(extend.try_pred(&mut ctx, 0), PredicateResult::Choices(4));
        assert_eq!(extend.try_pred(&mut ctx, 1), PredicateResult::Success);
    }

    #[test]
    fn test_extend_follows_direction() {
        let grid = Grid::from_rows(&["AB", "BC"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "AB").unwrap();
        assert!(ctx.try_place(0, Coord::new(0, 0)));

        let mut extend = ExtendPathPredicate;
        // Left and up leave the grid.
        assert_eq!(extend.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
        assert_eq!(extend.retry_pred(&mut ctx, 0, 2), PredicateResult::Failure);
        assert_eq!(
            extend.retry_pred(&mut ctx, 0, 1),
            PredicateResult::SuccessSamePredicate
        );
        assert_eq!(ctx.path(), &[Coord::new(0, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn test_program_counts_statistics() {
        let grid = Grid::from_rows(&["AB", "BA"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "AB").unwrap();

        let engine = EngineBuilder::<PuzzleContext<'_>>::new()
            .add(Box::new(StartCellPredicate))
            .add(Box::new(ExtendPathPredicate))
            .add(Statistics::counting_predicate(Counters::Paths, None))
            .terminal(FailPredicate)
            .build();
        assert!(engine.search(&mut ctx).is_none());

        assert_eq!(ctx.statistics.get(Counters::StartCells), 2);
        assert_eq!(ctx.statistics.get(Counters::Extensions), 4);
        assert_eq!(ctx.statistics.get(Counters::Paths), 4);
        assert_eq!(ctx.visited_count(), 0);
    }

    #[test]
    fn test_filtered_counting() {
        let grid = Grid::from_rows(&["AB", "BA"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "AB").unwrap();

        // Only count paths that end on the top row.
        let ends_on_top: fn(&PuzzleContext<'_>) -> bool =
            |ctx| ctx.path().last().map_or(false, |c| c.y == 0);

        let engine = EngineBuilder::<PuzzleContext<'_>>::new()
            .add(Box::new(StartCellPredicate))
            .add(Box::new(ExtendPathPredicate))
            .add(Statistics::counting_predicate(Counters::Paths, Some(ends_on_top)))
            .terminal(FailPredicate)
            .build();
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.statistics.get(Counters::Paths), 2);
    }

    #[test]
    fn test_suspend_leaves_full_path() {
        let grid = Grid::from_rows(&["XAB"]).unwrap();
        let mut ctx = PuzzleContext::new(&grid, "BA").unwrap();

        let engine = EngineBuilder::<PuzzleContext<'_>>::new()
            .add(Box::new(StartCellPredicate))
            .add(Box::new(ExtendPathPredicate))
            .terminal(SuspendPredicate)
            .build();
        assert!(engine.search(&mut ctx).is_some());
        assert_eq!(ctx.path(), &[Coord::new(2, 0), Coord::new(1, 0)]);
        assert_eq!(ctx.visited_count(), 2);
    }
}
