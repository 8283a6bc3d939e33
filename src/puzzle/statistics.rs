// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the search predicates themselves.

use super::context::PuzzleContext;
use crate::engine::{Predicate, PredicateResult};
use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Starting cells whose character matched the first letter.
    StartCells,
    /// Cells added to a path after its starting cell.
    Extensions,
    /// Complete paths reached.
    Paths,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate<'g>(
        counter: Counters,
        filter: Option<fn(&PuzzleContext<'_>) -> bool>,
    ) -> Box<dyn Predicate<PuzzleContext<'g>>> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(always),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} start cells, {} extensions, {} paths",
            self.get(Counters::StartCells),
            self.get(Counters::Extensions),
            self.get(Counters::Paths)
        )
    }
}

fn always(_ctx: &PuzzleContext<'_>) -> bool {
    true
}

struct CountingPredicate {
    filter: fn(&PuzzleContext<'_>) -> bool,
    counter: Counters,
}

impl fmt::Debug for CountingPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl<'g> Predicate<PuzzleContext<'g>> for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut PuzzleContext<'g>, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        assert_eq!(stats.get(Counters::Paths), 0);

        stats.increment_counter(Counters::Paths);
        stats.increment_counter(Counters::Paths);
        stats.increment_counter(Counters::StartCells);
        assert_eq!(stats.get(Counters::Paths), 2);
        assert_eq!(stats.get(Counters::StartCells), 1);
        assert_eq!(stats.get(Counters::Extensions), 0);
        assert_eq!(stats.to_string(), "1 start cells, 0 extensions, 2 paths");
    }
}
