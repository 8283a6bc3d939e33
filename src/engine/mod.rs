// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the context's trail to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use snaking_katas::engine::{EngineBuilder, SuspendPredicate};
//! use snaking_katas::puzzle::{Grid, PuzzleContext, StartCellPredicate, ExtendPathPredicate};
//!
//! let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
//! let mut ctx = PuzzleContext::new(&grid, "ABD").unwrap();
//!
//! // All programs must end with a terminal predicate (FAIL or SUSPEND)
//! let engine = EngineBuilder::<PuzzleContext<'_>>::new()
//!     .add(Box::new(StartCellPredicate))
//!     .add(Box::new(ExtendPathPredicate))
//!     .terminal(SuspendPredicate)
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx);
//! assert!(engine.is_some());
//! assert_eq!(ctx.path().len(), 3);
//! ```

pub mod predicate;

pub use predicate::{FailPredicate, Predicate, PredicateResult, SuspendPredicate, TerminalPredicate};

/// Search state that the engine can checkpoint and rewind.
///
/// Implementors usually forward to a [`Trail`](crate::trail::Trail) they own.
pub trait Backtrack {
    /// Current trail position.
    fn checkpoint(&self) -> usize;

    /// Undo every change recorded after `checkpoint`.
    fn rewind_to(&mut self, checkpoint: usize);
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// A deterministic success leaves nothing to retry: revisiting this
    /// entry on backtrack must pop it.
    fn settle(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the context's trail.
pub struct SearchEngine<C> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate<C>>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether search() has run before (a later call resumes).
    started: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl<C: Backtrack> SearchEngine<C> {
    /// Create a new search engine with the given predicates.
    ///
    /// Use [`EngineBuilder`] outside the crate: it guarantees the sequence
    /// ends with a terminal predicate.
    pub(crate) fn new(predicates: Vec<Box<dyn Predicate<C>>>) -> Self {
        Self {
            stack: Vec::with_capacity(predicates.len() * 4),
            predicates,
            started: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to find one solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() on it again resumes
    ///   by backtracking into the next alternative
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the
    /// return value: programs never "complete", they either fail or suspend.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without
    /// FAIL or SUSPEND), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut C) -> Option<Self> {
        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        if self.started {
            // Resume: the suspended entry is on top; backtrack out of it.
            self.stack.pop();
        } else {
            self.started = true;
            self.stack.push(StackEntry::new(0, 0, ctx.checkpoint()));
        }

        loop {
            // Backtracked past the first predicate: search exhausted.
            let entry = self.stack.last_mut()?;

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.settle_top();
                        self.push_entry(pred_idx + 1, 0, ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.settle_top();
                        self.push_entry(pred_idx, round + 1, ctx);
                    }
                    PredicateResult::Failure => {
                        log::trace!("{} failed at round {}", self.predicates[pred_idx].name(), round);
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        let checkpoint = ctx.checkpoint();
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = checkpoint;
                        }
                    }
                    PredicateResult::Suspend => {
                        // Pause execution, return engine for resumption
                        return Some(self);
                    }
                }
            } else {
                // Check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_entry(pred_idx + 1, 0, ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_entry(pred_idx, round + 1, ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    fn settle_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.settle();
        }
    }

    /// Push a new stack entry for `predicate_index` at `round`.
    ///
    /// Panics if we've run off the end of the predicate sequence, as this
    /// indicates an invalid program.
    fn push_entry(&mut self, predicate_index: usize, round: usize, ctx: &C) {
        if predicate_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(predicate_index, round, ctx.checkpoint()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }

    /// Current depth of the predicate stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Builder for predicate programs.
///
/// The program is only buildable once a terminal predicate has been given.
pub struct EngineBuilder<C> {
    predicates: Vec<Box<dyn Predicate<C>>>,
}

impl<C: Backtrack> EngineBuilder<C> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate<C>>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the program.
    pub fn terminal<P>(mut self, predicate: P) -> TerminatedBuilder<C>
    where
        P: TerminalPredicate<C> + 'static,
    {
        self.predicates.push(Box::new(predicate));
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl<C: Backtrack> Default for EngineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A program that ends with a terminal predicate.
pub struct TerminatedBuilder<C> {
    predicates: Vec<Box<dyn Predicate<C>>>,
}

impl<C: Backtrack> TerminatedBuilder<C> {
    pub fn build(self) -> SearchEngine<C> {
        SearchEngine::new(self.predicates)
    }
}
