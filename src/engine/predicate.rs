// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, offer alternatives, or suspend the search.
//!
//! # Example
//!
//! ```
//! use snaking_katas::engine::{Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct Coin;
//!
//! impl Predicate<Vec<bool>> for Coin {
//!     fn try_pred(&mut self, _ctx: &mut Vec<bool>, _round: usize) -> PredicateResult {
//!         // Return Choices(2) to try two alternatives
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut Vec<bool>, _round: usize, choice: usize) -> PredicateResult {
//!         ctx.push(choice == 1);
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Coin"
//!     }
//! }
//! ```

use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (for iterative predicates)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution and hand the current state to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute once per character of a word.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// Trait for search predicates over a context of type `C`.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for each choice in turn,
///    rewinding the context before each one
///
/// # Trail Integration
///
/// Predicates can modify the context freely as long as every change that
/// must be undone is recorded on the context's trail. The engine rewinds the
/// context to the right checkpoint before every call.
pub trait Predicate<C>: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut C, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// retry_pred cannot return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(&mut self, ctx: &mut C, round: usize, choice: usize) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Optional: Get a name for this predicate (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A predicate that ends a program: it fails or suspends, never succeeds.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// predicates carrying this marker, so every built program ends properly.
pub trait TerminalPredicate<C>: Predicate<C> {}

/// Terminal predicate that always fails, forcing exhaustive enumeration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailPredicate;

impl<C> Predicate<C> for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut C, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl<C> TerminalPredicate<C> for FailPredicate {}

/// Terminal predicate that suspends, returning the first (or next) solution.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuspendPredicate;

impl<C> Predicate<C> for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut C, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl<C> TerminalPredicate<C> for SuspendPredicate {}
