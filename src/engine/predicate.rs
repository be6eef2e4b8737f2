// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for backtracking search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, offer choices, or suspend the search.
//!
//! # Example
//!
//! ```
//! use map_coloring::engine::{Predicate, PredicateResult};
//! use map_coloring::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct TwoWays;
//!
//! impl Predicate for TwoWays {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
//!         // Return Choices(2) to try two alternatives
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         _ctx: &mut SearchContext<'_>,
//!         _round: usize,
//!         choice: usize,
//!     ) -> PredicateResult {
//!         if choice < 2 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWays"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (one round per region)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution and hand control back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute multiple times (e.g., once per region).
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a predicate sequence.
///
/// Terminal predicates fail or suspend; they never return Success.
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// this kind of predicate, so every built sequence ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the backtracking engine.
///
/// The engine calls `try_pred` to attempt the predicate for the first time,
/// and `retry_pred` to try each alternative after `try_pred` returned
/// `Choices(n)`.
///
/// # Trail Integration
///
/// Predicates change the coloring through
/// [`SearchContext::assign`](crate::context::SearchContext::assign). Before
/// each call the engine rewinds the trail to the checkpoint of the current
/// stack entry, so a retry always starts from the state the choice point saw.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n, in order.
    ///
    /// Can return:
    /// - `Success`: This choice succeeded, move to next predicate
    /// - `SuccessSamePredicate`: This choice succeeded, stay at this predicate
    /// - `Failure`: This choice failed, try next choice (or backtrack if no more)
    ///
    /// retry_pred cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
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
