// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore the
//! coloring on backtracking, and keeps its choice points on an explicit
//! stack rather than the call stack, so search depth is bounded by memory,
//! not by recursion limits.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Its mode: not yet called, exploring choices, or finished
//! - The trail checkpoint to rewind to before the entry runs again
//!
//! The execution model:
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
//! use map_coloring::color::Palette;
//! use map_coloring::context::SearchContext;
//! use map_coloring::engine::EngineBuilder;
//! use map_coloring::graph::GraphBuilder;
//! use map_coloring::predicates::{ColorRegionPredicate, SuspendPredicate};
//!
//! let graph = GraphBuilder::new().region("A", ["B"]).region("B", ["A"]).build().unwrap();
//! let mut ctx = SearchContext::new(&graph, Palette::default());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ColorRegionPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended on a solution
//! let suspended = engine.search(&mut ctx).unwrap();
//! assert!(suspended.is_some());
//! assert!(ctx.coloring().is_complete());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use crate::error::{ColoringError, Result};
use tracing::debug;

/// Execution mode of one stack entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not run yet.
    Call,
    /// Exploring alternatives; `next` is the next choice to retry.
    Choice { next: usize, total: usize },
    /// try_pred succeeded without choices; backtracking through this entry fails it.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug, Clone, Copy)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: Mode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            mode: Mode::Call,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Maximum number of predicate calls (try and retry) over the life of the engine.
    step_limit: Option<u64>,

    /// Whether the last search stopped on a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            step_limit: None,
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Limit the number of predicate calls (try and retry).
    ///
    /// The budget covers a fresh search together with all of its resumptions.
    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Run the search to the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Ok(Some(engine))` if suspended - call `search` again to resume after that point
    /// - `Ok(None)` if exhausted (backtracked past first predicate) - search is complete
    /// - `Err(StepLimitExceeded)` if the next predicate call would exceed the step limit
    ///
    /// Success is indicated via side effects (the coloring in `ctx`), not by
    /// the return value: a solution is seen by a predicate that suspends, or
    /// that records it before failing.
    ///
    /// On resume, the suspending entry is treated as failed, so the search
    /// continues with the next alternative. Statistics accumulate across
    /// resumptions.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext<'_>) -> Result<Option<Self>> {
        if self.suspended {
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return Ok(None);
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        }

        loop {
            // Check if we've backtracked past the first predicate
            let Some(&entry) = self.stack.last() else {
                debug!(
                    "search exhausted after {} tries, {} retries",
                    self.try_count, self.retry_count
                );
                return Ok(None);
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            match entry.mode {
                Mode::Done => {
                    self.stack.pop();
                }
                Mode::Choice { next, total } if next >= total => {
                    // All choices exhausted
                    self.stack.pop();
                }
                Mode::Choice { next, total } => {
                    self.check_step_limit()?;
                    self.set_mode(Mode::Choice {
                        next: next + 1,
                        total,
                    });
                    self.retry_count += 1;
                    let result = self.predicates[pred_idx].retry_pred(ctx, round, next);

                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
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
                Mode::Call => {
                    self.check_step_limit()?;
                    self.try_count += 1;
                    let result = self.predicates[pred_idx].try_pred(ctx, round);

                    match result {
                        PredicateResult::Success => {
                            self.set_mode(Mode::Done);
                            self.push_next_predicate(ctx);
                        }
                        PredicateResult::SuccessSamePredicate => {
                            self.set_mode(Mode::Done);
                            self.push_same_predicate(ctx);
                        }
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(n) => {
                            self.set_mode(Mode::Choice { next: 0, total: n });
                            // Keep whatever try_pred set up for all choices
                            if let Some(top) = self.stack.last_mut() {
                                top.trail_checkpoint = ctx.trail.len();
                            }
                        }
                        PredicateResult::Suspend => {
                            self.set_mode(Mode::Done);
                            self.suspended = true;
                            return Ok(Some(self));
                        }
                    }
                }
            }
        }
    }

    /// Fails if one more predicate call would go over the step limit.
    fn check_step_limit(&self) -> Result<()> {
        match self.step_limit {
            Some(limit) if self.steps() >= limit => Err(ColoringError::StepLimitExceeded {
                steps: self.steps(),
            }),
            _ => Ok(()),
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if let Some(top) = self.stack.last_mut() {
            top.mode = mode;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext<'_>) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate sequences must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext<'_>) {
        if let Some(current) = self.stack.last().copied() {
            self.stack.push(StackEntry::new(
                current.predicate_index,
                current.round + 1,
                ctx.trail.len(),
            ));
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }

    /// Total predicate calls so far.
    pub fn steps(&self) -> u64 {
        self.try_count + self.retry_count
    }
}

/// Builds a [`SearchEngine`] whose predicate sequence ends with a terminal predicate.
///
/// ```
/// use map_coloring::engine::EngineBuilder;
/// use map_coloring::predicates::{ColorRegionPredicate, FailPredicate};
///
/// let engine = EngineBuilder::new()
///     .step_limit(Some(1_000))
///     .add(Box::new(ColorRegionPredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert_eq!(engine.steps(), 0);
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    step_limit: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Limit the number of predicate calls, counted across resumptions.
    pub fn step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Append the terminal predicate, closing the sequence.
    pub fn terminal<T: TerminalPredicate + 'static>(
        mut self,
        predicate: Box<T>,
    ) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
            step_limit: self.step_limit,
        }
    }
}

/// An [`EngineBuilder`] whose sequence has been closed by a terminal predicate.
#[derive(Debug)]
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    step_limit: Option<u64>,
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates).with_step_limit(self.step_limit)
    }
}
