// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `region`: ColorRegionPredicate, one round per region in visiting order
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`

pub mod region;

pub use region::ColorRegionPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Placed after a
/// counting predicate it makes the engine visit every solution.
///
/// # Example
///
/// ```
/// use map_coloring::color::Palette;
/// use map_coloring::context::SearchContext;
/// use map_coloring::engine::EngineBuilder;
/// use map_coloring::graph::GraphBuilder;
/// use map_coloring::predicates::{ColorRegionPredicate, FailPredicate};
/// use map_coloring::state::{Counters, Statistics};
///
/// let graph = GraphBuilder::new().region("A", ["B"]).region("B", ["A"]).build().unwrap();
/// let mut ctx = SearchContext::new(&graph, Palette::default());
/// let engine = EngineBuilder::new()
///     .add(Box::new(ColorRegionPredicate))
///     .add(Statistics::counting_predicate(Counters::Solutions, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all colorings then fail
/// let result = engine.search(&mut ctx).unwrap();
/// assert!(result.is_none());
/// assert_eq!(ctx.statistics.get(Counters::Solutions), 12);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, handing the current state to the caller.
///
/// Placed after the region predicate, the engine suspends on each complete
/// coloring; resuming continues the search with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
