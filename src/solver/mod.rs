// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking solver.
//!
//! [`solve`] finds the first proper coloring of a graph in search order:
//! regions are visited in the graph's enumeration order and colors are
//! tried in palette order. The search runs on the explicit-stack engine
//! with trail-based undo; [`recursive::solve_recursive`] runs the same
//! search by recursion over copied colorings and returns the same result.
//!
//! Finding no coloring is a normal outcome ([`SolveOutcome::NoSolutionFound`]),
//! not an error.

pub mod recursive;

use crate::color::Palette;
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::Result;
use crate::graph::AdjacencyGraph;
use crate::predicates::{ColorRegionPredicate, SuspendPredicate};
use crate::state::{Coloring, Counters, Statistics};
use tracing::{debug, info};

pub use recursive::solve_recursive;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A complete coloring in which no two adjacent regions share a color.
    Solved(Coloring),
    /// The graph cannot be colored with the palette.
    NoSolutionFound,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    pub fn coloring(&self) -> Option<&Coloring> {
        match self {
            SolveOutcome::Solved(coloring) => Some(coloring),
            SolveOutcome::NoSolutionFound => None,
        }
    }

    pub fn into_coloring(self) -> Option<Coloring> {
        match self {
            SolveOutcome::Solved(coloring) => Some(coloring),
            SolveOutcome::NoSolutionFound => None,
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Colors in try-order.
    pub palette: Palette,
    /// Abort before making more than this many predicate calls. `None`
    /// searches to completion.
    pub step_limit: Option<u64>,
}

/// Backtracking solver over one graph.
#[derive(Debug, Clone)]
pub struct Solver<'g> {
    graph: &'g AdjacencyGraph,
    config: SolverConfig,
}

impl<'g> Solver<'g> {
    pub fn new(graph: &'g AdjacencyGraph, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the first coloring in search order.
    pub fn solve(&self) -> Result<SolveOutcome> {
        self.solve_with_statistics().map(|(outcome, _)| outcome)
    }

    /// Find the first coloring in search order, also returning the search counters.
    pub fn solve_with_statistics(&self) -> Result<(SolveOutcome, Statistics)> {
        let mut ctx = SearchContext::new(self.graph, self.config.palette);
        let engine = EngineBuilder::new()
            .step_limit(self.config.step_limit)
            .add(Box::new(ColorRegionPredicate))
            .add(Statistics::counting_predicate(Counters::Solutions, None))
            .terminal(Box::new(SuspendPredicate))
            .build();

        debug!(
            "searching {} regions with palette {}",
            self.graph.len(),
            self.config.palette
        );
        let outcome = match engine.search(&mut ctx)? {
            Some(_suspended) => SolveOutcome::Solved(ctx.state.coloring.clone()),
            None => SolveOutcome::NoSolutionFound,
        };

        match &outcome {
            SolveOutcome::Solved(_) => info!(
                "colored {} regions ({})",
                self.graph.len(),
                ctx.statistics
            ),
            SolveOutcome::NoSolutionFound => info!(
                "no coloring of {} regions with palette {} ({})",
                self.graph.len(),
                self.config.palette,
                ctx.statistics
            ),
        }
        Ok((outcome, ctx.statistics))
    }

    /// Count proper colorings by exhaustive search.
    ///
    /// Stops once `limit` solutions have been found, if a limit is given.
    /// The step limit of the config covers the whole enumeration, not each
    /// solution separately.
    pub fn count_solutions(&self, limit: Option<u64>) -> Result<u64> {
        let mut ctx = SearchContext::new(self.graph, self.config.palette);
        let mut engine = EngineBuilder::new()
            .step_limit(self.config.step_limit)
            .add(Box::new(ColorRegionPredicate))
            .add(Statistics::counting_predicate(Counters::Solutions, None))
            .terminal(Box::new(SuspendPredicate))
            .build();

        while let Some(suspended) = engine.search(&mut ctx)? {
            if limit.is_some_and(|limit| ctx.statistics.get(Counters::Solutions) >= limit) {
                break;
            }
            engine = suspended;
        }

        let count = ctx.statistics.get(Counters::Solutions);
        debug!("counted {} colorings ({})", count, ctx.statistics);
        Ok(count)
    }
}

/// Find the first proper coloring of `graph` using `palette`.
///
/// # Example
///
/// ```
/// use map_coloring::color::{Color, Palette};
/// use map_coloring::graph::GraphBuilder;
/// use map_coloring::solver::solve;
///
/// let graph = GraphBuilder::new()
///     .region("A", ["B"])
///     .region("B", ["A", "C"])
///     .region("C", ["B"])
///     .build()
///     .unwrap();
/// let coloring = solve(&graph, Palette::default()).unwrap().into_coloring().unwrap();
/// assert_eq!(coloring.color_of(&graph, "C").unwrap(), Some(Color::Red));
/// ```
pub fn solve(graph: &AdjacencyGraph, palette: Palette) -> Result<SolveOutcome> {
    Solver::new(
        graph,
        SolverConfig {
            palette,
            ..SolverConfig::default()
        },
    )
    .solve()
}
