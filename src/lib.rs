// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Four-color map search by exhaustive backtracking.
//!
//! Assigns one of four colors to every region of an adjacency graph (the
//! US states by default) so that no two adjacent regions share a color.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Graph (Immutable)
//!
//! The [`AdjacencyGraph`] is validated once at construction (no duplicate
//! regions, no self-loops, no unknown neighbors, symmetric adjacency) and
//! never changes afterwards.
//!
//! ## Tier 2: Search State (Mutable)
//!
//! The partial [`Coloring`] changes during search and every change is
//! recorded on the [`Trail`], giving cheap undo on backtracking.
//!
//! # Search Algorithm
//!
//! Regions are visited in the graph's enumeration order. For each region
//! the palette colors are tried in order; a color is allowed if no already
//! colored neighbor holds it. When no color fits, the search backtracks to
//! the previous region and tries its next color. The first complete
//! coloring is returned, so results are fully deterministic.
//!
//! The search runs on a small predicate engine with an explicit stack
//! ([`SearchEngine`]); [`solver::solve_recursive`] is a direct recursive
//! formulation that copies the coloring on each branch and returns the
//! same result.
//!
//! # Example
//!
//! ```
//! use map_coloring::color::{Color, Palette};
//! use map_coloring::graph::us_states;
//! use map_coloring::solver::solve;
//!
//! let graph = us_states().unwrap();
//! let coloring = solve(&graph, Palette::default()).unwrap().into_coloring().unwrap();
//! assert!(coloring.is_complete());
//! assert!(coloring.conflicts(&graph).is_empty());
//! assert_eq!(coloring.color_of(&graph, "Alaska").unwrap(), Some(Color::Red));
//! ```

pub mod color;
pub mod context;
pub mod engine;
pub mod error;
pub mod graph;
pub mod predicates;
pub mod render;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use color::{Color, Palette};
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{ColoringError, Result};
pub use graph::{AdjacencyGraph, AsymmetryPolicy, GraphBuilder, RegionId};
pub use render::FillPlan;
pub use solver::{solve, SolveOutcome, Solver, SolverConfig};
pub use state::Coloring;
pub use trail::Trail;
