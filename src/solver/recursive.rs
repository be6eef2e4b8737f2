// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive copy-on-branch solver.
//!
//! Each branch receives its own copy of the partial coloring, so sibling
//! branches never observe each other's tentative assignments and nothing
//! needs undoing. Recursion depth equals the number of regions. The
//! explicit-stack engine in [`Solver`](super::Solver) visits the same
//! branches in the same order and returns the same coloring.

use super::SolveOutcome;
use crate::color::Palette;
use crate::graph::{AdjacencyGraph, RegionId};
use crate::state::Coloring;

/// Find the first proper coloring of `graph` in search order, recursively.
pub fn solve_recursive(graph: &AdjacencyGraph, palette: Palette) -> SolveOutcome {
    let order: Vec<RegionId> = graph.all_regions().collect();
    match backtrack(graph, &palette, &order, Coloring::empty(graph.len())) {
        Some(coloring) => SolveOutcome::Solved(coloring),
        None => SolveOutcome::NoSolutionFound,
    }
}

/// Color `remaining` on top of `coloring`, or return `None` if no choice works.
fn backtrack(
    graph: &AdjacencyGraph,
    palette: &Palette,
    remaining: &[RegionId],
    coloring: Coloring,
) -> Option<Coloring> {
    let Some((&region, rest)) = remaining.split_first() else {
        return Some(coloring);
    };

    palette
        .iter()
        .filter(|&color| coloring.is_valid_for(graph, region, color))
        .find_map(|color| backtrack(graph, palette, rest, coloring.with(region, color)))
}
