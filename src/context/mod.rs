// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the read-only graph and the mutable search state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Read-only: the graph, the palette and the visiting order
//! - Mutable: the partial coloring, the trail that undoes it, and statistics
//!
//! The coloring is only changed through [`SearchContext::assign`], which
//! records the change on the trail, so the engine can restore any earlier
//! state with [`SearchContext::rewind_to`].

use crate::color::{Color, Palette};
use crate::graph::{AdjacencyGraph, RegionId};
use crate::state::{Coloring, Counters, Statistics};
use crate::trail::Trail;

/// Mutable search state.
#[derive(Debug)]
pub struct DynamicState {
    /// Current partial coloring.
    pub coloring: Coloring,
}

impl DynamicState {
    pub fn new(graph: &AdjacencyGraph) -> Self {
        Self {
            coloring: Coloring::empty(graph.len()),
        }
    }
}

/// Search context for one run over one graph.
///
/// # Example
///
/// ```
/// use map_coloring::color::{Color, Palette};
/// use map_coloring::context::SearchContext;
/// use map_coloring::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new().region("A", ["B"]).region("B", ["A"]).build().unwrap();
/// let mut ctx = SearchContext::new(&graph, Palette::default());
/// let a = graph.id_of("A").unwrap();
///
/// let mark = ctx.trail.len();
/// ctx.assign(a, Color::Red);
/// assert_eq!(ctx.coloring().get(a), Some(Color::Red));
///
/// ctx.rewind_to(mark);
/// assert_eq!(ctx.coloring().get(a), None);
/// ```
#[derive(Debug)]
pub struct SearchContext<'g> {
    /// The graph being colored.
    pub graph: &'g AdjacencyGraph,
    /// Colors in try-order.
    pub palette: Palette,
    /// Regions in visiting order, fixed before search begins.
    order: Vec<RegionId>,
    /// Undo log for `state`.
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl<'g> SearchContext<'g> {
    /// Create a context that visits regions in the graph's enumeration order.
    pub fn new(graph: &'g AdjacencyGraph, palette: Palette) -> Self {
        Self {
            graph,
            palette,
            order: graph.all_regions().collect(),
            trail: Trail::with_capacity(graph.len()),
            state: DynamicState::new(graph),
            statistics: Statistics::new(),
        }
    }

    /// The visiting order.
    pub fn order(&self) -> &[RegionId] {
        &self.order
    }

    /// The region visited at position `round`, or `None` past the end.
    pub fn region_at(&self, round: usize) -> Option<RegionId> {
        self.order.get(round).copied()
    }

    /// The current partial coloring.
    pub fn coloring(&self) -> &Coloring {
        &self.state.coloring
    }

    /// Whether `color` can be given to `region` under the current coloring.
    pub fn is_valid(&self, region: RegionId, color: Color) -> bool {
        self.state.coloring.is_valid_for(self.graph, region, color)
    }

    /// Assign a color with trail recording.
    pub fn assign(&mut self, region: RegionId, color: Color) {
        self.trail.assign(&mut self.state.coloring, region, color);
        self.statistics.increment_counter(Counters::Assignments);
    }

    /// Undo every assignment made after `mark` (a previous `trail.len()`).
    pub fn rewind_to(&mut self, mark: usize) {
        let undone = self.trail.rewind_to(mark, &mut self.state.coloring);
        self.statistics.add(Counters::Backtracks, undone as u64);
    }
}
