// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ColorRegionPredicate - assigns a color to each region in visiting order.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Colors one region per round.
///
/// Round `r` colors `ctx.order()[r]`. Each palette color is a choice, tried
/// in palette order; a choice fails if an already-colored neighbor holds
/// that color. On the final round (`r == order.len()`) every region has a
/// color and the predicate succeeds, passing the complete coloring on to
/// the next predicate.
///
/// Regions are visited in their fixed order with no reordering heuristic,
/// so the first coloring found is fully determined by the graph's region
/// order and the palette order.
#[derive(Debug)]
pub struct ColorRegionPredicate;

impl Predicate for ColorRegionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        if round == ctx.order().len() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(ctx.palette.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let Some(region) = ctx.region_at(round) else {
            return PredicateResult::Failure;
        };
        let color = ctx.palette.get(choice);
        ctx.statistics.increment_counter(Counters::ColorAttempts);

        if !ctx.is_valid(region, color) {
            ctx.statistics.increment_counter(Counters::Conflicts);
            return PredicateResult::Failure;
        }

        ctx.assign(region, color);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ColorRegion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Palette};
    use crate::engine::EngineBuilder;
    use crate::graph::{AdjacencyGraph, GraphBuilder};
    use crate::predicates::SuspendPredicate;

    fn path_graph() -> AdjacencyGraph {
        GraphBuilder::new()
            .region("A", ["B"])
            .region("B", ["A", "C"])
            .region("C", ["B"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_try_pred_choices() {
        let graph = path_graph();
        let mut ctx = SearchContext::new(&graph, Palette::default());
        let mut pred = ColorRegionPredicate;

        for round in 0..graph.len() {
            assert_eq!(pred.try_pred(&mut ctx, round), PredicateResult::Choices(4));
        }
        assert_eq!(pred.try_pred(&mut ctx, graph.len()), PredicateResult::Success);
    }

    #[test]
    fn test_retry_pred_rejects_neighbor_color() {
        let graph = path_graph();
        let mut ctx = SearchContext::new(&graph, Palette::default());
        let mut pred = ColorRegionPredicate;

        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::SuccessSamePredicate);
        // B borders A, which is now Red
        assert_eq!(pred.retry_pred(&mut ctx, 1, 0), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::SuccessSamePredicate);

        let b = graph.id_of("B").unwrap();
        assert_eq!(ctx.coloring().get(b), Some(Color::Yellow));
        assert_eq!(ctx.statistics.get(Counters::ColorAttempts), 3);
        assert_eq!(ctx.statistics.get(Counters::Conflicts), 1);
    }

    #[test]
    fn test_search_suspends_on_first_solution() {
        let graph = path_graph();
        let mut ctx = SearchContext::new(&graph, Palette::default());
        let engine = EngineBuilder::new()
            .add(Box::new(ColorRegionPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();

        assert!(engine.search(&mut ctx).unwrap().is_some());
        let named = ctx.coloring().named(&graph);
        assert_eq!(named.get("A"), Some(Color::Red));
        assert_eq!(named.get("B"), Some(Color::Yellow));
        assert_eq!(named.get("C"), Some(Color::Red));
    }
}
