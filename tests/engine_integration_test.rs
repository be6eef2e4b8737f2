// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs the region predicate once per region
//! - Backtracks on failure and restores the coloring via the trail
//! - Suspends on solutions and resumes with the next alternative
//! - Visits every solution when the sequence ends with FailPredicate

mod common;

use common::{complete_graph, path_graph};
use map_coloring::context::SearchContext;
use map_coloring::engine::EngineBuilder;
use map_coloring::predicates::{ColorRegionPredicate, FailPredicate, SuspendPredicate};
use map_coloring::state::{Counters, Statistics};
use map_coloring::{Color, Palette};
use std::collections::HashSet;

#[test]
fn test_first_solution_statistics() {
    let graph = path_graph();
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap().unwrap();
    let (tries, retries) = engine.statistics();
    // Four ColorRegion rounds (three regions + final) and Suspend
    assert_eq!(tries, 5);
    // A: Red; B: Red (conflict), Yellow; C: Red
    assert_eq!(retries, 4);
    assert_eq!(ctx.statistics.get(Counters::Conflicts), 1);
    assert_eq!(ctx.trail.len(), 3);
}

#[test]
fn test_resume_enumerates_distinct_solutions() {
    let graph = path_graph();
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let mut engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut seen = HashSet::new();
    while let Some(suspended) = engine.search(&mut ctx).unwrap() {
        let coloring = ctx.coloring().clone();
        assert!(coloring.is_complete());
        assert!(coloring.conflicts(&graph).is_empty());
        assert!(seen.insert(coloring), "solution repeated");
        engine = suspended;
    }
    assert_eq!(seen.len(), 4 * 3 * 3);
    // Exhaustion rewinds everything
    assert_eq!(ctx.coloring().assigned_count(), 0);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_second_solution_recolors_last_region() {
    let graph = path_graph();
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap().unwrap();
    let c = graph.id_of("C").unwrap();
    assert_eq!(ctx.coloring().get(c), Some(Color::Red));

    engine.search(&mut ctx).unwrap().unwrap();
    assert_eq!(ctx.coloring().get(c), Some(Color::Blue));
}

#[test]
fn test_fail_terminal_counts_all_solutions() {
    let graph = complete_graph(4);
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    assert_eq!(ctx.statistics.get(Counters::Solutions), 24);
    assert_eq!(
        ctx.statistics.get(Counters::Assignments),
        ctx.statistics.get(Counters::Backtracks)
    );
}

#[test]
fn test_filtered_counting_predicate() {
    let graph = path_graph();
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .add(Statistics::counting_predicate(
            Counters::Solutions,
            Some(|ctx| {
                let a = ctx.region_at(0).unwrap();
                let c = ctx.region_at(2).unwrap();
                ctx.coloring().get(a) == ctx.coloring().get(c)
            }),
        ))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    // A and C match: 4 choices for A, 3 for B
    assert_eq!(ctx.statistics.get(Counters::Solutions), 12);
}

#[test]
fn test_unsatisfiable_exhausts() {
    let graph = complete_graph(5);
    let mut ctx = SearchContext::new(&graph, Palette::default());
    let engine = EngineBuilder::new()
        .add(Box::new(ColorRegionPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).unwrap().is_none());
    assert_eq!(ctx.coloring().assigned_count(), 0);
}
