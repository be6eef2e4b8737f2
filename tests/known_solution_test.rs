// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small graphs with known first-found colorings.

mod common;

use common::{complete_graph, graph_from_edges, path_graph};
use map_coloring::solver::solve_recursive;
use map_coloring::{solve, Color, GraphBuilder, Palette, SolveOutcome};

#[test]
fn test_worked_example() {
    let graph = path_graph();
    let palette = Palette::new([Color::Red, Color::Yellow, Color::Blue, Color::Green]).unwrap();
    let coloring = solve(&graph, palette).unwrap().into_coloring().unwrap();

    assert_eq!(coloring.color_of(&graph, "A").unwrap(), Some(Color::Red));
    assert_eq!(coloring.color_of(&graph, "B").unwrap(), Some(Color::Yellow));
    assert_eq!(coloring.color_of(&graph, "C").unwrap(), Some(Color::Red));
}

#[test]
fn test_k5_is_unsatisfiable() {
    let graph = complete_graph(5);
    assert_eq!(
        solve(&graph, Palette::default()).unwrap(),
        SolveOutcome::NoSolutionFound
    );
    assert_eq!(
        solve_recursive(&graph, Palette::default()),
        SolveOutcome::NoSolutionFound
    );
}

#[test]
fn test_isolated_region_gets_first_color() {
    // The isolated region is visited after a K4 that uses all four colors.
    let graph = GraphBuilder::new()
        .region("K0", ["K1", "K2", "K3"])
        .region("K1", ["K0", "K2", "K3"])
        .region("K2", ["K0", "K1", "K3"])
        .region("K3", ["K0", "K1", "K2"])
        .region("Island", Vec::<String>::new())
        .build()
        .unwrap();
    let palette: Palette = "Blue,Green,Red,Yellow".parse().unwrap();
    let coloring = solve(&graph, palette).unwrap().into_coloring().unwrap();
    assert_eq!(coloring.color_of(&graph, "Island").unwrap(), Some(Color::Blue));
}

#[test]
fn test_backtracking_is_required() {
    // First-fit in region order dead-ends twice before finding this coloring.
    let edges = [
        (4, 5),
        (2, 6),
        (0, 5),
        (2, 3),
        (0, 4),
        (0, 2),
        (0, 3),
        (1, 3),
        (3, 5),
        (5, 6),
        (1, 6),
        (1, 2),
        (3, 6),
        (1, 5),
    ];
    let graph = graph_from_edges(7, &edges);
    let palette = Palette::default();
    let engine = solve(&graph, palette).unwrap();
    let recursive = solve_recursive(&graph, palette);
    assert_eq!(engine, recursive);

    let coloring = engine.into_coloring().unwrap();
    common::assert_proper(&graph, &coloring, &palette);
    let colors: Vec<Color> = coloring.iter().filter_map(|(_, c)| c).collect();
    assert_eq!(
        colors,
        vec![
            Color::Red,
            Color::Red,
            Color::Yellow,
            Color::Blue,
            Color::Blue,
            Color::Yellow,
            Color::Green,
        ]
    );
}

#[test]
fn test_palette_order_changes_result() {
    let graph = path_graph();
    let palette: Palette = "Green,Blue,Yellow,Red".parse().unwrap();
    let coloring = solve(&graph, palette).unwrap().into_coloring().unwrap();
    let named = coloring.named(&graph);
    assert_eq!(named.get("A"), Some(Color::Green));
    assert_eq!(named.get("B"), Some(Color::Blue));
    assert_eq!(named.get("C"), Some(Color::Green));
}
