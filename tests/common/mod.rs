// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use map_coloring::{AdjacencyGraph, Coloring, GraphBuilder, Palette};

/// A–B–C path.
pub fn path_graph() -> AdjacencyGraph {
    GraphBuilder::new()
        .region("A", ["B"])
        .region("B", ["A", "C"])
        .region("C", ["B"])
        .build()
        .unwrap()
}

/// Complete graph on `n` regions named `K0..K{n-1}`.
pub fn complete_graph(n: usize) -> AdjacencyGraph {
    let names: Vec<String> = (0..n).map(|i| format!("K{}", i)).collect();
    names
        .iter()
        .fold(GraphBuilder::new(), |builder, name| {
            builder.region(
                name.clone(),
                names.iter().filter(|other| *other != name).cloned(),
            )
        })
        .build()
        .unwrap()
}

/// Graph over regions `0..n` with the given undirected edges.
pub fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    (0..n)
        .fold(GraphBuilder::new(), |builder, i| {
            let neighbors: Vec<String> = edges
                .iter()
                .filter_map(|&(a, b)| match (a == i, b == i) {
                    (true, false) => Some(b.to_string()),
                    (false, true) => Some(a.to_string()),
                    _ => None,
                })
                .collect();
            builder.region(i.to_string(), neighbors)
        })
        .build()
        .unwrap()
}

/// Every region has a palette color and no edge joins two equal colors.
pub fn assert_proper(graph: &AdjacencyGraph, coloring: &Coloring, palette: &Palette) {
    assert_eq!(coloring.len(), graph.len());
    assert!(coloring.is_complete(), "coloring leaves regions unassigned");
    for (region, color) in coloring.iter() {
        let color = color.unwrap();
        assert!(palette.contains(color), "{} has color outside the palette", region);
    }
    for (a, b) in graph.edges() {
        assert_ne!(
            coloring.get(a),
            coloring.get(b),
            "{} and {} share a color",
            graph.name(a).unwrap(),
            graph.name(b).unwrap()
        );
    }
}
