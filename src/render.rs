// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hand-off of a finished coloring to a map renderer.
//!
//! A renderer draws regions from its own geometry source, whose region set
//! need not match the graph's. [`FillPlan::build`] pairs each geometry
//! region with its display color; geometry regions the coloring does not
//! cover are logged and skipped, never treated as errors.

use crate::color::Color;
use crate::graph::AdjacencyGraph;
use crate::state::Coloring;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// One region to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub region: String,
    pub color: Color,
    /// Display color name, e.g. `"red"`.
    pub display: &'static str,
    /// Display color as hex RGB.
    pub rgb: &'static str,
}

/// Fill colors for a renderer's regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillPlan {
    pub fills: Vec<Fill>,
    /// Geometry regions with no color, in the order they were given.
    pub missing: Vec<String>,
}

impl FillPlan {
    /// Match the renderer's region names against the coloring.
    pub fn build<I, S>(coloring: &Coloring, graph: &AdjacencyGraph, geometry_regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = FillPlan::default();
        for name in geometry_regions {
            let name = name.as_ref();
            let color = graph
                .id_of(name)
                .ok()
                .and_then(|id| coloring.get(id));
            match color {
                Some(color) => plan.fills.push(Fill {
                    region: name.to_string(),
                    color,
                    display: color.display_name(),
                    rgb: color.rgb(),
                }),
                None => {
                    warn!("Missing color for {}", name);
                    plan.missing.push(name.to_string());
                }
            }
        }
        plan
    }

    /// A plan covering exactly the graph's own regions.
    pub fn for_graph(coloring: &Coloring, graph: &AdjacencyGraph) -> Self {
        Self::build(coloring, graph, graph.region_names())
    }
}

/// One `region  color` line per fill, then the missing regions.
impl fmt::Display for FillPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .fills
            .iter()
            .map(|fill| fill.region.len())
            .max()
            .unwrap_or(0);
        for fill in &self.fills {
            writeln!(f, "{:<width$}  {}", fill.region, fill.color, width = width)?;
        }
        if !self.missing.is_empty() {
            writeln!(f, "missing: {}", self.missing.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn colored_pair() -> (AdjacencyGraph, Coloring) {
        let graph = GraphBuilder::new()
            .region("A", ["B"])
            .region("B", ["A"])
            .build()
            .unwrap();
        let mut coloring = Coloring::empty(graph.len());
        coloring.assign(graph.id_of("A").unwrap(), Color::Red);
        coloring.assign(graph.id_of("B").unwrap(), Color::Blue);
        (graph, coloring)
    }

    #[test]
    fn test_plan_for_graph() {
        let (graph, coloring) = colored_pair();
        let plan = FillPlan::for_graph(&coloring, &graph);
        assert_eq!(plan.fills.len(), 2);
        assert_eq!(plan.fills[1].display, "blue");
        assert_eq!(plan.fills[1].rgb, "#0000ff");
        assert!(plan.missing.is_empty());
    }

    #[test]
    fn test_geometry_mismatch_is_skipped() {
        let (graph, coloring) = colored_pair();
        let plan = FillPlan::build(&coloring, &graph, ["B", "Puerto Rico", "A"]);
        let regions: Vec<&str> = plan.fills.iter().map(|f| f.region.as_str()).collect();
        assert_eq!(regions, vec!["B", "A"]);
        assert_eq!(plan.missing, vec!["Puerto Rico".to_string()]);
    }

    #[test]
    fn test_unassigned_region_is_missing() {
        let (graph, _) = colored_pair();
        let partial = Coloring::empty(graph.len());
        let plan = FillPlan::for_graph(&partial, &graph);
        assert!(plan.fills.is_empty());
        assert_eq!(plan.missing, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_display_and_json() {
        let (graph, coloring) = colored_pair();
        let plan = FillPlan::build(&coloring, &graph, ["A", "Z"]);
        assert_eq!(plan.to_string(), "A  Red\nmissing: Z\n");
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["fills"][0]["color"], "Red");
        assert_eq!(json["fills"][0]["display"], "red");
        assert_eq!(json["missing"][0], "Z");
    }
}
