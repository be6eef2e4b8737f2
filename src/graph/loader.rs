// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading an adjacency table from a JSON file.
//!
//! The file holds an array of entries, in visiting order:
//!
//! ```json
//! [
//!   { "region": "A", "neighbors": ["B"] },
//!   { "region": "B", "neighbors": ["A"] }
//! ]
//! ```
//!
//! Entries go through [`GraphBuilder`], so unknown neighbor names,
//! duplicates and self-loops are rejected before the solver sees them.

use super::{AdjacencyGraph, AsymmetryPolicy, GraphBuilder};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One entry of a graph file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// Build a graph from parsed entries.
pub fn graph_from_entries(
    entries: Vec<RegionEntry>,
    policy: AsymmetryPolicy,
) -> Result<AdjacencyGraph> {
    entries
        .into_iter()
        .fold(GraphBuilder::new().policy(policy), |builder, entry| {
            builder.region(entry.region, entry.neighbors)
        })
        .build()
}

/// Parse a graph from JSON text.
pub fn parse_graph(json: &str, policy: AsymmetryPolicy) -> Result<AdjacencyGraph> {
    let entries: Vec<RegionEntry> = serde_json::from_str(json)?;
    graph_from_entries(entries, policy)
}

/// Read and parse a graph file.
pub fn load_graph(path: impl AsRef<Path>, policy: AsymmetryPolicy) -> Result<AdjacencyGraph> {
    let path = path.as_ref();
    debug!("loading adjacency graph from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_graph(&json, policy)
}
