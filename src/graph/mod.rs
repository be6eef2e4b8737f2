// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph store: the immutable region adjacency data.
//!
//! - `region`: region identifiers
//! - `adjacency`: the graph and its validating builder
//! - `us_states`: the compiled-in US state table
//! - `loader`: JSON graph files

pub mod adjacency;
pub mod loader;
pub mod region;
pub mod us_states;

pub use adjacency::{AdjacencyGraph, AsymmetryPolicy, GraphBuilder};
pub use loader::{load_graph, parse_graph, RegionEntry};
pub use region::RegionId;
pub use us_states::{us_states, US_STATES};
