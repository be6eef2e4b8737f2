// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for graph construction and search.
//!
//! A search that finds no coloring is not an error: it is reported as
//! [`SolveOutcome::NoSolutionFound`](crate::solver::SolveOutcome::NoSolutionFound).

use thiserror::Error;

/// Result type for map coloring operations.
pub type Result<T> = std::result::Result<T, ColoringError>;

/// Errors raised while building a graph, choosing a palette or running a search.
#[derive(Debug, Error)]
pub enum ColoringError {
    /// A region name that the graph does not contain.
    #[error("unknown region: {name}")]
    UnknownRegion { name: String },

    /// A region id outside the graph.
    #[error("unknown region id: {id}")]
    UnknownRegionId { id: usize },

    /// The same region appears twice as a key of the adjacency table.
    #[error("duplicate region: {name}")]
    DuplicateRegion { name: String },

    /// A region lists itself as a neighbor.
    #[error("region {name} lists itself as a neighbor")]
    SelfLoop { name: String },

    /// `from` lists `to` as a neighbor but `to` does not list `from`.
    #[error("asymmetric adjacency: {from} lists {to}, but {to} does not list {from}")]
    AsymmetricAdjacency { from: String, to: String },

    /// The palette is not four distinct known colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// The search ran out of its step budget before finishing.
    #[error("search step limit exceeded after {steps} steps")]
    StepLimitExceeded { steps: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ColoringError {
    pub(crate) fn unknown_region(name: impl Into<String>) -> Self {
        ColoringError::UnknownRegion { name: name.into() }
    }
}
