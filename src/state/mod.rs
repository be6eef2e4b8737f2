// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - `coloring`: the partial or complete region → color assignment
//! - `statistics`: search counters
//!
//! During engine search the coloring is only changed through
//! [`SearchContext`](crate::context::SearchContext), which records every
//! change on the trail.

pub mod coloring;
pub mod statistics;

pub use coloring::{Coloring, NamedColoring};
pub use statistics::{Counters, Statistics};
