// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Region identifiers.

use std::fmt;

/// A region, identified by its position in the graph's enumeration order.
///
/// Ids are dense (`0..graph.len()`) and only meaningful for the graph that
/// issued them. The graph maps them back to region names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(usize);

impl RegionId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the id as a usize (for array indexing).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
