// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the coloring search.
//!
//! Every assignment made during search records the region's previous color
//! on the trail. Backtracking rewinds the trail to a mark, restoring each
//! slot in reverse order, so a branch never observes a sibling's tentative
//! assignment while only one coloring is ever allocated.

use crate::color::Color;
use crate::graph::RegionId;
use crate::state::Coloring;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    region: RegionId,
    previous: Option<Color>,
}

/// Undo log of coloring changes.
///
/// # Memory Model
///
/// The trail only grows while the search descends, and each region is
/// assigned at most once per path, so its length never exceeds the number
/// of regions.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail sized for a graph of `regions` regions.
    pub fn with_capacity(regions: usize) -> Self {
        Self {
            entries: Vec::with_capacity(regions),
        }
    }

    /// Set a region's color, recording the old value.
    pub fn assign(&mut self, coloring: &mut Coloring, region: RegionId, color: Color) {
        let previous = coloring.set(region, Some(color));
        self.entries.push(TrailEntry { region, previous });
    }

    /// Undo every change recorded after `mark`, newest first.
    ///
    /// Returns the number of changes undone.
    pub fn rewind_to(&mut self, mark: usize, coloring: &mut Coloring) -> usize {
        let mut undone = 0;
        while self.entries.len() > mark {
            if let Some(entry) = self.entries.pop() {
                coloring.set(entry.region, entry.previous);
                undone += 1;
            }
        }
        undone
    }

    /// Get the current number of entries in the trail.
    ///
    /// This is the mark to pass to [`rewind_to`](Self::rewind_to).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
