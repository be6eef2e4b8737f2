// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial and complete colorings.

use crate::color::Color;
use crate::error::Result;
use crate::graph::{AdjacencyGraph, RegionId};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Region → color assignment, indexed by [`RegionId`].
///
/// Unassigned regions hold `None`. The solver returns a complete instance
/// (every region assigned) that the caller owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coloring {
    colors: Vec<Option<Color>>,
}

impl Coloring {
    /// A coloring of `len` regions with nothing assigned.
    pub fn empty(len: usize) -> Self {
        Self {
            colors: vec![None; len],
        }
    }

    /// Number of regions covered, assigned or not.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color of a region, if assigned.
    pub fn get(&self, region: RegionId) -> Option<Color> {
        self.colors.get(region.index()).copied().flatten()
    }

    /// The color of a region, looked up by name.
    pub fn color_of(&self, graph: &AdjacencyGraph, name: &str) -> Result<Option<Color>> {
        Ok(self.get(graph.id_of(name)?))
    }

    /// Assign a color in place.
    ///
    /// # Panics
    ///
    /// Panics if `region` is out of range.
    pub fn assign(&mut self, region: RegionId, color: Color) {
        self.set(region, Some(color));
    }

    /// A copy of this coloring with one more assignment; `self` is left untouched.
    pub fn with(&self, region: RegionId, color: Color) -> Self {
        let mut next = self.clone();
        next.assign(region, color);
        next
    }

    /// Overwrite a slot, returning its previous value.
    pub(crate) fn set(&mut self, region: RegionId, color: Option<Color>) -> Option<Color> {
        assert!(
            region.index() < self.colors.len(),
            "Region id out of bounds: {}",
            region
        );
        std::mem::replace(&mut self.colors[region.index()], color)
    }

    /// Number of assigned regions.
    pub fn assigned_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every region has a color.
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    /// Iterate over `(region, color)` in region order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, Option<Color>)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| (RegionId::new(i), *c))
    }

    /// Whether `color` is allowed for `region`: no neighbor already holds it.
    ///
    /// Unassigned neighbors impose no constraint.
    pub fn is_valid_for(&self, graph: &AdjacencyGraph, region: RegionId, color: Color) -> bool {
        graph
            .adjacent(region)
            .iter()
            .all(|&neighbor| self.get(neighbor) != Some(color))
    }

    /// Adjacent pairs (as listed by `graph.edges()`) that share a color.
    pub fn conflicts(&self, graph: &AdjacencyGraph) -> Vec<(RegionId, RegionId)> {
        graph
            .edges()
            .into_iter()
            .filter(|&(a, b)| matches!((self.get(a), self.get(b)), (Some(x), Some(y)) if x == y))
            .collect()
    }

    /// Pair each assigned region with its name, in region order.
    pub fn named(&self, graph: &AdjacencyGraph) -> NamedColoring {
        let entries = graph
            .all_regions()
            .zip(graph.region_names())
            .filter_map(|(id, name)| self.get(id).map(|color| (name.to_string(), color)))
            .collect();
        NamedColoring { entries }
    }
}

/// A coloring keyed by region name, in region order.
///
/// Serializes as a JSON object `{ "Alabama": "Red", ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColoring {
    entries: Vec<(String, Color)>,
}

impl NamedColoring {
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NamedColoring {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}
