// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The immutable adjacency graph and its validating builder.

use super::RegionId;
use crate::error::{ColoringError, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do with an entry `A: [B]` when `B` does not list `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsymmetryPolicy {
    /// Add the missing reverse entry, logging a warning.
    #[default]
    Symmetrize,
    /// Fail construction with [`ColoringError::AsymmetricAdjacency`].
    Reject,
    /// Keep the entry as given. The constraint is then only checked when
    /// the listing region is colored after its neighbor.
    Trust,
}

/// Mapping from each region to its neighboring regions.
///
/// Built once through [`GraphBuilder`] and read-only afterwards. Regions
/// keep the order in which they were added; this is the order in which
/// the solver visits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    names: Vec<String>,
    index: HashMap<String, RegionId>,
    neighbors: Vec<Vec<RegionId>>,
}

impl AdjacencyGraph {
    /// Build a graph from a static `(region, neighbors)` table.
    pub fn from_table(table: &[(&str, &[&str])], policy: AsymmetryPolicy) -> Result<Self> {
        table
            .iter()
            .fold(GraphBuilder::new().policy(policy), |builder, (name, neighbors)| {
                builder.region(*name, neighbors.iter().copied())
            })
            .build()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All regions, in insertion order.
    pub fn all_regions(&self) -> impl ExactSizeIterator<Item = RegionId> {
        (0..self.names.len()).map(RegionId::new)
    }

    /// All region names, in insertion order.
    pub fn region_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Look up a region by name.
    pub fn id_of(&self, name: &str) -> Result<RegionId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ColoringError::unknown_region(name))
    }

    /// The name of a region.
    pub fn name(&self, id: RegionId) -> Result<&str> {
        self.names
            .get(id.index())
            .map(String::as_str)
            .ok_or(ColoringError::UnknownRegionId { id: id.index() })
    }

    /// Names of the neighbors of the named region.
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>> {
        let id = self.id_of(name)?;
        Ok(self
            .adjacent(id)
            .iter()
            .map(|n| self.names[n.index()].as_str())
            .collect())
    }

    /// Neighbors of a region, by id.
    pub fn neighbor_ids(&self, id: RegionId) -> Result<&[RegionId]> {
        self.neighbors
            .get(id.index())
            .map(Vec::as_slice)
            .ok_or(ColoringError::UnknownRegionId { id: id.index() })
    }

    /// Neighbors of a region this graph issued.
    pub(crate) fn adjacent(&self, id: RegionId) -> &[RegionId] {
        &self.neighbors[id.index()]
    }

    /// Whether either region lists the other.
    pub fn are_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        let listed = |x: RegionId, y: RegionId| {
            self.neighbors
                .get(x.index())
                .is_some_and(|list| list.contains(&y))
        };
        listed(a, b) || listed(b, a)
    }

    /// Every adjacent pair once, as `(lower id, higher id)`, sorted.
    pub fn edges(&self) -> Vec<(RegionId, RegionId)> {
        let mut edges: Vec<(RegionId, RegionId)> = self
            .all_regions()
            .flat_map(|a| self.adjacent(a).iter().map(move |&b| (a.min(b), a.max(b))))
            .collect();
        edges.sort();
        edges.dedup();
        edges
    }
}

/// Collects `(region, neighbors)` entries and validates them into an [`AdjacencyGraph`].
///
/// # Example
///
/// ```
/// use map_coloring::graph::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .region("A", ["B"])
///     .region("B", ["A", "C"])
///     .region("C", ["B"])
///     .build()
///     .unwrap();
/// assert_eq!(graph.neighbors("B").unwrap(), vec!["A", "C"]);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    entries: Vec<(String, Vec<String>)>,
    policy: AsymmetryPolicy,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how asymmetric entries are handled (default: symmetrize).
    pub fn policy(mut self, policy: AsymmetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a region and the regions it borders.
    pub fn region<S, I, N>(mut self, name: S, neighbors: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.entries.push((
            name.into(),
            neighbors.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Validate the entries and build the graph.
    ///
    /// Fails on duplicate region keys, self-loops, neighbors that are not
    /// themselves regions, and (under [`AsymmetryPolicy::Reject`]) on
    /// one-sided entries. Repeated neighbors within one entry are collapsed.
    pub fn build(self) -> Result<AdjacencyGraph> {
        let mut names = Vec::with_capacity(self.entries.len());
        let mut index = HashMap::with_capacity(self.entries.len());
        for (name, _) in &self.entries {
            if index.insert(name.clone(), RegionId::new(names.len())).is_some() {
                return Err(ColoringError::DuplicateRegion { name: name.clone() });
            }
            names.push(name.clone());
        }

        let mut neighbors = Vec::with_capacity(self.entries.len());
        for (id, (name, listed)) in self.entries.iter().enumerate() {
            let mut resolved: Vec<RegionId> = Vec::with_capacity(listed.len());
            for neighbor in listed {
                let neighbor_id = *index
                    .get(neighbor)
                    .ok_or_else(|| ColoringError::unknown_region(neighbor.as_str()))?;
                if neighbor_id.index() == id {
                    return Err(ColoringError::SelfLoop { name: name.clone() });
                }
                if !resolved.contains(&neighbor_id) {
                    resolved.push(neighbor_id);
                }
            }
            neighbors.push(resolved);
        }

        let one_sided: Vec<(RegionId, RegionId)> = neighbors
            .iter()
            .enumerate()
            .flat_map(|(a, list)| list.iter().map(move |&b| (RegionId::new(a), b)))
            .filter(|&(a, b)| !neighbors[b.index()].contains(&a))
            .collect();

        for (a, b) in one_sided {
            match self.policy {
                AsymmetryPolicy::Reject => {
                    return Err(ColoringError::AsymmetricAdjacency {
                        from: names[a.index()].clone(),
                        to: names[b.index()].clone(),
                    });
                }
                AsymmetryPolicy::Symmetrize => {
                    warn!(
                        "{} lists {} but not the reverse; adding {} to {}",
                        names[a.index()],
                        names[b.index()],
                        names[a.index()],
                        names[b.index()]
                    );
                    neighbors[b.index()].push(a);
                }
                AsymmetryPolicy::Trust => {
                    debug!(
                        "keeping one-sided adjacency {} -> {}",
                        names[a.index()],
                        names[b.index()]
                    );
                }
            }
        }

        debug!("built adjacency graph with {} regions", names.len());
        Ok(AdjacencyGraph {
            names,
            index,
            neighbors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> AdjacencyGraph {
        GraphBuilder::new()
            .region("A", ["B"])
            .region("B", ["A", "C"])
            .region("C", ["B"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_insertion_order() {
        let graph = GraphBuilder::new()
            .region("Zeta", Vec::<String>::new())
            .region("Alpha", Vec::<String>::new())
            .build()
            .unwrap();
        assert_eq!(graph.region_names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert_eq!(graph.id_of("Alpha").unwrap().index(), 1);
    }

    #[test]
    fn test_neighbors_by_name() {
        let graph = path_graph();
        assert_eq!(graph.neighbors("A").unwrap(), vec!["B"]);
        assert_eq!(graph.neighbors("B").unwrap(), vec!["A", "C"]);
    }

    #[test]
    fn test_unknown_region_query() {
        let graph = path_graph();
        match graph.neighbors("D") {
            Err(ColoringError::UnknownRegion { name }) => assert_eq!(name, "D"),
            other => panic!("expected UnknownRegion, got {:?}", other),
        }
        assert!(matches!(
            graph.neighbor_ids(RegionId::new(3)),
            Err(ColoringError::UnknownRegionId { id: 3 })
        ));
        assert!(graph.name(RegionId::new(7)).is_err());
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let result = GraphBuilder::new()
            .region("A", Vec::<String>::new())
            .region("A", Vec::<String>::new())
            .build();
        assert!(matches!(result, Err(ColoringError::DuplicateRegion { name }) if name == "A"));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = GraphBuilder::new().region("A", ["A"]).build();
        assert!(matches!(result, Err(ColoringError::SelfLoop { name }) if name == "A"));
    }

    #[test]
    fn test_unknown_neighbor_rejected() {
        let result = GraphBuilder::new().region("A", ["Atlantis"]).build();
        assert!(matches!(result, Err(ColoringError::UnknownRegion { name }) if name == "Atlantis"));
    }

    #[test]
    fn test_repeated_neighbor_collapsed() {
        let graph = GraphBuilder::new()
            .region("A", ["B", "B"])
            .region("B", ["A"])
            .build()
            .unwrap();
        assert_eq!(graph.neighbors("A").unwrap(), vec!["B"]);
    }

    #[test]
    fn test_asymmetry_symmetrized_by_default() {
        let graph = GraphBuilder::new()
            .region("A", ["B"])
            .region("B", Vec::<String>::new())
            .build()
            .unwrap();
        assert_eq!(graph.neighbors("B").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_asymmetry_rejected() {
        let result = GraphBuilder::new()
            .policy(AsymmetryPolicy::Reject)
            .region("A", ["B"])
            .region("B", Vec::<String>::new())
            .build();
        match result {
            Err(ColoringError::AsymmetricAdjacency { from, to }) => {
                assert_eq!(from, "A");
                assert_eq!(to, "B");
            }
            other => panic!("expected AsymmetricAdjacency, got {:?}", other),
        }
    }

    #[test]
    fn test_asymmetry_trusted() {
        let graph = GraphBuilder::new()
            .policy(AsymmetryPolicy::Trust)
            .region("A", ["B"])
            .region("B", Vec::<String>::new())
            .build()
            .unwrap();
        assert!(graph.neighbors("B").unwrap().is_empty());
        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        assert!(graph.are_adjacent(a, b));
        assert!(graph.are_adjacent(b, a));
        assert_eq!(graph.edges(), vec![(a, b)]);
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = path_graph();
        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        let c = graph.id_of("C").unwrap();
        assert_eq!(graph.edges(), vec![(a, b), (b, c)]);
        assert!(!graph.are_adjacent(a, c));
    }

    #[test]
    fn test_from_table() {
        let table: &[(&str, &[&str])] = &[("A", &["B"]), ("B", &["A"])];
        let graph = AdjacencyGraph::from_table(table, AsymmetryPolicy::Reject).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(!graph.is_empty());
    }
}
