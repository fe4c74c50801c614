// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Graph Projection - Dense CSR representation for algorithm execution.
//!
//! A `GraphProjection` is a materialized, algorithm-optimized snapshot of a
//! [`GraphView`]. It provides:
//! - Dense node indexing (0..V) in the view's enumeration order
//! - CSR format for cache-friendly neighbor iteration
//! - Optional reverse edges for algorithms that walk predecessors
//!
//! The projection is immutable once built; the view must not be mutated
//! while a projection built from it is in use.

use crate::algo::IdMap;
use axial_common::{Direction, GraphView, NodeId};
use tracing::debug;

/// Configuration for building a graph projection.
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Whether to build reverse edges (in_neighbors)
    pub include_reverse: bool,
}

/// Dense CSR representation optimized for algorithm execution.
#[derive(Debug)]
pub struct GraphProjection {
    /// Number of nodes in the projection
    pub(crate) node_count: usize,

    /// Whether the source graph is directed
    pub(crate) directed: bool,

    /// Outbound edges: CSR format
    pub(crate) out_offsets: Vec<u32>, // [V+1] node slot -> edge start
    pub(crate) out_neighbors: Vec<u32>, // [E] neighbor slots

    /// Inbound edges: CSR format (optional)
    pub(crate) in_offsets: Vec<u32>, // [V+1]
    pub(crate) in_neighbors: Vec<u32>, // [E]

    /// Identity mapping
    pub(crate) id_map: IdMap,
}

impl GraphProjection {
    /// Number of nodes in the projection.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of CSR edge entries (an undirected edge appears twice).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.out_neighbors.len()
    }

    /// Whether the source graph is directed.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Outbound neighbors of a node (by slot).
    #[inline]
    pub fn out_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_neighbors[start..end]
    }

    /// Outbound degree of a node.
    #[inline]
    pub fn out_degree(&self, slot: u32) -> u32 {
        self.out_offsets[slot as usize + 1] - self.out_offsets[slot as usize]
    }

    /// Inbound neighbors of a node (by slot).
    ///
    /// Empty unless the projection was built with `include_reverse`.
    #[inline]
    pub fn in_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.in_offsets[slot as usize] as usize;
        let end = self.in_offsets[slot as usize + 1] as usize;
        &self.in_neighbors[start..end]
    }

    /// Inbound degree of a node.
    #[inline]
    pub fn in_degree(&self, slot: u32) -> u32 {
        self.in_offsets[slot as usize + 1] - self.in_offsets[slot as usize]
    }

    /// Check if reverse edges are available.
    #[inline]
    pub fn has_reverse(&self) -> bool {
        !self.in_neighbors.is_empty()
    }

    /// Map slot back to NodeId.
    #[inline]
    pub fn to_node(&self, slot: u32) -> NodeId {
        self.id_map.to_node_unchecked(slot)
    }

    /// Map NodeId to slot.
    #[inline]
    pub fn to_slot(&self, node: NodeId) -> Option<u32> {
        self.id_map.to_slot(node)
    }

    /// Iterate over all nodes as (slot, node) in enumeration order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, NodeId)> + '_ {
        self.id_map.iter()
    }

    /// Memory usage in bytes.
    pub fn memory_size(&self) -> usize {
        self.out_offsets.len() * 4
            + self.out_neighbors.len() * 4
            + self.in_offsets.len() * 4
            + self.in_neighbors.len() * 4
            + self.id_map.memory_size()
    }
}

/// Builder for constructing a `GraphProjection` from a [`GraphView`].
pub struct ProjectionBuilder<'a, G: GraphView> {
    view: &'a G,
    config: ProjectionConfig,
}

impl<'a, G: GraphView> ProjectionBuilder<'a, G> {
    /// Create a new projection builder.
    pub fn new(view: &'a G) -> Self {
        Self {
            view,
            config: ProjectionConfig::default(),
        }
    }

    /// Include reverse edges for in_neighbors access.
    pub fn include_reverse(mut self, enabled: bool) -> Self {
        self.config.include_reverse = enabled;
        self
    }

    /// Build the projection. O(V+E).
    pub fn build(self) -> GraphProjection {
        let mut id_map = IdMap::with_capacity(self.view.node_count());
        for node in self.view.nodes() {
            id_map.insert(node);
        }
        let node_count = id_map.len();

        // Collect edges as slot pairs. Neighbors outside the node set are
        // skipped (the view is expected to be consistent; this mirrors the
        // behavior of projecting a subgraph).
        let mut out_edges = Vec::new();
        let mut in_edges = Vec::new();
        for (src_slot, src) in id_map.iter() {
            for dst in self.view.neighbors(src, Direction::Outgoing) {
                if let Some(dst_slot) = id_map.to_slot(dst) {
                    out_edges.push((src_slot, dst_slot));
                }
            }
            if self.config.include_reverse {
                for dst in self.view.neighbors(src, Direction::Incoming) {
                    if let Some(dst_slot) = id_map.to_slot(dst) {
                        in_edges.push((src_slot, dst_slot));
                    }
                }
            }
        }

        let (out_offsets, out_neighbors) = build_csr(node_count, &out_edges);
        let (in_offsets, in_neighbors) = if self.config.include_reverse {
            build_csr(node_count, &in_edges)
        } else {
            (vec![0; node_count + 1], Vec::new())
        };

        debug!(
            nodes = node_count,
            edges = out_neighbors.len(),
            reverse = self.config.include_reverse,
            "built graph projection"
        );

        GraphProjection {
            node_count,
            directed: self.view.is_directed(),
            out_offsets,
            out_neighbors,
            in_offsets,
            in_neighbors,
            id_map,
        }
    }
}

/// Build CSR from edge list.
fn build_csr(node_count: usize, edges: &[(u32, u32)]) -> (Vec<u32>, Vec<u32>) {
    if node_count == 0 {
        return (vec![0], Vec::new());
    }

    // Count degrees
    let mut degrees = vec![0u32; node_count];
    for &(src, _) in edges {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; node_count + 1];
    for i in 0..node_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbors
    let mut neighbors = vec![0u32; edges.len()];
    let mut current = offsets.clone();

    for &(src, dst) in edges {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        current[src as usize] += 1;
    }

    (offsets, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axial_common::SimpleGraph;

    #[test]
    fn test_build_csr() {
        // Triangle: 0 -> 1, 1 -> 2, 2 -> 0, plus 0 -> 2
        let edges = vec![(0, 1), (1, 2), (2, 0), (0, 2)];
        let (offsets, neighbors) = build_csr(3, &edges);

        assert_eq!(offsets, vec![0, 2, 3, 4]);
        // Node 0 has edges to 1 and 2
        assert_eq!(&neighbors[0..2], &[1, 2]);
        // Node 1 has edge to 2
        assert_eq!(&neighbors[2..3], &[2]);
        // Node 2 has edge to 0
        assert_eq!(&neighbors[3..4], &[0]);
    }

    #[test]
    fn test_projection_from_directed_view() {
        let mut g = SimpleGraph::directed();
        let a = NodeId::new(10);
        let b = NodeId::new(20);
        let c = NodeId::new(30);
        g.add_edge(a, b);
        g.add_edge(b, c);

        let p = ProjectionBuilder::new(&g).include_reverse(true).build();

        assert_eq!(p.node_count(), 3);
        assert!(p.is_directed());
        assert!(p.has_reverse());

        let slot_a = p.to_slot(a).unwrap();
        let slot_b = p.to_slot(b).unwrap();
        assert_eq!(p.out_neighbors(slot_a), &[slot_b]);
        assert_eq!(p.in_neighbors(slot_b), &[slot_a]);
        assert_eq!(p.out_degree(slot_b), 1);
        assert_eq!(p.in_degree(slot_a), 0);
        assert_eq!(p.to_node(slot_a), a);
    }

    #[test]
    fn test_projection_from_undirected_view() {
        let mut g = SimpleGraph::undirected();
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        g.add_edge(a, b);

        let p = ProjectionBuilder::new(&g).build();

        assert!(!p.is_directed());
        // One undirected edge becomes two CSR entries.
        assert_eq!(p.edge_count(), 2);
        let slot_a = p.to_slot(a).unwrap();
        let slot_b = p.to_slot(b).unwrap();
        assert_eq!(p.out_neighbors(slot_a), &[slot_b]);
        assert_eq!(p.out_neighbors(slot_b), &[slot_a]);
    }

    #[test]
    fn test_empty_projection() {
        let g = SimpleGraph::directed();
        let p = ProjectionBuilder::new(&g).build();
        assert_eq!(p.node_count(), 0);
        assert_eq!(p.edge_count(), 0);
        assert!(p.memory_size() > 0);
    }
}
