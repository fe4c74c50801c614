// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Read-only graph capability consumed by the centrality algorithms.
//!
//! The engine never mutates a graph and never depends on how one is stored.
//! Both directed and undirected graphs implement [`GraphView`]; algorithm
//! code stays generic over the variant and branches only on
//! [`GraphView::is_directed`] where the semantics differ (degree notions,
//! betweenness pair counting).

use crate::core::id::NodeId;

/// Direction for neighbor traversal.
///
/// Undirected graphs return the same adjacency for both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// Minimal read-only view of a graph.
///
/// `nodes()` must be restartable and yield the same finite sequence on every
/// call while the graph is unmodified; that sequence defines the order of
/// every centrality result computed from the view.
pub trait GraphView {
    /// Number of nodes. O(1).
    fn node_count(&self) -> usize;

    /// Number of edges, counting each undirected edge once. O(1).
    fn edge_count(&self) -> usize;

    /// Whether edges are directed.
    fn is_directed(&self) -> bool;

    /// All node identifiers, in enumeration order.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Neighbors of `node` in the given direction.
    ///
    /// Unknown nodes yield an empty sequence.
    fn neighbors(&self, node: NodeId, direction: Direction) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Incident-edge count for `node`: out-degree for directed graphs,
    /// adjacency size for undirected ones. O(1) amortized.
    fn degree(&self, node: NodeId) -> usize;

    /// Membership test. Implementations should override with an O(1) lookup.
    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes().any(|n| n == node)
    }
}
