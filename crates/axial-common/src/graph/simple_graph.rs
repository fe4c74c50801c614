// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Simple adjacency-list graph.
//!
//! A minimal reference implementation of [`GraphView`] used by tests,
//! benches, and doc examples. It provides:
//! - O(1) node lookup
//! - O(degree) neighbor iteration
//! - deterministic node enumeration (insertion order)
//!
//! Anything beyond append-only construction (removal, properties,
//! persistence) belongs to the application hosting the engine.

use crate::core::id::NodeId;
use crate::graph::view::{Direction, GraphView};
use fxhash::FxBuildHasher;
use std::collections::HashMap;

/// Type alias for FxHashMap (faster hashing for integer keys)
type FxHashMap<K, V> = HashMap<K, V, FxBuildHasher>;

/// In-memory graph with adjacency lists, directed or undirected at
/// construction.
///
/// For undirected graphs each edge is stored in both endpoints' adjacency
/// lists but counted once by [`SimpleGraph::edge_count`].
#[derive(Debug)]
pub struct SimpleGraph {
    directed: bool,
    /// Nodes in insertion order; defines the enumeration order.
    nodes: Vec<NodeId>,
    /// Membership lookup.
    node_set: FxHashMap<NodeId, ()>,
    /// Outgoing adjacency per node (full adjacency when undirected).
    outgoing: FxHashMap<NodeId, Vec<NodeId>>,
    /// Incoming adjacency per node (unused when undirected).
    incoming: FxHashMap<NodeId, Vec<NodeId>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            node_set: HashMap::with_hasher(FxBuildHasher::default()),
            outgoing: HashMap::with_hasher(FxBuildHasher::default()),
            incoming: HashMap::with_hasher(FxBuildHasher::default()),
            edge_count: 0,
        }
    }

    /// Adds a node. Returns true if the node was newly added.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.node_set.contains_key(&node) {
            return false;
        }
        self.node_set.insert(node, ());
        self.nodes.push(node);
        true
    }

    /// Adds an edge. Endpoints are implicitly created if they don't exist.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        self.add_node(src);
        self.add_node(dst);

        self.outgoing.entry(src).or_default().push(dst);
        if self.directed {
            self.incoming.entry(dst).or_default().push(src);
        } else {
            // Undirected: visible from both endpoints' adjacency.
            self.outgoing.entry(dst).or_default().push(src);
        }
        self.edge_count += 1;
    }

    fn adjacency(&self, node: NodeId, direction: Direction) -> &[NodeId] {
        let map = if self.directed && direction == Direction::Incoming {
            &self.incoming
        } else {
            &self.outgoing
        };
        map.get(&node).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

impl GraphView for SimpleGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn neighbors(&self, node: NodeId, direction: Direction) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.adjacency(node, direction).iter().copied())
    }

    fn degree(&self, node: NodeId) -> usize {
        self.adjacency(node, Direction::Outgoing).len()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.node_set.contains_key(&node)
    }
}
