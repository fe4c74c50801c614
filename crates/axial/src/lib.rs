// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Axial: node-importance scoring over graphs.
//!
//! Pass anything implementing [`GraphView`] to one of the per-algorithm
//! entry points (or the fluent [`Algo`] builder) and get back a
//! `(node, score)` collection in the graph's node enumeration order.
//!
//! ```
//! use axial::{Algo, NodeId, SimpleGraph};
//!
//! let mut graph = SimpleGraph::undirected();
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//! graph.add_edge(NodeId::new(2), NodeId::new(3));
//!
//! let scores = Algo::new(&graph).betweenness().run().unwrap();
//! let middle = scores.iter().find(|(n, _)| *n == NodeId::new(2)).unwrap();
//! assert_eq!(middle.1, 1.0);
//! ```

pub mod api;

pub use api::{
    Algo, betweenness_centrality, degree_centrality, eigenvector_centrality, pagerank,
    personalized_pagerank,
};

// Re-exports for convenience
pub use axial_algo::{
    BetweennessConfig, CentralityResult, DegreeConfig, DegreeDirection, EigenvectorConfig,
    PageRankConfig, PersonalizedPageRankConfig,
};
pub use axial_common::{AxialError, Direction, GraphView, NodeId, Result, SimpleGraph};
