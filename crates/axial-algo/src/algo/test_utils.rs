// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

use crate::algo::{GraphProjection, ProjectionBuilder};
use axial_common::{NodeId, SimpleGraph};

pub fn node(raw: u64) -> NodeId {
    NodeId::new(raw)
}

pub fn directed_graph(edges: &[(u64, u64)]) -> SimpleGraph {
    let mut g = SimpleGraph::directed();
    for &(src, dst) in edges {
        g.add_edge(NodeId::new(src), NodeId::new(dst));
    }
    g
}

pub fn undirected_graph(edges: &[(u64, u64)]) -> SimpleGraph {
    let mut g = SimpleGraph::undirected();
    for &(src, dst) in edges {
        g.add_edge(NodeId::new(src), NodeId::new(dst));
    }
    g
}

pub fn build_test_projection(edges: &[(u64, u64)], reverse: bool) -> GraphProjection {
    let g = directed_graph(edges);
    ProjectionBuilder::new(&g).include_reverse(reverse).build()
}

pub fn build_undirected_projection(edges: &[(u64, u64)]) -> GraphProjection {
    let g = undirected_graph(edges);
    ProjectionBuilder::new(&g).build()
}
