// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

use std::collections::HashMap;

use axial::{
    Algo, AxialError, BetweennessConfig, DegreeConfig, EigenvectorConfig, NodeId, PageRankConfig,
    PersonalizedPageRankConfig, SimpleGraph,
};

fn node(raw: u64) -> NodeId {
    NodeId::new(raw)
}

#[test]
fn test_empty_graph_yields_empty_results() -> anyhow::Result<()> {
    let g = SimpleGraph::directed();

    assert!(axial::degree_centrality(&g, DegreeConfig::default())?.is_empty());
    assert!(axial::pagerank(&g, PageRankConfig::default())?.is_empty());
    assert!(axial::eigenvector_centrality(&g, EigenvectorConfig::default())?.is_empty());
    assert!(axial::betweenness_centrality(&g, BetweennessConfig::default())?.is_empty());
    Ok(())
}

#[test]
fn test_pagerank_all_dangling() -> anyhow::Result<()> {
    // No edges at all: every node is dangling, scores stay uniform.
    let mut g = SimpleGraph::directed();
    g.add_node(node(0));
    g.add_node(node(1));
    g.add_node(node(2));

    let scores = axial::pagerank(&g, PageRankConfig::default())?;
    for (_, score) in &scores {
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_pagerank_sink_gains_over_source() -> anyhow::Result<()> {
    // A -> B: B collects A's mass plus the redistribution.
    let mut g = SimpleGraph::directed();
    g.add_edge(node(0), node(1));

    let scores = axial::pagerank(&g, PageRankConfig::default())?;
    let map: HashMap<_, _> = scores.into_iter().collect();
    assert!(map[&node(1)] > map[&node(0)]);
    Ok(())
}

#[test]
fn test_eigenvector_single_isolated_node_is_zero() -> anyhow::Result<()> {
    let mut g = SimpleGraph::undirected();
    g.add_node(node(7));

    let scores = axial::eigenvector_centrality(&g, EigenvectorConfig::default())?;
    assert_eq!(scores, vec![(node(7), 0.0)]);
    Ok(())
}

#[test]
fn test_betweenness_disconnected_components() -> anyhow::Result<()> {
    // Two separate paths; unreachable pairs contribute nothing, middles
    // still carry their own component's paths.
    let mut g = SimpleGraph::undirected();
    g.add_edge(node(0), node(1));
    g.add_edge(node(1), node(2));
    g.add_edge(node(10), node(11));
    g.add_edge(node(11), node(12));

    let scores = axial::betweenness_centrality(&g, BetweennessConfig::default())?;
    let map: HashMap<_, _> = scores.into_iter().collect();
    assert_eq!(map[&node(1)], 1.0);
    assert_eq!(map[&node(11)], 1.0);
    assert_eq!(map[&node(0)], 0.0);
    assert_eq!(map[&node(12)], 0.0);
    Ok(())
}

#[test]
fn test_invalid_damping_is_rejected_before_computation() {
    let mut g = SimpleGraph::directed();
    g.add_edge(node(0), node(1));

    let err = Algo::new(&g).pagerank().damping(1.5).run().unwrap_err();
    assert!(matches!(err, AxialError::InvalidArgument { .. }));

    let err = Algo::new(&g)
        .personalized_pagerank(node(0))
        .damping(-0.2)
        .run()
        .unwrap_err();
    assert!(matches!(err, AxialError::InvalidArgument { .. }));
}

#[test]
fn test_ppr_missing_center_is_rejected() {
    let mut g = SimpleGraph::directed();
    g.add_edge(node(0), node(1));

    let err = axial::personalized_pagerank(
        &g,
        node(42),
        PersonalizedPageRankConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AxialError::NodeNotFound { .. }));
}

#[test]
fn test_self_loop_does_not_break_pagerank() -> anyhow::Result<()> {
    let mut g = SimpleGraph::directed();
    g.add_edge(node(0), node(0));
    g.add_edge(node(0), node(1));

    let scores = axial::pagerank(&g, PageRankConfig::default())?;
    let sum: f64 = scores.iter().map(|(_, s)| s).sum();
    assert!((sum - 1.0).abs() < 1e-6);
    assert!(scores.iter().all(|(_, s)| s.is_finite() && *s >= 0.0));
    Ok(())
}

#[test]
fn test_single_node_graph() -> anyhow::Result<()> {
    let mut g = SimpleGraph::directed();
    g.add_node(node(0));

    let pr = axial::pagerank(&g, PageRankConfig::default())?;
    assert_eq!(pr.len(), 1);
    assert!((pr[0].1 - 1.0).abs() < 1e-9);

    let bc = axial::betweenness_centrality(&g, BetweennessConfig::default())?;
    assert_eq!(bc, vec![(node(0), 0.0)]);

    let ppr = axial::personalized_pagerank(&g, node(0), Default::default())?;
    assert!((ppr[0].1 - 1.0).abs() < 1e-9);
    Ok(())
}
