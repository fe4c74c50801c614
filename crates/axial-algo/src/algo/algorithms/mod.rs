// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Core algorithm trait and the centrality implementations.

use crate::algo::GraphProjection;
use axial_common::{NodeId, Result};

/// Finished centrality scores, one entry per node, in the graph's node
/// enumeration order (not sorted by score).
pub type CentralityResult = Vec<(NodeId, f64)>;

/// Core trait for all centrality algorithms.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a projection.
    ///
    /// Parameter validation errors surface here before any computation;
    /// numerical non-convergence never does.
    fn run(graph: &GraphProjection, config: Self::Config) -> Result<Self::Result>;

    /// Whether this algorithm requires reverse edges.
    fn needs_reverse() -> bool {
        false
    }
}

mod degree;
pub use degree::{DegreeCentrality, DegreeConfig, DegreeDirection, DegreeResult};

mod pagerank;
pub use pagerank::{PageRank, PageRankConfig, PageRankResult};

mod personalized_pagerank;
pub use personalized_pagerank::{
    PersonalizedPageRank, PersonalizedPageRankConfig, PersonalizedPageRankResult,
};

mod eigenvector;
pub use eigenvector::{EigenvectorCentrality, EigenvectorConfig, EigenvectorResult};

mod betweenness;
pub use betweenness::{Betweenness, BetweennessConfig, BetweennessResult};

/// Map a slot-indexed score vector back to enumeration-ordered pairs.
pub(crate) fn scores_to_result(graph: &GraphProjection, scores: Vec<f64>) -> CentralityResult {
    scores
        .into_iter()
        .enumerate()
        .map(|(slot, score)| (graph.to_node(slot as u32), score))
        .collect()
}
