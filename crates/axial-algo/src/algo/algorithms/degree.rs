// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Degree Centrality Algorithm.
//!
//! Scores each node by its number of connections. Directed graphs can count
//! out-degree, in-degree, or their sum; undirected graphs have a single
//! degree notion regardless of the requested direction.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, CentralityResult};
use axial_common::{AxialError, Result};

pub struct DegreeCentrality;

#[derive(Debug, Clone)]
pub struct DegreeConfig {
    pub direction: DegreeDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeDirection {
    Outgoing,
    Incoming,
    Total,
}

impl Default for DegreeConfig {
    fn default() -> Self {
        Self {
            direction: DegreeDirection::Outgoing,
        }
    }
}

#[derive(Debug)]
pub struct DegreeResult {
    pub scores: CentralityResult,
}

impl Algorithm for DegreeCentrality {
    type Config = DegreeConfig;
    type Result = DegreeResult;

    fn name() -> &'static str {
        "degree_centrality"
    }

    fn needs_reverse() -> bool {
        true
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(DegreeResult { scores: Vec::new() });
        }

        // In-degrees only exist on a directed projection with reverse edges;
        // an undirected adjacency already sees each incident edge.
        let wants_reverse = graph.is_directed()
            && matches!(
                config.direction,
                DegreeDirection::Incoming | DegreeDirection::Total
            );
        if wants_reverse && !graph.has_reverse() && graph.edge_count() > 0 {
            return Err(AxialError::invalid_argument(
                "direction",
                "in-degrees need a projection built with reverse edges",
            ));
        }

        let mut scores = Vec::with_capacity(n);

        for slot in 0..n as u32 {
            let degree = if !graph.is_directed() {
                graph.out_degree(slot)
            } else {
                match config.direction {
                    DegreeDirection::Outgoing => graph.out_degree(slot),
                    DegreeDirection::Incoming => graph.in_degree(slot),
                    DegreeDirection::Total => graph.out_degree(slot) + graph.in_degree(slot),
                }
            };
            scores.push((graph.to_node(slot), degree as f64));
        }

        Ok(DegreeResult { scores })
    }
}
