// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Eigenvector Centrality Algorithm.
//!
//! Measures the influence of a node in a network: a node is important when
//! its neighbors are important. Power iteration on the raw adjacency with
//! per-sweep L2 normalization, so scores are comparable across graphs.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, CentralityResult, scores_to_result};
use crate::algo::power_iteration::PowerIteration;
use axial_common::{AxialError, Result};

pub struct EigenvectorCentrality;

#[derive(Debug, Clone)]
pub struct EigenvectorConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

pub struct EigenvectorResult {
    pub scores: CentralityResult,
    pub iterations: usize,
}

impl Algorithm for EigenvectorCentrality {
    type Config = EigenvectorConfig;
    type Result = EigenvectorResult;

    fn name() -> &'static str {
        "eigenvector_centrality"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Result<Self::Result> {
        if config.max_iterations == 0 {
            return Err(AxialError::invalid_argument(
                "max_iterations",
                "must be > 0",
            ));
        }
        if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
            return Err(AxialError::invalid_argument(
                "tolerance",
                "must be finite and > 0",
            ));
        }

        let n = graph.node_count();

        let engine = PowerIteration {
            max_iterations: config.max_iterations,
            tolerance: Some(config.tolerance),
        };

        let run = engine.run(n, |scores, next| {
            next.fill(0.0);

            // Push method over the out-CSR is cache friendly; a node's next
            // score accumulates the current scores of whoever points at it.
            for u in 0..n as u32 {
                let x_u = scores[u as usize];
                if x_u == 0.0 {
                    continue;
                }
                for &v in graph.out_neighbors(u) {
                    next[v as usize] += x_u;
                }
            }

            // L2 normalize; an edgeless sweep leaves the zero vector, which
            // is the defined result for a graph with no edges.
            let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm > 0.0 {
                for x in next.iter_mut() {
                    *x /= norm;
                }
            }
        });

        Ok(EigenvectorResult {
            scores: scores_to_result(graph, run.scores),
            iterations: run.iterations,
        })
    }
}
