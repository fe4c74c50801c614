// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! PageRank Centrality Algorithm.
//!
//! Classic random-surfer rank transfer via power iteration. Dangling nodes
//! (zero out-degree) have their rank mass redistributed uniformly on every
//! iteration; without this the total mass leaks and scores degrade.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, CentralityResult, scores_to_result};
use crate::algo::power_iteration::PowerIteration;
use axial_common::{AxialError, Result};

pub struct PageRank;

#[derive(Debug, Clone)]
pub struct PageRankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(AxialError::invalid_argument(
                "damping",
                "must be finite and in [0, 1]",
            ));
        }
        if self.max_iterations == 0 {
            return Err(AxialError::invalid_argument(
                "max_iterations",
                "must be > 0",
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AxialError::invalid_argument(
                "tolerance",
                "must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PageRankResult {
    pub scores: CentralityResult,
    pub iterations: usize,
    pub converged: bool,
}

impl Algorithm for PageRank {
    type Config = PageRankConfig;
    type Result = PageRankResult;

    fn name() -> &'static str {
        "pagerank"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Result<Self::Result> {
        config.validate()?;

        let n = graph.node_count();
        if n == 0 {
            return Ok(PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            });
        }

        let n_f64 = n as f64;
        let d = config.damping;
        let teleport = (1.0 - d) / n_f64;

        let dangling: Vec<u32> = (0..n as u32).filter(|&u| graph.out_degree(u) == 0).collect();

        let engine = PowerIteration {
            max_iterations: config.max_iterations,
            tolerance: Some(config.tolerance),
        };

        let run = engine.run(n, |scores, next| {
            let dangling_sum: f64 = dangling.iter().map(|&u| scores[u as usize]).sum();
            next.fill(teleport + d * dangling_sum / n_f64);

            // Push each node's mass along its outgoing edges.
            for u in 0..n as u32 {
                let deg = graph.out_degree(u);
                if deg > 0 {
                    let share = d * scores[u as usize] / deg as f64;
                    for &v in graph.out_neighbors(u) {
                        next[v as usize] += share;
                    }
                }
            }
        });

        Ok(PageRankResult {
            scores: scores_to_result(graph, run.scores),
            iterations: run.iterations,
            converged: run.converged,
        })
    }
}
