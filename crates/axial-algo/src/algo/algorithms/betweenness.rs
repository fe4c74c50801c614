// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Betweenness Centrality Algorithm (Brandes').
//!
//! Scores each node by the fraction of all-pairs shortest paths passing
//! through it. One breadth-first pass plus dependency accumulation per
//! source node; passes are independent and run on a worker pool. Each pass
//! keeps a private accumulator and merges it into the shared score vector
//! under an exclusive lock, so the critical section is O(V) per source
//! regardless of graph density.

use crate::algo::GraphProjection;
use crate::algo::algorithms::{Algorithm, CentralityResult, scores_to_result};
use anyhow::anyhow;
use axial_common::{AxialError, Result};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::debug;

pub struct Betweenness;

#[derive(Debug, Clone, Default)]
pub struct BetweennessConfig {
    /// Worker-pool size; `None` uses the default pool. The result is
    /// identical for any worker count.
    pub workers: Option<usize>,
    /// Rescale by 1/((n-1)(n-2)) (directed) or 2/((n-1)(n-2)) (undirected)
    /// so scores are comparable across graph sizes. Off by default: raw
    /// Brandes values are returned.
    pub normalize: bool,
}

#[derive(Debug)]
pub struct BetweennessResult {
    pub scores: CentralityResult,
}

impl Algorithm for Betweenness {
    type Config = BetweennessConfig;
    type Result = BetweennessResult;

    fn name() -> &'static str {
        "betweenness"
    }

    fn run(graph: &GraphProjection, config: Self::Config) -> Result<Self::Result> {
        if config.workers == Some(0) {
            return Err(AxialError::invalid_argument("workers", "must be > 0"));
        }

        let n = graph.node_count();
        if n == 0 {
            return Ok(BetweennessResult { scores: Vec::new() });
        }

        debug!(
            sources = n,
            workers = ?config.workers,
            "dispatching betweenness passes"
        );

        let cb = Mutex::new(vec![0.0f64; n]);

        let run_passes = || {
            (0..n as u32).into_par_iter().for_each(|s| {
                let delta = brandes_pass(graph, s);

                // Merge the pass-local dependencies into the shared vector.
                // The lock is held for the O(V) addition only; the traversal
                // above touched nothing shared.
                let mut shared = cb.lock();
                for (slot, dep) in delta.iter().enumerate() {
                    shared[slot] += dep;
                }
            });
        };

        match config.workers {
            Some(workers) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| AxialError::Internal(anyhow!(e)))?;
                pool.install(run_passes);
            }
            None => run_passes(),
        }

        let mut scores = cb.into_inner();

        // Undirected graphs see every unordered pair from both endpoints.
        if !graph.is_directed() {
            for score in scores.iter_mut() {
                *score /= 2.0;
            }
        }

        if config.normalize && n > 2 {
            let pairs = (n - 1) as f64 * (n - 2) as f64;
            let factor = if graph.is_directed() {
                1.0 / pairs
            } else {
                2.0 / pairs
            };
            for score in scores.iter_mut() {
                *score *= factor;
            }
        }

        Ok(BetweennessResult {
            scores: scores_to_result(graph, scores),
        })
    }
}

/// One Brandes source pass: BFS from `s` recording distances, shortest-path
/// counts and predecessors, then dependency accumulation in reverse
/// distance order. Nodes unreachable from `s` keep distance -1 and
/// contribute zero. Returns the pass-local dependency vector (zero at `s`).
fn brandes_pass(graph: &GraphProjection, s: u32) -> Vec<f64> {
    let n = graph.node_count();

    // Stack of visited nodes in non-decreasing distance order.
    let mut visited = Vec::with_capacity(n);
    let mut queue = VecDeque::with_capacity(n);

    let mut dist: Vec<i32> = vec![-1; n];
    let mut sigma: Vec<u64> = vec![0; n];
    let mut preds: Vec<Vec<u32>> = vec![Vec::new(); n];

    sigma[s as usize] = 1;
    dist[s as usize] = 0;
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        visited.push(v);
        let dist_v = dist[v as usize];

        for &w in graph.out_neighbors(v) {
            // Path discovery
            if dist[w as usize] < 0 {
                dist[w as usize] = dist_v + 1;
                queue.push_back(w);
            }
            // Path counting
            if dist[w as usize] == dist_v + 1 {
                sigma[w as usize] += sigma[v as usize];
                preds[w as usize].push(v);
            }
        }
    }

    // Dependency accumulation, farthest nodes first.
    let mut delta = vec![0.0; n];
    while let Some(w) = visited.pop() {
        for &v in &preds[w as usize] {
            if sigma[w as usize] > 0 {
                delta[v as usize] +=
                    (sigma[v as usize] as f64 / sigma[w as usize] as f64) * (1.0 + delta[w as usize]);
            }
        }
    }
    delta[s as usize] = 0.0;

    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{
        build_test_projection, build_undirected_projection, node,
    };

    #[test]
    fn test_betweenness_path_graph_middle_carries_all_paths() {
        // A - B - C: B lies on the unique shortest path between A and C.
        let graph = build_undirected_projection(&[(0, 1), (1, 2)]);

        let result = Betweenness::run(&graph, BetweennessConfig::default()).unwrap();
        let map: std::collections::HashMap<_, _> = result.scores.into_iter().collect();

        assert_eq!(map[&node(1)], 1.0);
        assert_eq!(map[&node(0)], 0.0);
        assert_eq!(map[&node(2)], 0.0);
    }

    #[test]
    fn test_betweenness_directed_line() {
        // 0 -> 1 -> 2 -> 3: interior nodes carry the through paths.
        let graph = build_test_projection(&[(0, 1), (1, 2), (2, 3)], false);

        let result = Betweenness::run(&graph, BetweennessConfig::default()).unwrap();
        let map: std::collections::HashMap<_, _> = result.scores.into_iter().collect();

        assert_eq!(map[&node(0)], 0.0);
        assert_eq!(map[&node(3)], 0.0);
        assert_eq!(map[&node(1)], 2.0); // on 0->2 and 0->3
        assert_eq!(map[&node(2)], 2.0); // on 0->3 and 1->3
    }

    #[test]
    fn test_betweenness_unreachable_nodes_contribute_zero() {
        // Two directed components: 0 -> 1 and 2 -> 3.
        let graph = build_test_projection(&[(0, 1), (2, 3)], false);

        let result = Betweenness::run(&graph, BetweennessConfig::default()).unwrap();
        for (_, score) in result.scores {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_betweenness_worker_count_does_not_change_result() {
        let edges: &[(u64, u64)] = &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (1, 3),
            (0, 2),
        ];
        let graph = build_undirected_projection(edges);

        let serial = Betweenness::run(
            &graph,
            BetweennessConfig {
                workers: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
        let parallel = Betweenness::run(
            &graph,
            BetweennessConfig {
                workers: Some(4),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(serial.scores.len(), parallel.scores.len());
        for ((n1, s1), (n2, s2)) in serial.scores.iter().zip(parallel.scores.iter()) {
            assert_eq!(n1, n2);
            assert!((s1 - s2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_betweenness_normalized_path_graph() {
        let graph = build_undirected_projection(&[(0, 1), (1, 2)]);

        let result = Betweenness::run(
            &graph,
            BetweennessConfig {
                normalize: true,
                ..Default::default()
            },
        )
        .unwrap();
        let map: std::collections::HashMap<_, _> = result.scores.into_iter().collect();

        // 3 nodes: factor 2/((n-1)(n-2)) = 1, so B stays 1.0.
        assert_eq!(map[&node(1)], 1.0);
    }

    #[test]
    fn test_betweenness_zero_workers_is_rejected() {
        let graph = build_undirected_projection(&[(0, 1)]);
        let err = Betweenness::run(
            &graph,
            BetweennessConfig {
                workers: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, AxialError::InvalidArgument { .. }));
    }
}
