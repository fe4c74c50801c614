// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Shared fixed-point kernel for the power-iteration family.
//!
//! PageRank, personalized PageRank, and eigenvector centrality all repeat a
//! linear update of a score vector until it stabilizes or an iteration
//! budget runs out. The loop lives here once; each algorithm plugs in its
//! update rule as a full-sweep closure.

/// Power-iteration driver.
///
/// The score vector starts uniform (1/N per node). Each iteration calls the
/// update rule with the current vector and a scratch buffer for the next
/// one, then measures the L1 difference between the two. With a tolerance
/// set, iteration stops early once the difference falls below it; with
/// `tolerance: None` the full budget is spent (the fixed-pass simulation
/// mode used by personalized PageRank). Non-convergence at the cap is not
/// an error; the best available vector is returned.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Hard cap on update sweeps.
    pub max_iterations: usize,
    /// L1 convergence threshold; `None` disables the convergence test.
    pub tolerance: Option<f64>,
}

/// Outcome of a power-iteration run.
///
/// `iterations` and `converged` are informational; callers that need
/// convergence confidence inspect them, nothing is signalled otherwise.
#[derive(Debug, Clone)]
pub struct PowerIterationRun {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl PowerIteration {
    /// Run the iteration over `n` nodes with the given full-sweep rule.
    ///
    /// The rule computes the entire next vector from the current one; it is
    /// responsible for any per-sweep normalization it needs.
    pub fn run<F>(&self, n: usize, mut step: F) -> PowerIterationRun
    where
        F: FnMut(&[f64], &mut [f64]),
    {
        if n == 0 {
            return PowerIterationRun {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..self.max_iterations {
            iterations = iter + 1;

            step(&scores, &mut next);

            let diff: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);

            if let Some(tolerance) = self.tolerance
                && diff < tolerance
            {
                converged = true;
                break;
            }
        }

        PowerIterationRun {
            scores,
            iterations,
            converged,
        }
    }
}
