// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Centrality Algorithm Engine
//!
//! This module computes node-importance scores over any graph exposing the
//! read-only [`GraphView`](axial_common::GraphView) capability.
//!
//! # Architecture
//!
//! Algorithms do not traverse the `GraphView` directly. A
//! [`ProjectionBuilder`](projection::ProjectionBuilder) first materializes a
//! dense CSR snapshot ([`GraphProjection`](projection::GraphProjection)) so
//! the iterative kernels work on array-indexed state:
//!
//! - **PowerIteration**: shared fixed-point kernel behind PageRank,
//!   personalized PageRank, and eigenvector centrality.
//! - **Betweenness**: per-source Brandes passes dispatched across a rayon
//!   worker pool, merged into one shared score vector under a lock.
//! - **Degree**: a single O(V) sweep over the projection.
//!
//! # Example
//!
//! ```ignore
//! use axial_algo::{Algorithm, PageRank, ProjectionBuilder};
//!
//! let projection = ProjectionBuilder::new(&graph).build();
//! let result = PageRank::run(&projection, Default::default())?;
//! ```

mod id_map;
pub mod power_iteration;
pub mod projection;

pub mod algorithms;

pub use id_map::IdMap;
pub use projection::{GraphProjection, ProjectionBuilder, ProjectionConfig};

#[cfg(test)]
pub mod test_utils;
