// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, Betweenness, BetweennessConfig, BetweennessResult, CentralityResult,
    DegreeCentrality, DegreeConfig, DegreeDirection, DegreeResult, EigenvectorCentrality,
    EigenvectorConfig, EigenvectorResult, PageRank, PageRankConfig, PageRankResult,
    PersonalizedPageRank, PersonalizedPageRankConfig, PersonalizedPageRankResult,
};
pub use algo::power_iteration::{PowerIteration, PowerIterationRun};
pub use algo::projection::{GraphProjection, ProjectionBuilder, ProjectionConfig};
pub use algo::IdMap;
