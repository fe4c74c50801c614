// SPDX-License-Identifier: Apache-2.0
// Copyright 2025-2026 Axial Team

//! Per-algorithm entry points and the fluent builder surface.
//!
//! Every function takes a read-only [`GraphView`], builds the dense
//! projection the engine works on (with reverse edges only when the
//! algorithm needs them), runs the algorithm, and returns the scores in
//! node enumeration order.

use axial_algo::algo::algorithms::{
    Algorithm, Betweenness, BetweennessConfig, CentralityResult, DegreeCentrality, DegreeConfig,
    DegreeDirection, EigenvectorCentrality, EigenvectorConfig, PageRank, PageRankConfig,
    PersonalizedPageRank, PersonalizedPageRankConfig,
};
use axial_algo::algo::ProjectionBuilder;
use axial_common::{GraphView, NodeId, Result};

/// Degree centrality: each node's score is its number of incident edges
/// (undirected) or the configured degree notion (directed).
pub fn degree_centrality<G: GraphView>(graph: &G, config: DegreeConfig) -> Result<CentralityResult> {
    let needs_reverse =
        graph.is_directed() && config.direction != DegreeDirection::Outgoing;
    let projection = ProjectionBuilder::new(graph)
        .include_reverse(needs_reverse)
        .build();
    Ok(DegreeCentrality::run(&projection, config)?.scores)
}

/// Global PageRank with uniform teleportation and dangling-mass
/// redistribution. Scores sum to 1.
pub fn pagerank<G: GraphView>(graph: &G, config: PageRankConfig) -> Result<CentralityResult> {
    let projection = ProjectionBuilder::new(graph).build();
    Ok(PageRank::run(&projection, config)?.scores)
}

/// Personalized PageRank with all teleportation mass on `center`.
///
/// Runs a fixed number of passes (see
/// [`PersonalizedPageRankConfig::num_passes`]) rather than to convergence.
/// Fails if `center` is not in the graph.
pub fn personalized_pagerank<G: GraphView>(
    graph: &G,
    center: NodeId,
    config: PersonalizedPageRankConfig,
) -> Result<CentralityResult> {
    let projection = ProjectionBuilder::new(graph).build();
    let config = PersonalizedPageRankConfig {
        center: Some(center),
        ..config
    };
    Ok(PersonalizedPageRank::run(&projection, config)?.scores)
}

/// Eigenvector centrality via power iteration, L2-normalized.
pub fn eigenvector_centrality<G: GraphView>(
    graph: &G,
    config: EigenvectorConfig,
) -> Result<CentralityResult> {
    let projection = ProjectionBuilder::new(graph).build();
    Ok(EigenvectorCentrality::run(&projection, config)?.scores)
}

/// Betweenness centrality (Brandes'), parallelized across source nodes.
pub fn betweenness_centrality<G: GraphView>(
    graph: &G,
    config: BetweennessConfig,
) -> Result<CentralityResult> {
    let projection = ProjectionBuilder::new(graph).build();
    Ok(Betweenness::run(&projection, config)?.scores)
}

/// Fluent entry point for the centrality algorithms.
///
/// # Example
///
/// ```no_run
/// # use axial::{Algo, NodeId, SimpleGraph};
/// # let graph = SimpleGraph::directed();
/// let scores = Algo::new(&graph)
///     .pagerank()
///     .damping(0.9)
///     .max_iterations(50)
///     .run()?;
/// # Ok::<(), axial::AxialError>(())
/// ```
#[must_use = "builders do nothing until a specific algorithm is selected"]
pub struct Algo<'a, G: GraphView> {
    graph: &'a G,
}

impl<'a, G: GraphView> Algo<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn degree(&self) -> DegreeBuilder<'a, G> {
        DegreeBuilder {
            graph: self.graph,
            config: DegreeConfig::default(),
        }
    }

    pub fn pagerank(&self) -> PageRankBuilder<'a, G> {
        PageRankBuilder {
            graph: self.graph,
            config: PageRankConfig::default(),
        }
    }

    pub fn personalized_pagerank(&self, center: NodeId) -> PersonalizedPageRankBuilder<'a, G> {
        PersonalizedPageRankBuilder {
            graph: self.graph,
            center,
            config: PersonalizedPageRankConfig::default(),
        }
    }

    pub fn eigenvector(&self) -> EigenvectorBuilder<'a, G> {
        EigenvectorBuilder {
            graph: self.graph,
            config: EigenvectorConfig::default(),
        }
    }

    pub fn betweenness(&self) -> BetweennessBuilder<'a, G> {
        BetweennessBuilder {
            graph: self.graph,
            config: BetweennessConfig::default(),
        }
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct DegreeBuilder<'a, G: GraphView> {
    graph: &'a G,
    config: DegreeConfig,
}

impl<G: GraphView> DegreeBuilder<'_, G> {
    pub fn direction(mut self, direction: DegreeDirection) -> Self {
        self.config.direction = direction;
        self
    }

    pub fn run(self) -> Result<CentralityResult> {
        degree_centrality(self.graph, self.config)
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct PageRankBuilder<'a, G: GraphView> {
    graph: &'a G,
    config: PageRankConfig,
}

impl<G: GraphView> PageRankBuilder<'_, G> {
    pub fn damping(mut self, d: f64) -> Self {
        self.config.damping = d;
        self
    }

    pub fn max_iterations(mut self, n: usize) -> Self {
        self.config.max_iterations = n;
        self
    }

    pub fn tolerance(mut self, t: f64) -> Self {
        self.config.tolerance = t;
        self
    }

    pub fn run(self) -> Result<CentralityResult> {
        pagerank(self.graph, self.config)
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct PersonalizedPageRankBuilder<'a, G: GraphView> {
    graph: &'a G,
    center: NodeId,
    config: PersonalizedPageRankConfig,
}

impl<G: GraphView> PersonalizedPageRankBuilder<'_, G> {
    pub fn damping(mut self, d: f64) -> Self {
        self.config.damping = d;
        self
    }

    pub fn num_passes(mut self, n: usize) -> Self {
        self.config.num_passes = n;
        self
    }

    pub fn run(self) -> Result<CentralityResult> {
        personalized_pagerank(self.graph, self.center, self.config)
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct EigenvectorBuilder<'a, G: GraphView> {
    graph: &'a G,
    config: EigenvectorConfig,
}

impl<G: GraphView> EigenvectorBuilder<'_, G> {
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.config.max_iterations = n;
        self
    }

    pub fn tolerance(mut self, t: f64) -> Self {
        self.config.tolerance = t;
        self
    }

    pub fn run(self) -> Result<CentralityResult> {
        eigenvector_centrality(self.graph, self.config)
    }
}

#[must_use = "builders do nothing until .run() is called"]
pub struct BetweennessBuilder<'a, G: GraphView> {
    graph: &'a G,
    config: BetweennessConfig,
}

impl<G: GraphView> BetweennessBuilder<'_, G> {
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = Some(workers);
        self
    }

    pub fn normalize(mut self, enabled: bool) -> Self {
        self.config.normalize = enabled;
        self
    }

    pub fn run(self) -> Result<CentralityResult> {
        betweenness_centrality(self.graph, self.config)
    }
}
