//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::{Graph, Weight};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge draws its weight from a wide range, so ties are rare.
    Unique,
    /// Large groups of edges share identical weights, stressing tie handling.
    ManyIdentical,
    /// Random spanning path plus a handful of extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// At most eight vertices, small enough for exhaustive enumeration.
    Tiny,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, the raw edge triples fed to
/// [`Graph::add_edge`] (which may repeat a pair in either orientation), and
/// the distribution used during generation.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edge triples in insertion order.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the graph described by the fixture.
    ///
    /// Generated edges never contain self-loops or out-of-range endpoints, so
    /// every insertion succeeds.
    pub(super) fn graph(&self) -> Graph {
        let mut graph = Graph::new(self.vertex_count).expect("fixtures have at least one vertex");
        for &(u, v, weight) in &self.edges {
            graph
                .add_edge(u, v, weight)
                .expect("fixture edges must be valid");
        }
        graph
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}
