//! Seeded synthetic inputs for benchmarks.
//!
//! Every generator takes an explicit seed so repeated runs measure the same
//! graph.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spantree_core::{Graph, Point, Weight, graph_from_points};

use crate::error::BenchSetupError;

/// Configuration for [`uniform_points`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Points are drawn uniformly from `[0, extent)` on both axes.
    pub extent: f64,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generates `config.point_count` points uniformly inside a square.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `point_count` is zero or the
/// extent is not a positive finite number.
pub fn uniform_points(config: &SyntheticConfig) -> Result<Vec<Point>, BenchSetupError> {
    if config.point_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "point_count",
        });
    }
    if !config.extent.is_finite() || config.extent <= 0.0 {
        return Err(BenchSetupError::ZeroValue { context: "extent" });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..config.extent),
                rng.gen_range(0.0..config.extent),
            )
        })
        .collect())
}

/// Builds the complete Euclidean graph over [`uniform_points`].
///
/// # Errors
/// Propagates generator and graph construction failures.
pub fn point_cloud_graph(config: &SyntheticConfig) -> Result<Graph, BenchSetupError> {
    let points = uniform_points(config)?;
    Ok(graph_from_points(&points)?)
}

/// Builds a connected sparse graph: a shuffled spanning path plus
/// `extra_edges` random pairs, all with weights in `1..1000`.
///
/// Random pairs that repeat an existing edge reweight it, so the stored edge
/// count may be lower than `vertex_count - 1 + extra_edges`.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `vertex_count` is zero.
pub fn sparse_graph(
    vertex_count: usize,
    extra_edges: usize,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        if let [u, v] = *pair {
            graph.add_edge(u, v, random_weight(&mut rng))?;
        }
    }

    if vertex_count > 1 {
        let mut added = 0;
        while added < extra_edges {
            let u = rng.gen_range(0..vertex_count);
            let v = rng.gen_range(0..vertex_count);
            if u != v {
                graph.add_edge(u, v, random_weight(&mut rng))?;
                added += 1;
            }
        }
    }
    Ok(graph)
}

fn random_weight(rng: &mut SmallRng) -> Weight {
    rng.gen_range(1..1000)
}
