//! Strategy builders for MST property-based tests.
//!
//! Each generator produces an [`MstFixture`] whose edge triples are valid
//! [`crate::Graph::add_edge`] inputs. Some generators deliberately repeat a
//! pair in reversed orientation so the upsert path is exercised too.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Maximum vertex count for graphs checked by exhaustive enumeration.
const TINY_MAX_VERTICES: usize = 8;
/// Maximum number of distinct edges in graphs checked by exhaustive enumeration.
const TINY_MAX_EDGES: usize = 12;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates fixtures small enough for exhaustive spanning-forest enumeration.
pub(super) fn tiny_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_tiny(&mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
        2 => Just(WeightDistribution::Tiny),
    ]
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            random_graph(rng, MAX_VERTICES, (0.2, 0.6), distribution, |r| {
                r.gen_range(1..1_000_000)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_graph(rng, MAX_VERTICES, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            random_graph(rng, DENSE_MAX_VERTICES, (0.7, 0.95), distribution, |r| {
                r.gen_range(-50..500)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Tiny => generate_tiny(rng),
    }
}

/// Adds each unordered pair with a probability drawn from `edge_prob_range`.
fn random_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(i, j, w, rng));
            }
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning path, then adds extra edges that may repeat
/// existing pairs with new weights.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, Weight)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..100)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            let w = rng.gen_range(1..100);
            edges.push(oriented(i, j, w, rng));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Generates 2-5 components of 1-12 vertices with no cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let probability: f64 = rng.gen_range(0.3..=0.8);
        let start = edges.len();
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let w = rng.gen_range(1..100);
                    edges.push(oriented(i, j, w, rng));
                }
            }
        }
        if size >= 2 && edges.len() == start {
            edges.push((offset, offset + 1, rng.gen_range(1..100)));
        }
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Generates at most [`TINY_MAX_VERTICES`] vertices joined by at most
/// [`TINY_MAX_EDGES`] distinct pairs with small, frequently tied weights.
fn generate_tiny(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(1..=TINY_MAX_VERTICES);
    let mut pairs: Vec<(usize, usize)> = (0..vertex_count)
        .flat_map(|i| ((i + 1)..vertex_count).map(move |j| (i, j)))
        .collect();
    shuffle(&mut pairs, rng);
    let keep = rng.gen_range(0..=pairs.len().min(TINY_MAX_EDGES));
    pairs.truncate(keep);

    let edges = pairs
        .into_iter()
        .map(|(i, j)| {
            let w = rng.gen_range(-3..10);
            oriented(i, j, w, rng)
        })
        .collect();

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Tiny,
    }
}

/// Returns the pair in a random orientation so canonicalisation is exercised.
fn oriented(i: usize, j: usize, weight: Weight, rng: &mut SmallRng) -> (usize, usize, Weight) {
    if rng.gen_bool(0.5) {
        (i, j, weight)
    } else {
        (j, i, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
