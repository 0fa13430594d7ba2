//! Strategy builders for the hierarchy property tests.
//!
//! Every generated graph is connected and simple: a random spanning tree
//! guarantees connectivity, extra edges are deduplicated against the pairs
//! already present. Sizes stay small enough for the quadratic and cubic
//! oracles in this suite.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count; bounded by the cubic minimax oracle.
const MAX_VERTICES: usize = 18;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 10;

/// Generates connected fixtures covering all three weight distributions,
/// biased towards the tie-heavy `FewLevels` case.
pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Distinct),
        3 => Just(WeightDistribution::FewLevels),
        2 => Just(WeightDistribution::Dense),
    ]
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    match distribution {
        WeightDistribution::Distinct => {
            generate_connected(rng, MAX_VERTICES, 0.25, distribution, continuous_weight)
        }
        WeightDistribution::FewLevels => {
            let level_count = rng.gen_range(2..=4);
            generate_connected(rng, MAX_VERTICES, 0.35, distribution, move |r| {
                f64::from(r.gen_range(1..=level_count))
            })
        }
        WeightDistribution::Dense => {
            generate_connected(rng, DENSE_MAX_VERTICES, 0.9, distribution, continuous_weight)
        }
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1_f64..100.0)
}

/// Builds a connected simple graph: a spanning tree over a random
/// permutation, then extra edges added with probability `extra_probability`
/// per unused vertex pair.
fn generate_connected(
    rng: &mut SmallRng,
    max_vertices: usize,
    extra_probability: f64,
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> GraphFixture {
    let num_vertices = rng.gen_range(MIN_VERTICES..=max_vertices);

    let mut perm: Vec<usize> = (0..num_vertices).collect();
    shuffle(&mut perm, rng);

    let mut present = BTreeSet::new();
    let mut edges = Vec::new();
    for window in perm.windows(2) {
        let pair = canonical(window[0], window[1]);
        present.insert(pair);
        edges.push(pair);
    }

    for u in 0..num_vertices {
        for v in (u + 1)..num_vertices {
            if !present.contains(&(u, v)) && rng.gen_bool(extra_probability) {
                present.insert((u, v));
                edges.push((u, v));
            }
        }
    }

    let weights = (0..edges.len()).map(|_| weight(rng)).collect();
    GraphFixture {
        num_vertices,
        edges,
        weights,
        distribution,
    }
}

/// Returns the pair in canonical order `(min, max)`.
fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
