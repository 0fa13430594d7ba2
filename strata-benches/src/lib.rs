//! Fixture helpers shared by the strata benchmarks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strata_core::StaticGraph;

/// Builds the 4-adjacency graph of a square grid with `side * side`
/// vertices, numbering vertices row-major and edges in raster order.
#[must_use]
pub fn square_grid_graph(side: usize) -> StaticGraph {
    let mut graph = StaticGraph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let vertex = row * side + col;
            if col + 1 < side {
                graph.add_edge(vertex, vertex + 1);
            }
            if row + 1 < side {
                graph.add_edge(vertex, vertex + side);
            }
        }
    }
    graph
}

/// Generates one integer-valued weight per graph edge from a fixed seed.
///
/// Integer levels keep plenty of ties in play, which is the interesting
/// regime for the tie-breaking and plateau-collapsing code paths.
#[must_use]
pub fn seeded_weights(graph: &StaticGraph, seed: u64, levels: u32) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..graph.num_edges())
        .map(|_| f64::from(rng.gen_range(0..levels)))
        .collect()
}
