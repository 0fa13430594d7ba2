//! Fixture types shared by the hierarchy property tests.

use crate::graph::StaticGraph;

/// Weight distribution of a generated fixture.
///
/// `FewLevels` is the most important stress case: large groups of
/// equal-weight edges exercise the deterministic tie-breaking and the
/// plateau collapsing of the quasi-flat zones hierarchy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Continuous weights, ties only by floating-point coincidence.
    Distinct,
    /// Weights drawn from a pool of a handful of integer levels.
    FewLevels,
    /// Near-complete topology with continuous weights.
    Dense,
}

/// A connected weighted graph fixture.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) num_vertices: usize,
    pub(super) edges: Vec<(usize, usize)>,
    pub(super) weights: Vec<f64>,
    pub(super) distribution: WeightDistribution,
}

impl GraphFixture {
    pub(super) fn graph(&self) -> StaticGraph {
        let mut graph = StaticGraph::new(self.num_vertices);
        for &(u, v) in &self.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}
