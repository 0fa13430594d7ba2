//! Quasi-flat zones hierarchy.
//!
//! For a threshold lambda, the lambda-connected components of an
//! edge-weighted graph are the maximal vertex sets connected by edges of
//! weight at most lambda; the quasi-flat zones hierarchy stacks these
//! partitions for every lambda occurring in the weights. It is the canonical
//! binary partition tree with the redundant nodes collapsed: an inner node
//! whose altitude equals its parent's adds no new threshold and is deleted.

use tracing::instrument;

use crate::error::Result;
use crate::graph::StaticGraph;

use super::{bpt_canonical, simplify_tree, Hierarchy};

/// Builds the quasi-flat zones hierarchy of `graph`.
///
/// The result depends only on the level sets of `edge_weights`: the
/// canonical tree and the quasi-flat zones tree of the same input induce the
/// same saliency map.
///
/// # Errors
/// As for [`bpt_canonical`].
#[instrument(skip_all, fields(num_vertices = graph.num_vertices(), num_edges = graph.num_edges()))]
pub fn quasi_flat_zones_hierarchy(
    graph: &StaticGraph,
    edge_weights: &[f64],
) -> Result<Hierarchy> {
    let canonical = bpt_canonical(graph, edge_weights)?;
    let tree = canonical.tree();
    let altitudes = canonical.altitudes();

    let plateau = |node: usize| altitudes[node] == altitudes[tree.parent(node)];
    let (qfz_tree, node_map) = simplify_tree(tree, plateau)?.into_parts();

    let qfz_altitudes = node_map.iter().map(|&node| altitudes[node]).collect();
    Ok(Hierarchy::new(qfz_tree, qfz_altitudes))
}
