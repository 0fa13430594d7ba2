//! Saliency map of a hierarchy over a graph.
//!
//! The saliency of an edge `{u, v}` is the altitude of the lowest common
//! ancestor of `u` and `v` in the hierarchy: the threshold at which the two
//! vertices first fall into the same region. The map characterises the
//! hierarchy; two hierarchies with equal saliency maps describe the same
//! nested partitions.

use crate::error::{HierarchyError, Result};
use crate::graph::StaticGraph;
use crate::tree::Tree;

/// Computes the saliency map of `(tree, altitudes)` over the edges of
/// `graph`.
///
/// The output has one entry per graph edge, in edge-id order. The tree's
/// LCA index is built on first use and cached, so repeated calls over the
/// same tree pay the construction cost once.
///
/// # Errors
/// Returns [`HierarchyError::ShapeMismatch`] when `altitudes` does not have
/// one entry per tree node or the tree's leaves do not match the graph's
/// vertices.
pub fn saliency_map(graph: &StaticGraph, tree: &Tree, altitudes: &[f64]) -> Result<Vec<f64>> {
    if altitudes.len() != tree.num_nodes() {
        return Err(HierarchyError::ShapeMismatch {
            what: "altitudes",
            expected: tree.num_nodes(),
            got: altitudes.len(),
        });
    }
    if tree.num_leaves() != graph.num_vertices() {
        return Err(HierarchyError::ShapeMismatch {
            what: "tree leaves",
            expected: graph.num_vertices(),
            got: tree.num_leaves(),
        });
    }

    let lca = tree.lca_index();
    Ok((0..graph.num_edges())
        .map(|edge| {
            let (u, v) = graph.endpoints(edge);
            altitudes[lca.query(u, v)]
        })
        .collect())
}
