//! Hierarchy construction over edge-weighted graphs.
//!
//! Two builders produce rooted hierarchies whose leaves are the graph
//! vertices:
//!
//! - [`bpt_canonical`] merges edges in ascending weight order, Kruskal-style,
//!   and also yields the minimum spanning tree the merges traced out.
//! - [`binary_partition_tree`] repeatedly fuses the cheapest edge and asks a
//!   [`LinkageWeighter`] to re-weight the edges incident to the merged
//!   region, which expresses single-, complete-, and average-linkage
//!   agglomerative clustering.
//!
//! On top of these sit [`simplify_tree`] (predicate-driven removal of inner
//! nodes), [`quasi_flat_zones_hierarchy`] (the canonical tree with
//! plateau-collapsed nodes), and [`saliency_map`] (the edge weighting that
//! recovers a hierarchy through lowest-common-ancestor lookups).
//!
//! Both builders reject empty or disconnected inputs and non-finite weights;
//! callers holding a multi-component graph should split it into connected
//! components first.

mod canonical;
mod linkage;
mod partition;
mod quasi_flat;
mod saliency;
mod simplify;

use crate::error::{HierarchyError, Result};
use crate::graph::StaticGraph;
use crate::tree::Tree;

pub use self::canonical::{bpt_canonical, CanonicalHierarchy};
pub use self::linkage::{
    AverageLinkage, CompleteLinkage, LinkageWeighter, MergeContext, NewNeighbour, SingleLinkage,
};
pub use self::partition::{
    binary_partition_tree, binary_partition_tree_average_linkage,
    binary_partition_tree_complete_linkage, binary_partition_tree_single_linkage,
};
pub use self::quasi_flat::quasi_flat_zones_hierarchy;
pub use self::saliency::saliency_map;
pub use self::simplify::{simplify_tree, SimplifiedTree};

/// A hierarchy: a tree over the graph vertices plus one altitude per node.
///
/// Leaf altitudes are zero; altitudes never decrease along a leaf-to-root
/// path.
#[derive(Clone, Debug, PartialEq)]
pub struct Hierarchy {
    tree: Tree,
    altitudes: Vec<f64>,
}

impl Hierarchy {
    pub(crate) fn new(tree: Tree, altitudes: Vec<f64>) -> Self {
        debug_assert_eq!(tree.num_nodes(), altitudes.len());
        Self { tree, altitudes }
    }

    /// Returns the hierarchy tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the altitude of every tree node.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitudes(&self) -> &[f64] { &self.altitudes }

    /// Decomposes the hierarchy into its tree and altitudes.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f64>) {
        (self.tree, self.altitudes)
    }
}

/// Checks that `weights` is one finite value per graph edge.
pub(crate) fn validate_edge_weights(
    num_edges: usize,
    weights: &[f64],
    what: &'static str,
) -> Result<()> {
    if weights.len() != num_edges {
        return Err(HierarchyError::ShapeMismatch {
            what,
            expected: num_edges,
            got: weights.len(),
        });
    }
    for (edge, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(HierarchyError::InvalidWeight { what, edge, value });
        }
    }
    Ok(())
}

/// Checks the graph is non-empty before a builder commits to `2n - 1` nodes.
pub(crate) fn validate_graph(graph: &StaticGraph) -> Result<()> {
    if graph.num_vertices() == 0 {
        return Err(HierarchyError::EmptyGraph);
    }
    Ok(())
}


#[cfg(test)]
mod property;
