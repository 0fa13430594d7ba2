//! Strata core library.
//!
//! Hierarchical clustering of edge-weighted undirected graphs: binary
//! partition trees (canonical and linkage-driven), quasi-flat zones
//! hierarchies, tree simplification, and saliency maps. Hierarchies are
//! dense parent-array trees paired with per-node altitudes; the canonical
//! builder additionally yields the minimum spanning tree its merges trace
//! out.
//!
//! All builders are pure functions of their inputs, single-threaded, and
//! deterministic: ties between equal-weight edges always resolve towards the
//! smaller edge id.

mod error;
mod graph;
mod heap;
mod hierarchy;
mod tree;
mod union_find;

pub use crate::{
    error::{HierarchyError, HierarchyErrorCode, Result},
    graph::{MutableGraph, StaticGraph},
    hierarchy::{
        binary_partition_tree, binary_partition_tree_average_linkage,
        binary_partition_tree_complete_linkage, binary_partition_tree_single_linkage,
        bpt_canonical, quasi_flat_zones_hierarchy, saliency_map, simplify_tree, AverageLinkage,
        CanonicalHierarchy, CompleteLinkage, Hierarchy, LinkageWeighter, MergeContext,
        NewNeighbour, SimplifiedTree, SingleLinkage,
    },
    tree::{Inclusion, LcaIndex, Tree},
};

#[cfg(test)]
pub(crate) mod test_utils;
