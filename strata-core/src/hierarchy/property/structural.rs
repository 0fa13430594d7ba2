//! Structural invariant checks shared by the property runners.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::tree::Tree;

/// Checks the binary-partition-tree shape invariants: `2n - 1` nodes, the
/// graph vertices as leaves, a single self-parented root in the last slot,
/// and strictly increasing parent ids.
pub(super) fn check_tree_shape(num_vertices: usize, tree: &Tree) -> TestCaseResult {
    prop_assert_eq!(tree.num_nodes(), num_vertices * 2 - 1);
    prop_assert_eq!(tree.num_leaves(), num_vertices);

    let root = tree.root();
    prop_assert_eq!(tree.parent(root), root);
    for node in 0..tree.num_nodes() {
        if node != root {
            prop_assert!(
                tree.parent(node) > node,
                "parent {} of node {} does not come after it",
                tree.parent(node),
                node
            );
        }
    }
    Ok(())
}

/// Checks that leaves sit at altitude zero and altitudes never decrease
/// towards the root.
pub(super) fn check_altitude_monotonicity(tree: &Tree, altitudes: &[f64]) -> TestCaseResult {
    prop_assert_eq!(altitudes.len(), tree.num_nodes());
    for leaf in 0..tree.num_leaves() {
        prop_assert_eq!(altitudes[leaf], 0.0);
    }
    for node in 0..tree.num_nodes() {
        prop_assert!(
            altitudes[tree.parent(node)] >= altitudes[node],
            "altitude decreases from node {} to its parent",
            node
        );
    }
    Ok(())
}
