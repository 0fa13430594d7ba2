//! Predicate-driven removal of inner tree nodes.
//!
//! Deleting a node splices its children onto its parent. Because every
//! parent id exceeds its child's, a root-to-leaves sweep resolves each
//! node's parent to its final surviving ancestor before the node itself is
//! examined; a second leaves-to-root sweep renumbers the survivors into a
//! dense array.

use crate::error::Result;
use crate::tree::{Inclusion, Tree};

/// A simplified tree plus the map from its node ids back to the source tree.
#[derive(Clone, Debug)]
pub struct SimplifiedTree {
    tree: Tree,
    node_map: Vec<usize>,
}

impl SimplifiedTree {
    /// Returns the simplified tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns, for each surviving node, its id in the source tree. The map
    /// is strictly increasing except for the final root entry.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_map(&self) -> &[usize] { &self.node_map }

    /// Decomposes into the tree and the node map.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<usize>) {
        (self.tree, self.node_map)
    }
}

/// Copies `tree` without the inner nodes matching `delete`.
///
/// The predicate is consulted once per inner node; leaves and the root are
/// never deleted. Leaf ids are preserved in the simplified tree.
///
/// # Errors
/// Returns an error only when an internal invariant is violated; deleting
/// any subset of inner nodes from a valid tree yields a valid tree.
pub fn simplify_tree<F>(tree: &Tree, mut delete: F) -> Result<SimplifiedTree>
where
    F: FnMut(usize) -> bool,
{
    let num_nodes = tree.num_nodes();
    let mut parent: Vec<usize> = tree.parents().to_vec();
    let mut removed = vec![false; num_nodes];
    // Number of deletions seen at or after each node in the sweep.
    let mut deleted_after = vec![0usize; num_nodes];
    let mut deleted = 0usize;

    for node in tree.root_to_leaves(Inclusion::Exclude, Inclusion::Exclude) {
        if delete(node) {
            removed[node] = true;
            let target = parent[node];
            for &child in tree.children(node) {
                parent[child] = target;
            }
            deleted += 1;
        }
        deleted_after[node] = deleted;
    }

    let survivors = num_nodes - deleted;
    let mut new_parent: Vec<usize> = (0..survivors).collect();
    let mut node_map = vec![0usize; survivors];
    let mut count = 0usize;

    for node in tree.leaves_to_root(Inclusion::Include, Inclusion::Exclude) {
        if removed[node] {
            continue;
        }
        let target = parent[node];
        // The sweep ran in descending id order, so this is the number of
        // deleted nodes with ids below `target`.
        let shift = deleted - deleted_after[target];
        new_parent[count] = target - shift;
        node_map[count] = node;
        count += 1;
    }
    node_map[survivors - 1] = tree.root();

    let tree = Tree::new(new_parent)?;
    Ok(SimplifiedTree { tree, node_map })
}
