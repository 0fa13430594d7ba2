//! Parent-array tree representation shared by all hierarchy builders.
//!
//! A tree over `N` nodes is a parent array `p` where leaves occupy the dense
//! prefix `[0, num_leaves)`, inner nodes follow, `p[i] > i` for every
//! non-root node, and the root is the last node with `p[root] == root`. The
//! builders produce such arrays directly; [`Tree::new`] validates them so
//! hand-built trees go through the same gate.
//!
//! Children are derived once at construction into a CSR-style reverse index;
//! traversal in either direction is a walk over the id range, which the
//! parent-ordering invariant makes topological.

mod lca;

use std::sync::OnceLock;

use crate::error::{HierarchyError, Result};

pub use self::lca::LcaIndex;

/// Whether a traversal yields the boundary nodes (leaves or root).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Inclusion {
    /// Yield the nodes in question.
    Include,
    /// Skip the nodes in question.
    Exclude,
}

/// A rooted tree stored as a validated parent array.
#[derive(Debug)]
pub struct Tree {
    parents: Vec<usize>,
    num_leaves: usize,
    child_starts: Vec<usize>,
    child_ids: Vec<usize>,
    lca: OnceLock<LcaIndex>,
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        Self {
            parents: self.parents.clone(),
            num_leaves: self.num_leaves,
            child_starts: self.child_starts.clone(),
            child_ids: self.child_ids.clone(),
            lca: OnceLock::new(),
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.parents == other.parents
    }
}

impl Tree {
    /// Builds a tree from a parent array, validating its structure.
    ///
    /// # Errors
    /// Returns [`HierarchyError::MalformedParentArray`] when the array is
    /// empty, a parent reference is out of bounds or not strictly greater
    /// than its child, the last node is not the unique self-parented root,
    /// or the childless nodes do not form a dense prefix.
    pub fn new(parents: Vec<usize>) -> Result<Self> {
        let num_nodes = parents.len();
        if num_nodes == 0 {
            return Err(HierarchyError::MalformedParentArray {
                node: 0,
                reason: "parent array is empty",
            });
        }
        let root = num_nodes - 1;
        if parents[root] != root {
            return Err(HierarchyError::MalformedParentArray {
                node: root,
                reason: "last node must be its own parent",
            });
        }
        for (node, &parent) in parents.iter().enumerate().take(root) {
            if parent >= num_nodes {
                return Err(HierarchyError::MalformedParentArray {
                    node,
                    reason: "parent reference is out of bounds",
                });
            }
            if parent <= node {
                return Err(HierarchyError::MalformedParentArray {
                    node,
                    reason: "parent must be strictly greater than its child",
                });
            }
        }

        let (child_starts, child_ids) = build_children_index(&parents, root);

        let num_leaves = (0..num_nodes)
            .take_while(|&node| child_starts[node] == child_starts[node + 1])
            .count();
        let childless = (0..num_nodes)
            .filter(|&node| child_starts[node] == child_starts[node + 1])
            .count();
        if childless != num_leaves {
            return Err(HierarchyError::MalformedParentArray {
                node: num_leaves,
                reason: "childless nodes must form a dense prefix",
            });
        }

        Ok(Self {
            parents,
            num_leaves,
            child_starts,
            child_ids,
            lca: OnceLock::new(),
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_nodes(&self) -> usize { self.parents.len() }

    /// Returns the number of leaves.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_leaves(&self) -> usize { self.num_leaves }

    /// Returns the root node id.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.parents.len() - 1 }

    /// Returns the parent of `node`; the root is its own parent.
    #[must_use]
    pub fn parent(&self, node: usize) -> usize {
        self.parents[node]
    }

    /// Returns the full parent array.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Returns `true` when `node` is a leaf.
    #[must_use]
    pub fn is_leaf(&self, node: usize) -> bool {
        node < self.num_leaves
    }

    /// Returns `true` when `node` is the root.
    #[must_use]
    pub fn is_root(&self, node: usize) -> bool {
        node == self.root()
    }

    /// Returns the children of `node`, ascending by id.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.child_ids[self.child_starts[node]..self.child_starts[node + 1]]
    }

    /// Iterates node ids from the leaves towards the root.
    ///
    /// The parent-ordering invariant guarantees every node is yielded before
    /// its parent.
    pub fn leaves_to_root(
        &self,
        leaves: Inclusion,
        root: Inclusion,
    ) -> impl DoubleEndedIterator<Item = usize> {
        let start = match leaves {
            Inclusion::Include => 0,
            Inclusion::Exclude => self.num_leaves,
        };
        let end = match root {
            Inclusion::Include => self.num_nodes(),
            Inclusion::Exclude => self.num_nodes() - 1,
        };
        start..end
    }

    /// Iterates node ids from the root towards the leaves.
    ///
    /// Every node is yielded after its parent.
    pub fn root_to_leaves(
        &self,
        leaves: Inclusion,
        root: Inclusion,
    ) -> impl DoubleEndedIterator<Item = usize> {
        self.leaves_to_root(leaves, root).rev()
    }

    /// Returns the lowest-common-ancestor index, building it on first use.
    ///
    /// The index is cached for the lifetime of the tree; clones start with a
    /// cold cache.
    #[must_use]
    pub fn lca_index(&self) -> &LcaIndex {
        self.lca.get_or_init(|| LcaIndex::new(self))
    }
}

/// Builds the CSR children index: counting pass, prefix sums, fill pass.
fn build_children_index(parents: &[usize], root: usize) -> (Vec<usize>, Vec<usize>) {
    let num_nodes = parents.len();
    let mut counts = vec![0usize; num_nodes];
    for (node, &parent) in parents.iter().enumerate() {
        if node != root {
            counts[parent] += 1;
        }
    }

    let mut child_starts = vec![0usize; num_nodes + 1];
    for node in 0..num_nodes {
        child_starts[node + 1] = child_starts[node] + counts[node];
    }

    let mut cursor = child_starts.clone();
    let mut child_ids = vec![0usize; num_nodes - 1];
    for (node, &parent) in parents.iter().enumerate() {
        if node != root {
            child_ids[cursor[parent]] = node;
            cursor[parent] += 1;
        }
    }

    (child_starts, child_ids)
}
