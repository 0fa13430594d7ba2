//! General binary partition tree: heap-driven agglomerative clustering.
//!
//! The builder keeps a working copy of the graph and a mergeable heap with
//! one entry per live edge. Each round pops the cheapest live edge, fuses
//! its endpoints into a fresh vertex, collects the neighbours of the pair,
//! asks the [`LinkageWeighter`] for new weights, collapses parallel edges,
//! and rewires the survivors onto the merged vertex.
//!
//! Removed edges are left in the heap and skipped lazily through the
//! `active` flags when they surface; this keeps removal O(1) at the price of
//! dead entries.

use tracing::{debug, instrument};

use crate::error::{HierarchyError, Result};
use crate::graph::{MutableGraph, StaticGraph};
use crate::heap::{EdgeKey, MergeableHeap};
use crate::tree::Tree;

use super::linkage::{
    AverageLinkage, CompleteLinkage, LinkageWeighter, MergeContext, NewNeighbour, SingleLinkage,
};
use super::{validate_edge_weights, validate_graph, Hierarchy};

/// Builds a binary partition tree by iterated cheapest-edge fusion.
///
/// The initial `edge_weights` and the `weighter` between them determine the
/// shape of the hierarchy: see [`SingleLinkage`], [`CompleteLinkage`], and
/// [`AverageLinkage`], or implement [`LinkageWeighter`] for a custom policy.
/// Ties between equal-weight edges resolve towards the smaller edge id.
///
/// # Errors
/// Returns [`HierarchyError::EmptyGraph`] for a graph without vertices,
/// [`HierarchyError::ShapeMismatch`] / [`HierarchyError::InvalidWeight`] for
/// malformed edge weights, and [`HierarchyError::DisconnectedGraph`] when
/// the heap drains before the vertices are merged into a single region.
/// Callers may pre-split connected components to avoid the latter.
#[instrument(skip_all, fields(num_vertices = graph.num_vertices(), num_edges = graph.num_edges()))]
pub fn binary_partition_tree<W: LinkageWeighter>(
    graph: &StaticGraph,
    edge_weights: &[f64],
    mut weighter: W,
) -> Result<Hierarchy> {
    validate_graph(graph)?;
    validate_edge_weights(graph.num_edges(), edge_weights, "edge weights")?;

    let num_points = graph.num_vertices();
    let num_edges = graph.num_edges();
    let num_nodes = num_points * 2 - 1;
    let merges_needed = num_points - 1;

    let mut working = MutableGraph::from_graph(graph);
    let mut parents: Vec<usize> = (0..num_nodes).collect();
    let mut altitudes = vec![0.0; num_nodes];

    // Live edges are present in the working graph; removed edges stay in the
    // heap until popped and are then skipped.
    let mut active = vec![true; num_edges];
    let mut heap = MergeableHeap::with_capacity(num_edges);
    let handles: Vec<_> = (0..num_edges)
        .map(|edge| {
            heap.push(EdgeKey {
                weight: edge_weights[edge],
                edge,
            })
        })
        .collect();

    // Scratch index into `neighbours`, reset after every collection pass.
    let mut neighbour_slot: Vec<Option<usize>> = vec![None; num_nodes];
    let mut neighbours: Vec<NewNeighbour> = Vec::new();
    let mut merges = 0;

    while merges < merges_needed {
        let Some(top) = heap.top() else { break };
        let key = heap.key(top);
        heap.pop();
        let fusion_edge = key.edge;
        if !active[fusion_edge] {
            continue;
        }
        active[fusion_edge] = false;

        let (left, right) =
            working
                .endpoints(fusion_edge)
                .ok_or(HierarchyError::InvariantViolation {
                    invariant: "active edge must be present in the working graph",
                    index: fusion_edge,
                })?;
        let merged = working.add_vertex();
        parents[left] = merged;
        parents[right] = merged;
        altitudes[merged] = key.weight;
        merges += 1;
        working.remove_edge(fusion_edge);

        collect_neighbours(
            &working,
            [left, right],
            &mut neighbour_slot,
            &mut neighbours,
        );

        if neighbours.is_empty() {
            continue;
        }
        let context = MergeContext {
            fusion_edge,
            merged,
            left,
            right,
        };
        weighter.reweight(&working, &context, &mut neighbours);

        for record in &neighbours {
            if let Some(second) = record.second_edge() {
                active[second] = false;
                working.remove_edge(second);
            }
            let survivor = record.first_edge();
            if !working.set_edge(survivor, record.neighbour(), merged) {
                return Err(HierarchyError::InvariantViolation {
                    invariant: "surviving edge must be present in the working graph",
                    index: survivor,
                });
            }
            heap.update(
                handles[survivor],
                EdgeKey {
                    weight: record.new_weight(),
                    edge: survivor,
                },
            );
            active[survivor] = true;
        }
    }

    debug_assert!(
        neighbour_slot.iter().all(Option::is_none),
        "neighbour scratch must be reset between merges"
    );

    if merges < merges_needed {
        return Err(HierarchyError::DisconnectedGraph {
            merges,
            required: merges_needed,
        });
    }
    debug!(merges, "agglomeration complete");

    let tree = Tree::new(parents)?;
    Ok(Hierarchy::new(tree, altitudes))
}

/// Gathers the distinct neighbours of the two fused regions.
///
/// A neighbour adjacent to both regions yields a single record carrying
/// both edges. The scratch `neighbour_slot` entries touched here are cleared
/// again before returning.
fn collect_neighbours(
    working: &MutableGraph,
    regions: [usize; 2],
    neighbour_slot: &mut [Option<usize>],
    neighbours: &mut Vec<NewNeighbour>,
) {
    neighbours.clear();
    for region in regions {
        for edge in working.incident_edges(region) {
            let Some(neighbour) = working.other_endpoint(edge, region) else {
                continue;
            };
            match neighbour_slot[neighbour] {
                Some(slot) => neighbours[slot].set_second_edge(edge),
                None => {
                    neighbour_slot[neighbour] = Some(neighbours.len());
                    neighbours.push(NewNeighbour::new(neighbour, edge));
                }
            }
        }
    }
    for record in neighbours.iter() {
        neighbour_slot[record.neighbour()] = None;
    }
}

/// Builds the single-linkage binary partition tree of `graph`.
///
/// The canonical builder ([`super::bpt_canonical`]) produces the same
/// hierarchy more efficiently; this entry point exists for symmetry with the
/// other linkage policies.
///
/// # Errors
/// As for [`binary_partition_tree`].
pub fn binary_partition_tree_single_linkage(
    graph: &StaticGraph,
    edge_weights: &[f64],
) -> Result<Hierarchy> {
    binary_partition_tree(graph, edge_weights, SingleLinkage::new(edge_weights.to_vec()))
}

/// Builds the complete-linkage binary partition tree of `graph`.
///
/// # Errors
/// As for [`binary_partition_tree`].
pub fn binary_partition_tree_complete_linkage(
    graph: &StaticGraph,
    edge_weights: &[f64],
) -> Result<Hierarchy> {
    binary_partition_tree(
        graph,
        edge_weights,
        CompleteLinkage::new(edge_weights.to_vec()),
    )
}

/// Builds the average-linkage binary partition tree of `graph`.
///
/// `edge_values` seeds both the heap and the running averages; `edge_masses`
/// weighs each value's contribution when parallel edges collapse.
///
/// # Errors
/// As for [`binary_partition_tree`], plus [`HierarchyError::ShapeMismatch`]
/// and [`HierarchyError::InvalidWeight`] for malformed masses.
pub fn binary_partition_tree_average_linkage(
    graph: &StaticGraph,
    edge_values: &[f64],
    edge_masses: &[f64],
) -> Result<Hierarchy> {
    let weighter = AverageLinkage::new(edge_values.to_vec(), edge_masses.to_vec())?;
    binary_partition_tree(graph, edge_values, weighter)
}
