//! Canonical binary partition tree: Kruskal by altitude ordering.
//!
//! Edges are scanned in ascending weight order (stable, so ties resolve by
//! edge id); every merge of two components allocates the next inner node and
//! contributes one edge to the minimum spanning tree. The resulting tree,
//! the MST, and the map from MST edges back to input edges all describe the
//! same sequence of merges.

use tracing::instrument;

use crate::error::{HierarchyError, Result};
use crate::graph::StaticGraph;
use crate::tree::Tree;
use crate::union_find::DisjointSet;

use super::{validate_edge_weights, validate_graph};

/// The canonical hierarchy together with the minimum spanning tree it
/// traced out.
#[derive(Clone, Debug)]
pub struct CanonicalHierarchy {
    tree: Tree,
    altitudes: Vec<f64>,
    mst: StaticGraph,
    mst_edge_map: Vec<usize>,
}

impl CanonicalHierarchy {
    /// Returns the hierarchy tree; node `n + k` is the `k`-th merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Tree { &self.tree }

    /// Returns the altitude of every tree node. Leaves sit at zero; inner
    /// node altitudes are the weights of the merging edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitudes(&self) -> &[f64] { &self.altitudes }

    /// Returns the minimum spanning tree, with edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst(&self) -> &StaticGraph { &self.mst }

    /// Returns, for each MST edge, the id of the input edge it came from.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edge_map(&self) -> &[usize] { &self.mst_edge_map }
}

/// Builds the binary partition tree by altitude ordering of `graph`.
///
/// The returned tree has `2n - 1` nodes for a graph of `n` vertices: leaves
/// `[0, n)` are the graph vertices and inner node `n + k` is born from the
/// `k`-th selected edge. Ties between equal-weight edges resolve towards the
/// smaller edge id, so the construction is deterministic.
///
/// # Errors
/// Returns [`HierarchyError::EmptyGraph`] for a graph without vertices,
/// [`HierarchyError::ShapeMismatch`] / [`HierarchyError::InvalidWeight`] for
/// malformed edge weights, and [`HierarchyError::DisconnectedGraph`] when
/// the edges do not span the vertices. Callers may pre-split connected
/// components to avoid the latter.
#[instrument(skip_all, fields(num_vertices = graph.num_vertices(), num_edges = graph.num_edges()))]
pub fn bpt_canonical(graph: &StaticGraph, edge_weights: &[f64]) -> Result<CanonicalHierarchy> {
    validate_graph(graph)?;
    validate_edge_weights(graph.num_edges(), edge_weights, "edge weights")?;

    let num_points = graph.num_vertices();
    let num_mst_edges = num_points - 1;
    let num_nodes = num_points * 2 - 1;

    let mut order: Vec<usize> = (0..graph.num_edges()).collect();
    order.sort_by(|&a, &b| edge_weights[a].total_cmp(&edge_weights[b]));

    let mut dsu = DisjointSet::new(num_points);
    // Current tree node of each component, indexed by representative.
    let mut roots: Vec<usize> = (0..num_points).collect();
    let mut parents: Vec<usize> = (0..num_nodes).collect();
    let mut altitudes = vec![0.0; num_nodes];

    let mut mst = StaticGraph::new(num_points);
    let mut mst_edge_map = Vec::with_capacity(num_mst_edges);
    let mut next_node = num_points;

    for &edge in &order {
        if mst_edge_map.len() == num_mst_edges {
            break;
        }
        let (u, v) = graph.endpoints(edge);
        let component_u = dsu.find(u);
        let component_v = dsu.find(v);
        if component_u == component_v {
            continue;
        }
        parents[roots[component_u]] = next_node;
        parents[roots[component_v]] = next_node;
        altitudes[next_node] = edge_weights[edge];
        let merged = dsu.link(component_u, component_v);
        roots[merged] = next_node;
        mst.add_edge(u, v);
        mst_edge_map.push(edge);
        next_node += 1;
    }

    if mst_edge_map.len() != num_mst_edges {
        return Err(HierarchyError::DisconnectedGraph {
            merges: mst_edge_map.len(),
            required: num_mst_edges,
        });
    }

    let tree = Tree::new(parents)?;
    Ok(CanonicalHierarchy {
        tree,
        altitudes,
        mst,
        mst_edge_map,
    })
}
