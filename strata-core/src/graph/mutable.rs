//! Mutable working graph for the agglomerative builder.
//!
//! Edge ids must stay stable while the builder adds merged-region vertices,
//! removes fused and parallel edges, and rewires surviving edges onto freshly
//! created vertices: the heap and the linkage weighters both address edges by
//! id. Removed edges leave a tombstone in the edge table; ids are never
//! reused.

use std::collections::BTreeSet;

use super::StaticGraph;

/// An undirected graph with stable edge ids under mutation.
///
/// Incident sets are ordered by edge id, so incidence iteration is
/// deterministic; the neighbour-collection order during a merge feeds the
/// builder's tie-breaking and must not vary between runs.
#[derive(Clone, Debug, Default)]
pub struct MutableGraph {
    incident: Vec<BTreeSet<usize>>,
    edges: Vec<Option<(usize, usize)>>,
}

impl MutableGraph {
    /// Creates a working copy of `graph` with identical vertex and edge ids.
    #[must_use]
    pub fn from_graph(graph: &StaticGraph) -> Self {
        let mut incident = vec![BTreeSet::new(); graph.num_vertices()];
        let mut edges = Vec::with_capacity(graph.num_edges());
        for (id, u, v) in graph.edge_list() {
            edges.push(Some((u, v)));
            incident[u].insert(id);
            incident[v].insert(id);
        }
        Self { incident, edges }
    }

    /// Adds a new isolated vertex and returns its id.
    ///
    /// Existing edge ids are unaffected.
    pub fn add_vertex(&mut self) -> usize {
        self.incident.push(BTreeSet::new());
        self.incident.len() - 1
    }

    /// Adds an undirected edge between `u` and `v` and returns its id.
    ///
    /// # Panics
    /// Panics when either endpoint is out of bounds or when `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> usize {
        assert!(u < self.incident.len(), "endpoint {u} is out of bounds");
        assert!(v < self.incident.len(), "endpoint {v} is out of bounds");
        assert_ne!(u, v, "self-loops are not supported");
        let id = self.edges.len();
        self.edges.push(Some((u, v)));
        self.incident[u].insert(id);
        self.incident[v].insert(id);
        id
    }

    /// Removes edge `edge` if it is present. Idempotent; the id is
    /// tombstoned and never reused.
    pub fn remove_edge(&mut self, edge: usize) {
        if let Some((u, v)) = self.edges[edge].take() {
            self.incident[u].remove(&edge);
            self.incident[v].remove(&edge);
        }
    }

    /// Relocates the live edge `edge` to connect `u` and `v`.
    ///
    /// Returns `false` when the edge has been removed, leaving the graph
    /// unchanged.
    ///
    /// # Panics
    /// Panics when either endpoint is out of bounds or when `u == v`.
    pub fn set_edge(&mut self, edge: usize, u: usize, v: usize) -> bool {
        assert!(u < self.incident.len(), "endpoint {u} is out of bounds");
        assert!(v < self.incident.len(), "endpoint {v} is out of bounds");
        assert_ne!(u, v, "self-loops are not supported");
        let Some((old_u, old_v)) = self.edges[edge] else {
            return false;
        };
        self.incident[old_u].remove(&edge);
        self.incident[old_v].remove(&edge);
        self.edges[edge] = Some((u, v));
        self.incident[u].insert(edge);
        self.incident[v].insert(edge);
        true
    }

    /// Returns the endpoints of `edge`, or `None` when it has been removed.
    #[must_use]
    pub fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        self.edges[edge]
    }

    /// Returns the endpoint of `edge` that is not `vertex`, or `None` when
    /// the edge has been removed.
    #[must_use]
    pub fn other_endpoint(&self, edge: usize, vertex: usize) -> Option<usize> {
        let (u, v) = self.edges[edge]?;
        debug_assert!(
            vertex == u || vertex == v,
            "vertex {vertex} is not an endpoint of edge {edge}"
        );
        Some(if vertex == u { v } else { u })
    }

    /// Iterates the ids of live edges incident to `vertex`, ascending.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident[vertex].iter().copied()
    }

    /// Returns the number of vertices, including merged-region vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.incident.len() }

    /// Returns the size of the edge id table, tombstones included.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_edges(&self) -> usize { self.edges.len() }
}
