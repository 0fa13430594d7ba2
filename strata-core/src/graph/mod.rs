//! Graph types consumed and produced by the hierarchy builders.
//!
//! [`StaticGraph`] is the immutable input representation: dense vertex and
//! edge ids, per-vertex incidence lists, constant-time endpoint lookup. The
//! Kruskal-style builder also returns its minimum spanning tree as a
//! `StaticGraph`, with edges appended in selection order.
//!
//! [`MutableGraph`] is the working copy used by the agglomerative builder; it
//! keeps edge ids stable while vertices are added and edges are removed or
//! rewired.

mod mutable;

pub use self::mutable::MutableGraph;

/// An immutable undirected graph with dense edge ids.
///
/// Edge ids are assigned in insertion order and are dense in
/// `[0, num_edges)`. Self-loops are not representable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticGraph {
    incident: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl StaticGraph {
    /// Creates a graph with `num_vertices` isolated vertices.
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            incident: vec![Vec::new(); num_vertices],
            edges: Vec::new(),
        }
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
        self.edges.push((u, v));
        self.incident[u].push(id);
        self.incident[v].push(id);
        id
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.incident.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_edges(&self) -> usize { self.edges.len() }

    /// Returns the endpoints of edge `edge` as inserted.
    ///
    /// # Panics
    /// Panics when `edge` is out of bounds.
    #[must_use]
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.edges[edge]
    }

    /// Returns the endpoint of `edge` that is not `vertex`.
    ///
    /// # Panics
    /// Panics when `edge` is out of bounds or `vertex` is not an endpoint.
    #[must_use]
    pub fn other_endpoint(&self, edge: usize, vertex: usize) -> usize {
        let (u, v) = self.edges[edge];
        if vertex == u {
            v
        } else {
            assert_eq!(vertex, v, "vertex {vertex} is not an endpoint of edge {edge}");
            u
        }
    }

    /// Iterates the ids of edges incident to `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident[vertex].iter().copied()
    }

    /// Iterates `(edge_id, u, v)` triples in edge-id order.
    pub fn edge_list(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, &(u, v))| (id, u, v))
    }
}
