//! Linkage policies for the agglomerative builder.
//!
//! When two regions fuse, every remaining neighbour of the pair must receive
//! a fresh edge weight. The builder hands the weighter one [`NewNeighbour`]
//! record per distinct neighbour; the weighter writes the new weight on each
//! record and keeps whatever mirrored per-edge state it needs for later
//! merges.

use crate::error::{HierarchyError, Result};
use crate::graph::MutableGraph;

/// The merge a weighter is being asked about.
///
/// `left` and `right` are the fused regions, `merged` the vertex that now
/// stands for their union, `fusion_edge` the edge whose weight triggered the
/// merge.
#[derive(Clone, Copy, Debug)]
pub struct MergeContext {
    /// Edge whose removal fused the two regions.
    pub fusion_edge: usize,
    /// Vertex representing the union of the fused regions.
    pub merged: usize,
    /// First fused region.
    pub left: usize,
    /// Second fused region.
    pub right: usize,
}

/// One neighbour of a freshly merged region pair.
///
/// `first_edge` links one of the fused regions to the neighbour; when both
/// regions were adjacent to it, `second_edge` holds the parallel edge that
/// the builder will collapse after re-weighting. The surviving edge keeps
/// the id of `first_edge`.
#[derive(Clone, Copy, Debug)]
pub struct NewNeighbour {
    neighbour: usize,
    first_edge: usize,
    second_edge: Option<usize>,
    new_weight: f64,
}

impl NewNeighbour {
    pub(crate) fn new(neighbour: usize, first_edge: usize) -> Self {
        Self {
            neighbour,
            first_edge,
            second_edge: None,
            new_weight: 0.0,
        }
    }

    pub(crate) fn set_second_edge(&mut self, edge: usize) {
        debug_assert!(self.second_edge.is_none(), "a neighbour has at most two edges");
        self.second_edge = Some(edge);
    }

    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbour(&self) -> usize { self.neighbour }

    /// Returns the edge that will survive the merge and link the neighbour
    /// to the merged vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn first_edge(&self) -> usize { self.first_edge }

    /// Returns the parallel edge from the other fused region, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn second_edge(&self) -> Option<usize> { self.second_edge }

    /// Returns how many edges linked the fused regions to this neighbour
    /// (1 or 2).
    #[must_use]
    pub fn num_edges(&self) -> usize {
        if self.second_edge.is_some() {
            2
        } else {
            1
        }
    }

    /// Returns the weight assigned by the weighter.
    #[must_use]
    #[rustfmt::skip]
    pub fn new_weight(&self) -> f64 { self.new_weight }

    /// Records the weight of the surviving edge. Every weighter must call
    /// this on every record it is handed.
    pub fn set_new_weight(&mut self, weight: f64) {
        self.new_weight = weight;
    }
}

/// Re-weights the edges around a merged region.
///
/// Implementations typically mirror the per-edge weights in a vector indexed
/// by edge id and refresh the entry for each surviving edge, so that later
/// merges observe up-to-date values.
pub trait LinkageWeighter {
    /// Writes a new weight on every record in `neighbours`.
    fn reweight(
        &mut self,
        graph: &MutableGraph,
        context: &MergeContext,
        neighbours: &mut [NewNeighbour],
    );
}

/// Single linkage: the distance between two regions is the minimum weight
/// among the edges joining them.
#[derive(Clone, Debug)]
pub struct SingleLinkage {
    weights: Vec<f64>,
}

impl SingleLinkage {
    /// Creates the policy from the initial edge weights.
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl LinkageWeighter for SingleLinkage {
    fn reweight(
        &mut self,
        _graph: &MutableGraph,
        _context: &MergeContext,
        neighbours: &mut [NewNeighbour],
    ) {
        for record in neighbours {
            let mut weight = self.weights[record.first_edge()];
            if let Some(second) = record.second_edge() {
                weight = weight.min(self.weights[second]);
            }
            record.set_new_weight(weight);
            self.weights[record.first_edge()] = weight;
        }
    }
}

/// Complete linkage: the distance between two regions is the maximum weight
/// among the edges joining them.
#[derive(Clone, Debug)]
pub struct CompleteLinkage {
    weights: Vec<f64>,
}

impl CompleteLinkage {
    /// Creates the policy from the initial edge weights.
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl LinkageWeighter for CompleteLinkage {
    fn reweight(
        &mut self,
        _graph: &MutableGraph,
        _context: &MergeContext,
        neighbours: &mut [NewNeighbour],
    ) {
        for record in neighbours {
            let mut weight = self.weights[record.first_edge()];
            if let Some(second) = record.second_edge() {
                weight = weight.max(self.weights[second]);
            }
            record.set_new_weight(weight);
            self.weights[record.first_edge()] = weight;
        }
    }
}

/// Average linkage: the distance between two regions is the mass-weighted
/// mean of the values on the edges joining them.
///
/// Mirrors two vectors indexed by edge id: the running `values` the heap is
/// keyed on, and the accumulated `masses`. Collapsing two parallel edges
/// sums their masses and averages their values by mass.
#[derive(Clone, Debug)]
pub struct AverageLinkage {
    values: Vec<f64>,
    masses: Vec<f64>,
}

impl AverageLinkage {
    /// Creates the policy from parallel value and mass vectors.
    ///
    /// # Errors
    /// Returns [`HierarchyError::ShapeMismatch`] when the vectors differ in
    /// length and [`HierarchyError::InvalidWeight`] when a mass is negative
    /// or non-finite.
    pub fn new(values: Vec<f64>, masses: Vec<f64>) -> Result<Self> {
        if values.len() != masses.len() {
            return Err(HierarchyError::ShapeMismatch {
                what: "edge masses",
                expected: values.len(),
                got: masses.len(),
            });
        }
        for (edge, &mass) in masses.iter().enumerate() {
            if !mass.is_finite() || mass < 0.0 {
                return Err(HierarchyError::InvalidWeight {
                    what: "edge mass",
                    edge,
                    value: mass,
                });
            }
        }
        Ok(Self { values, masses })
    }
}

impl LinkageWeighter for AverageLinkage {
    fn reweight(
        &mut self,
        _graph: &MutableGraph,
        _context: &MergeContext,
        neighbours: &mut [NewNeighbour],
    ) {
        for record in neighbours {
            let first = record.first_edge();
            let (value, mass) = match record.second_edge() {
                Some(second) => {
                    let mass = self.masses[first] + self.masses[second];
                    let value = (self.values[first] * self.masses[first]
                        + self.values[second] * self.masses[second])
                        / mass;
                    (value, mass)
                }
                None => (self.values[first], self.masses[first]),
            };
            record.set_new_weight(value);
            self.values[first] = value;
            self.masses[first] = mass;
        }
    }
}
