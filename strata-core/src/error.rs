//! Error types for the strata core library.
//!
//! Defines the error enum exposed by the hierarchy builders and a convenient
//! result alias. All validation happens at function entry; the builders are
//! pure computations with no partial results.

use thiserror::Error;

/// An error produced while building or manipulating a hierarchy.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum HierarchyError {
    /// The caller supplied a graph with no vertices.
    #[error("cannot build a hierarchy over an empty graph")]
    EmptyGraph,
    /// An input array length did not match the graph or tree it describes.
    #[error("{what} has length {got} but {expected} entries were expected")]
    ShapeMismatch {
        /// Which input array is the wrong shape.
        what: &'static str,
        /// The length that was expected.
        expected: usize,
        /// The length that was provided.
        got: usize,
    },
    /// An input weight was NaN, infinite, or otherwise unusable.
    #[error("invalid {what} {value} at edge {edge}")]
    InvalidWeight {
        /// Which input array carries the offending value.
        what: &'static str,
        /// Edge id of the offending entry.
        edge: usize,
        /// The value observed.
        value: f64,
    },
    /// The input graph has more than one connected component.
    #[error("input graph is disconnected: {merges} of {required} merges performed")]
    DisconnectedGraph {
        /// Number of merges completed before the builder ran out of edges.
        merges: usize,
        /// Number of merges a connected input would have produced.
        required: usize,
    },
    /// A parent array does not describe a valid rooted tree.
    #[error("parent array is malformed at node {node}: {reason}")]
    MalformedParentArray {
        /// Node at which validation failed.
        node: usize,
        /// Human-readable description of the violated rule.
        reason: &'static str,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("hierarchy invariant violated: {invariant} (index {index})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Index (node or edge id) at which the check tripped.
        index: usize,
    },
}

impl HierarchyError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HierarchyErrorCode {
        match self {
            Self::EmptyGraph => HierarchyErrorCode::EmptyGraph,
            Self::ShapeMismatch { .. } => HierarchyErrorCode::ShapeMismatch,
            Self::InvalidWeight { .. } => HierarchyErrorCode::InvalidWeight,
            Self::DisconnectedGraph { .. } => HierarchyErrorCode::DisconnectedGraph,
            Self::MalformedParentArray { .. } => HierarchyErrorCode::MalformedParentArray,
            Self::InvariantViolation { .. } => HierarchyErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`HierarchyError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum HierarchyErrorCode {
    /// The caller supplied a graph with no vertices.
    EmptyGraph,
    /// An input array length did not match the graph or tree it describes.
    ShapeMismatch,
    /// An input weight was NaN, infinite, or otherwise unusable.
    InvalidWeight,
    /// The input graph has more than one connected component.
    DisconnectedGraph,
    /// A parent array does not describe a valid rooted tree.
    MalformedParentArray,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl HierarchyErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::InvalidWeight => "INVALID_WEIGHT",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::MalformedParentArray => "MALFORMED_PARENT_ARRAY",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HierarchyError>;
