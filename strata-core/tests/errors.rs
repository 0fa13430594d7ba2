//! Tests for the public error surface and its stable codes.

use rstest::rstest;
use strata_core::{HierarchyError, HierarchyErrorCode};

#[rstest]
#[case(HierarchyError::EmptyGraph, HierarchyErrorCode::EmptyGraph)]
#[case(
    HierarchyError::ShapeMismatch { what: "edge weights", expected: 4, got: 3 },
    HierarchyErrorCode::ShapeMismatch,
)]
#[case(
    HierarchyError::InvalidWeight { what: "edge weights", edge: 2, value: f64::NAN },
    HierarchyErrorCode::InvalidWeight,
)]
#[case(
    HierarchyError::DisconnectedGraph { merges: 3, required: 5 },
    HierarchyErrorCode::DisconnectedGraph,
)]
#[case(
    HierarchyError::MalformedParentArray { node: 1, reason: "parent reference is out of bounds" },
    HierarchyErrorCode::MalformedParentArray,
)]
#[case(
    HierarchyError::InvariantViolation { invariant: "active edge must be present", index: 7 },
    HierarchyErrorCode::InvariantViolation,
)]
fn returns_expected_hierarchy_code(
    #[case] error: HierarchyError,
    #[case] expected: HierarchyErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[test]
fn error_codes_render_stable_identifiers() {
    assert_eq!(HierarchyErrorCode::EmptyGraph.as_str(), "EMPTY_GRAPH");
    assert_eq!(HierarchyErrorCode::ShapeMismatch.as_str(), "SHAPE_MISMATCH");
    assert_eq!(HierarchyErrorCode::InvalidWeight.as_str(), "INVALID_WEIGHT");
    assert_eq!(
        HierarchyErrorCode::DisconnectedGraph.as_str(),
        "DISCONNECTED_GRAPH"
    );
    assert_eq!(
        HierarchyErrorCode::MalformedParentArray.as_str(),
        "MALFORMED_PARENT_ARRAY"
    );
    assert_eq!(
        HierarchyErrorCode::InvariantViolation.as_str(),
        "INVARIANT_VIOLATION"
    );
}

#[test]
fn display_messages_carry_the_offending_values() {
    let err = HierarchyError::ShapeMismatch {
        what: "edge weights",
        expected: 7,
        got: 6,
    };
    assert_eq!(
        err.to_string(),
        "edge weights has length 6 but 7 entries were expected"
    );

    let err = HierarchyError::DisconnectedGraph {
        merges: 4,
        required: 8,
    };
    assert_eq!(
        err.to_string(),
        "input graph is disconnected: 4 of 8 merges performed"
    );
}
