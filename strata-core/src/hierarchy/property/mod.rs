//! Property-based tests for the hierarchy builders.
//!
//! Verifies the canonical builder against a sequential Kruskal oracle,
//! checks the structural tree invariants over varied graph topologies and
//! weight distributions, and exercises the hierarchy-level equivalences:
//! canonical and quasi-flat saliency maps agree, single-linkage LCA
//! altitudes equal minimax path weights, plateau simplification is
//! idempotent, and repeated runs are byte-identical.

mod oracle;
mod strategies;
mod structural;
mod types;
