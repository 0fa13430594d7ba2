//! Strata library.
//!
//! Facade crate re-exporting the public surface of `strata-core`: graph
//! types, hierarchy builders, tree utilities, and the error surface. See the
//! core crate for the algorithmic documentation.

pub use strata_core::*;
