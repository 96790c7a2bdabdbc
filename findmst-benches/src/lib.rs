//! Benchmark support crate for findmst.
//!
//! Generates seeded random graphs so the Criterion benches can compare the
//! sort and heap Kruskal strategies on identical inputs.

pub mod error;
pub mod graph;
