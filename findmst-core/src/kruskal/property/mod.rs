//! Property-based tests for the Kruskal strategies.
//!
//! Checks both strategies against a union-by-rank reference and, on small
//! graphs, against exhaustive subset enumeration. Also validates structural
//! invariants of every forest and repeats runs across threads to confirm that
//! independent instances never interfere.

mod equivalence;
mod strategies;
mod types;
