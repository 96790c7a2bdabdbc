//! Command-line interface for running Kruskal over the sample graph.
//!
//! With no arguments both strategies run in reference order and their
//! accepted edges are printed one block per strategy.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, StrategyChoice, render_summary, run_cli};
