//! Argument parsing, execution and rendering for the `findmst` CLI.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use findmst_core::{EdgeList, KruskalStrategy, MinimumSpanningForest, MstError, sample_graph};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "findmst",
    about = "Compute the minimum spanning tree of the sample graph with Kruskal's algorithm."
)]
pub struct Cli {
    /// Which edge-ordering strategy to run.
    #[arg(long, value_enum, default_value_t = StrategyChoice::Both)]
    pub strategy: StrategyChoice,

    /// Print the total weight after each strategy's edges.
    #[arg(long)]
    pub summary: bool,
}

/// Strategy selection accepted by `--strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Sort all edges up front.
    Sort,
    /// Extract edges from a binary min-heap.
    Heap,
    /// Run both strategies, sort first.
    Both,
}

impl StrategyChoice {
    /// Returns the strategies to run, in output order.
    #[must_use]
    pub const fn strategies(self) -> &'static [KruskalStrategy] {
        match self {
            Self::Sort => &[KruskalStrategy::Sort],
            Self::Heap => &[KruskalStrategy::Heap],
            Self::Both => &KruskalStrategy::ALL,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Heap => "heap",
            Self::Both => "both",
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph construction or selection failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Outcome of one CLI invocation.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// One forest per strategy run, in run order.
    pub forests: Vec<MinimumSpanningForest>,
    /// Whether to print a total-weight line after each run.
    pub show_totals: bool,
}

/// Executes the command represented by `cli` against the sample graph.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built or a run fails.
///
/// # Examples
/// ```
/// use findmst_cli::cli::{Cli, StrategyChoice, run_cli};
///
/// let summary = run_cli(&Cli {
///     strategy: StrategyChoice::Heap,
///     summary: false,
/// })?;
/// assert_eq!(summary.forests.len(), 1);
/// assert_eq!(summary.forests[0].total_weight(), 52);
/// # Ok::<(), findmst_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: &Cli) -> Result<ExecutionSummary, CliError> {
    let graph = sample_graph()?;
    run_on_graph(cli, &graph)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(cli, graph),
    fields(strategy = field::Empty, vertices = graph.vertex_count(), edges = graph.len()),
)]
pub(super) fn run_on_graph(cli: &Cli, graph: &EdgeList) -> Result<ExecutionSummary, CliError> {
    Span::current().record("strategy", field::display(cli.strategy.label()));

    let forests = cli
        .strategy
        .strategies()
        .iter()
        .map(|strategy| strategy.run(graph))
        .collect::<Result<Vec<_>, _>>()?;

    info!(runs = forests.len(), "execution completed");
    Ok(ExecutionSummary {
        forests,
        show_totals: cli.summary,
    })
}

/// Renders `summary` to `writer`.
///
/// Each run prints its strategy title followed by one
/// `Edge (start, end) select weight` line per accepted edge, in acceptance
/// order. Runs are separated by a blank line.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use findmst_cli::cli::{Cli, StrategyChoice, render_summary, run_cli};
///
/// let summary = run_cli(&Cli {
///     strategy: StrategyChoice::Sort,
///     summary: true,
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Sort Based Kruskal\nEdge (2, 5) select 1\n"));
/// assert!(text.ends_with("total weight: 52\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for (index, forest) in summary.forests.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", forest.strategy().title())?;
        for edge in forest.edges() {
            writeln!(
                writer,
                "Edge ({}, {}) select {}",
                edge.start(),
                edge.end(),
                edge.weight()
            )?;
        }
        if summary.show_totals {
            writeln!(writer, "total weight: {}", forest.total_weight())?;
        }
    }
    Ok(())
}
