//! Fixture and configuration types for the MST property suites.

use crate::EdgeList;

/// Weight and topology profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of one to three values.
    ManyIdentical,
    /// A random spanning tree plus roughly `n / 2` extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// The generated graph.
    pub graph: EdgeList,
    /// Distribution used during generation, reported on failure.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the fixture shape for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.len(),
        )
    }
}

/// Configuration for the concurrent-runs property.
pub(super) struct ConcurrencyConfig {
    /// Number of independent runs per strategy and input.
    pub repetitions: usize,
}

impl ConcurrencyConfig {
    /// Reads `FINDMST_PBT_CONCURRENCY_REPS`, defaulting to 5.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("FINDMST_PBT_CONCURRENCY_REPS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
