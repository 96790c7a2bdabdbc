//! Seeded random connected graphs.

use std::fmt;

use findmst_core::{EdgeList, Weight};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

const MAX_WEIGHT: Weight = 1_000;

/// Shape of a generated benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added on top of the spanning path.
    pub extra_edges: usize,
    /// Seed for the weight and endpoint generator.
    pub seed: u64,
}

impl fmt::Display for RandomGraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertex_count, self.edge_count())
    }
}

impl RandomGraphConfig {
    /// Total number of edges the generated graph holds.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.vertex_count.saturating_sub(1) + self.extra_edges
    }

    /// Builds a connected graph: a path through every vertex followed by
    /// `extra_edges` random edges. Weights lie in `[0, 1000)`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::NoVertices`] when `vertex_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use findmst_benches::graph::RandomGraphConfig;
    ///
    /// let config = RandomGraphConfig { vertex_count: 8, extra_edges: 4, seed: 7 };
    /// let graph = config.generate()?;
    /// assert_eq!(graph.len(), 11);
    /// # Ok::<(), findmst_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(&self) -> Result<EdgeList, BenchSetupError> {
        if self.vertex_count == 0 {
            return Err(BenchSetupError::NoVertices);
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = EdgeList::new(self.vertex_count, self.edge_count());
        for end in 1..self.vertex_count {
            graph.insert_edge(end - 1, end, rng.gen_range(0..MAX_WEIGHT))?;
        }
        for _ in 0..self.extra_edges {
            let start = rng.gen_range(0..self.vertex_count);
            let end = rng.gen_range(0..self.vertex_count);
            graph.insert_edge(start, end, rng.gen_range(0..MAX_WEIGHT))?;
        }
        Ok(graph)
    }
}
