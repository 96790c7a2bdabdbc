//! Error types for the findmst core library.
//!
//! Every failure is a caller-contract violation detected at the point it
//! happens: a vertex id outside the graph, or an insertion past a fixed
//! capacity. Each variant maps to a stable [`MstErrorCode`].

use std::fmt;

use thiserror::Error;

/// Errors returned while building graphs or computing a spanning forest.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices the structure was sized for.
        vertex_count: usize,
    },
    /// An insertion would grow a fixed-capacity container past its limit.
    #[error("{resource} is full (capacity {capacity})")]
    CapacityExceeded {
        /// Name of the container that rejected the insertion.
        resource: &'static str,
        /// The configured maximum number of elements.
        capacity: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => MstErrorCode::VertexOutOfRange,
            Self::CapacityExceeded { .. } => MstErrorCode::CapacityExceeded,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MstErrorCode {
    /// A vertex id fell outside the graph.
    VertexOutOfRange,
    /// A fixed-capacity container was full.
    CapacityExceeded,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "VERTEX_OUT_OF_RANGE",
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
        }
    }
}

impl fmt::Display for MstErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient result alias for core operations.
pub type Result<T, E = MstError> = std::result::Result<T, E>;
