//! Benchmark setup error type.

use findmst_core::MstError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction or MST computation failed.
    #[error("MST operation failed: {0}")]
    Mst(#[from] MstError),
    /// A random graph needs at least one vertex.
    #[error("random graph must have at least one vertex")]
    NoVertices,
}
