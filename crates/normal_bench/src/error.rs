//! Error types for benchmark runs.

use normal_core::GenerationError;
use thiserror::Error;

/// Benchmark harness error.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// A length or replication parameter is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Adapter construction or generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Report serialisation failed.
    #[error("Report serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),
}
