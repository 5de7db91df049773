//! CLI error types

use normal_bench::BenchmarkError;
use normal_core::GenerationError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Moment check failed for: {0}")]
    CheckFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
