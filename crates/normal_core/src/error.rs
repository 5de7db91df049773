//! Error types for normal variate generation.

use thiserror::Error;

use crate::adapter::AdapterKind;

/// Error raised by a generator adapter or during adapter construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// A count, seed or replication parameter is outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The output buffer could not be reserved.
    #[error("Allocation failure: could not reserve {requested} samples")]
    AllocationFailure {
        /// Number of samples that was requested.
        requested: usize,
    },

    /// The adapter's engine was not compiled into this build.
    #[error("Engine unavailable: adapter '{0}' is not enabled in this build")]
    EngineUnavailable(AdapterKind),
}
