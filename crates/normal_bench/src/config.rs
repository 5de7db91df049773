//! Benchmark run configuration.

use crate::error::BenchmarkError;

/// Configuration for a benchmark run.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `length` | 1000 | Samples drawn per replication |
/// | `replications` | 100 | Number of timed invocations per adapter |
/// | `warmup` | 0 | Untimed invocations before timing starts |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Samples drawn per replication (zero is allowed).
    pub length: usize,

    /// Number of timed invocations per adapter (must be positive).
    pub replications: usize,

    /// Number of untimed warmup invocations per adapter.
    pub warmup: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            length: 1_000,
            replications: 100,
            warmup: 0,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a configuration for `length` samples over `replications`
    /// timed invocations, without warmup.
    pub fn new(length: usize, replications: usize) -> Self {
        Self {
            length,
            replications,
            warmup: 0,
        }
    }

    /// Sets the vector length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the number of replications.
    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Sets the number of warmup invocations.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::InvalidArgument` if `replications` is 0.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.replications == 0 {
            return Err(BenchmarkError::InvalidArgument(
                "replications must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Total number of samples drawn per adapter across timed replications.
    pub fn samples_per_adapter(&self) -> u128 {
        self.length as u128 * self.replications as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.length, 1_000);
        assert_eq!(config.replications, 100);
        assert_eq!(config.warmup, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = BenchmarkConfig::new(10, 2)
            .with_length(500)
            .with_replications(50)
            .with_warmup(5);
        assert_eq!(config.length, 500);
        assert_eq!(config.replications, 50);
        assert_eq!(config.warmup, 5);
        assert_eq!(config.samples_per_adapter(), 25_000);
    }

    #[test]
    fn test_config_validation_valid() {
        assert!(BenchmarkConfig::new(0, 1).validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_replications() {
        let result = BenchmarkConfig::new(100, 0).validate();
        assert!(matches!(result, Err(BenchmarkError::InvalidArgument(_))));
    }
}
