//! Per-replication timing statistics.

use serde::{Deserialize, Serialize};

/// Timing statistics over the replications of one adapter.
///
/// Contains total, mean, standard deviation, min, and max values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Sum of all replication times in nanoseconds.
    pub total_ns: u64,

    /// Mean time in nanoseconds.
    pub mean_ns: f64,

    /// Standard deviation in nanoseconds.
    pub std_dev_ns: f64,

    /// Minimum time in nanoseconds.
    pub min_ns: u64,

    /// Maximum time in nanoseconds.
    pub max_ns: u64,

    /// Number of samples.
    pub sample_count: usize,
}

impl TimingStats {
    /// Computes statistics from per-replication timings in nanoseconds.
    pub fn from_samples(samples: &[u64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len();
        let total: u64 = samples.iter().fold(0u64, |acc, &x| acc.saturating_add(x));
        let mean = total as f64 / n as f64;

        let variance: f64 = samples
            .iter()
            .map(|&x| {
                let diff = x as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;

        Self {
            total_ns: total,
            mean_ns: mean,
            std_dev_ns: variance.sqrt(),
            min_ns: samples.iter().copied().min().unwrap_or(0),
            max_ns: samples.iter().copied().max().unwrap_or(0),
            sample_count: n,
        }
    }

    /// Returns the mean time in microseconds.
    pub fn mean_us(&self) -> f64 {
        self.mean_ns / 1000.0
    }

    /// Returns the total time in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.total_ns as f64 / 1_000_000.0
    }

    /// Returns the coefficient of variation (CV) as a percentage.
    ///
    /// CV = (std_dev / mean) * 100
    pub fn cv_percent(&self) -> f64 {
        if self.mean_ns > 0.0 {
            (self.std_dev_ns / self.mean_ns) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_samples_empty() {
        let stats = TimingStats::from_samples(&[]);
        assert_eq!(stats.sample_count, 0);
        assert_eq!(stats.total_ns, 0);
    }

    #[test]
    fn test_from_samples_single() {
        let stats = TimingStats::from_samples(&[1000]);
        assert_eq!(stats.sample_count, 1);
        assert_eq!(stats.total_ns, 1000);
        assert_relative_eq!(stats.mean_ns, 1000.0);
        assert_relative_eq!(stats.std_dev_ns, 0.0);
        assert_eq!(stats.min_ns, 1000);
        assert_eq!(stats.max_ns, 1000);
    }

    #[test]
    fn test_from_samples_multiple() {
        let stats = TimingStats::from_samples(&[100, 200, 300, 400, 500]);
        assert_eq!(stats.total_ns, 1500);
        assert_relative_eq!(stats.mean_ns, 300.0);
        assert_relative_eq!(stats.std_dev_ns, 20_000f64.sqrt(), epsilon = 1e-9);
        assert_eq!(stats.min_ns, 100);
        assert_eq!(stats.max_ns, 500);
    }

    #[test]
    fn test_unit_conversions() {
        let stats = TimingStats::from_samples(&[2_000_000, 2_000_000]);
        assert_relative_eq!(stats.mean_us(), 2000.0);
        assert_relative_eq!(stats.total_ms(), 4.0);
    }

    #[test]
    fn test_cv_percent() {
        let stats = TimingStats::from_samples(&[100, 200, 300, 400, 500]);
        assert_relative_eq!(stats.cv_percent(), 20_000f64.sqrt() / 3.0, epsilon = 1e-9);

        let zero = TimingStats::from_samples(&[0, 0]);
        assert_eq!(zero.cv_percent(), 0.0);
    }
}
