//! Sample moments for statistical sanity checks.

/// Count, mean and population variance of a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleMoments {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance (divides by `count`).
    pub variance: f64,
}

impl SampleMoments {
    /// Computes moments in two passes. An empty sample yields all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        Self {
            count: samples.len(),
            mean,
            variance,
        }
    }

    /// Returns the standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Returns `true` when the mean is within `mean_tol` of 0 and the
    /// variance within `var_tol` of 1.
    pub fn is_standard_normal(&self, mean_tol: f64, var_tol: f64) -> bool {
        self.count > 0 && self.mean.abs() < mean_tol && (self.variance - 1.0).abs() < var_tol
    }
}
