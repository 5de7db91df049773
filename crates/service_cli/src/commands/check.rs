//! Check command implementation
//!
//! Lists which adapters this build provides and verifies that each
//! available one produces samples with mean ≈ 0 and variance ≈ 1.

use std::io::Write;

use normal_core::{Adapter, AdapterKind, SampleMoments};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Mean tolerance for the sanity check.
const MEAN_TOLERANCE: f64 = 0.05;
/// Variance tolerance for the sanity check.
const VARIANCE_TOLERANCE: f64 = 0.1;

/// Run the check command
pub fn run(samples: usize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_check(samples, &mut stdout)
}

/// Writes the availability table to `out`, failing if any available adapter
/// misses the moment tolerances.
fn write_check<W: Write>(samples: usize, out: &mut W) -> Result<()> {
    if samples == 0 {
        return Err(CliError::InvalidArgument(
            "samples must be at least 1, got 0".to_string(),
        ));
    }

    info!("Checking adapters with {} samples each", samples);

    writeln!(
        out,
        "{:<10}  {:<11}  {:>10}  {:>10}  {:>10}  Status",
        "Adapter", "Available", "Seed", "Mean", "Variance"
    )?;

    let mut failed = Vec::new();
    for kind in AdapterKind::ALL {
        if !kind.is_available() {
            warn!(adapter = %kind, "Adapter not compiled into this build");
            writeln!(out, "{:<10}  {:<11}  {:>10}  {:>10}  {:>10}  -", kind, "no", "-", "-", "-")?;
            continue;
        }

        let mut adapter = Adapter::with_default_seed(kind)?;
        let moments = SampleMoments::from_samples(&adapter.generate(samples)?);
        let status = if moments.is_standard_normal(MEAN_TOLERANCE, VARIANCE_TOLERANCE) {
            "ok"
        } else {
            warn!(adapter = %kind, mean = moments.mean, variance = moments.variance, "Moment check failed");
            failed.push(kind.as_str());
            "FAIL"
        };

        writeln!(
            out,
            "{:<10}  {:<11}  {:>10}  {:>10.5}  {:>10.5}  {}",
            kind,
            "yes",
            adapter.seed(),
            moments.mean,
            moments.variance,
            status
        )?;
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::CheckFailed(failed.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_samples_rejected() {
        let mut out = Vec::new();
        let err = write_check(0, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_large_sample_passes_every_adapter() {
        let mut out = Vec::new();
        write_check(100_000, &mut out).unwrap();

        let table = String::from_utf8(out).unwrap();
        assert!(!table.contains("FAIL"));
        for kind in AdapterKind::ALL.into_iter().filter(AdapterKind::is_available) {
            assert!(table.lines().any(|line| line.starts_with(kind.as_str()) && line.ends_with("ok")));
        }
    }

    #[test]
    fn test_tiny_sample_fails_check() {
        let mut out = Vec::new();
        let err = write_check(1, &mut out).unwrap_err();
        assert!(matches!(err, CliError::CheckFailed(_)));
        assert!(String::from_utf8(out).unwrap().contains("FAIL"));
    }
}
