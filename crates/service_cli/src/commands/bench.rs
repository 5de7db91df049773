//! Bench command implementation
//!
//! Times every configured adapter and prints the ranked report.

use std::io::Write;

use normal_bench::{AdapterRegistry, BenchmarkConfig, BenchmarkRunner, Report};
use normal_core::engine::HostSeed;
use tracing::info;

use super::count_arg;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the bench command
pub fn run(length: i64, replications: i64, config: &CliConfig) -> Result<()> {
    let length = count_arg("length", length, 1)?;
    let replications = count_arg("replications", replications, 1)?;

    info!("Starting benchmark...");
    info!("  Vector length: {}", length);
    info!("  Replications: {}", replications);
    info!("  Output format: {}", config.format);

    let mut registry = AdapterRegistry::from_kinds(&config.adapters, HostSeed::new(config.host_seed));
    if registry.is_empty() {
        return Err(CliError::InvalidArgument(
            "none of the selected adapters is available in this build".to_string(),
        ));
    }

    let bench_config = BenchmarkConfig::new(length, replications).with_warmup(config.warmup);
    let mut runner = BenchmarkRunner::new(bench_config.clone())?;
    let results = runner.run(registry.adapters_mut());

    let report = Report::new(&bench_config, results).with_excluded(registry.startup_errors());
    let rendered = report.render(config.format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    info!("Benchmark complete");
    Ok(())
}
