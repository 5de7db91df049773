//! normbench - Standard-Normal Vector Benchmark CLI
//!
//! This is the operational entry point for comparing normal-variate
//! generator backends.
//!
//! # Commands
//!
//! - `normbench bench <LENGTH> <REPLICATIONS>` - Time every adapter and print a ranked report
//! - `normbench sample --adapter <KIND>` - Print the values one adapter produces
//! - `normbench check` - Report adapter availability and run a moment sanity check
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate wires configuration and logging
//! around `normal_bench` (harness) and `normal_core` (adapters). Reports go
//! to standard output; logs go to standard error.

use anyhow::Context;
use clap::{Parser, Subcommand};
use normal_bench::ReportFormat;
use normal_core::AdapterKind;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliConfig, CliOverrides};

/// Standard-normal vector generation benchmark
#[derive(Parser)]
#[command(name = "normbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time every adapter and print a ranked report
    Bench {
        /// Number of normal variates per vector
        #[arg(allow_negative_numbers = true)]
        length: i64,

        /// Number of timed replications per adapter
        #[arg(allow_negative_numbers = true)]
        replications: i64,

        /// Untimed warmup calls per adapter
        #[arg(short, long)]
        warmup: Option<usize>,

        /// Comma-separated adapters to compare (host, library, standard)
        #[arg(short, long, value_delimiter = ',', value_parser = parse_kind)]
        adapters: Option<Vec<AdapterKind>>,

        /// Seed applied to the host RNG before drawing
        #[arg(long)]
        host_seed: Option<u64>,

        /// Output format (table, markdown, json)
        #[arg(short, long, value_parser = parse_format)]
        format: Option<ReportFormat>,
    },

    /// Print the values one adapter produces
    Sample {
        /// Adapter to draw from (host, library, standard)
        #[arg(short, long, value_parser = parse_kind)]
        adapter: AdapterKind,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "10", allow_negative_numbers = true)]
        count: i64,

        /// Engine seed (defaults to the adapter's seed constant)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Report adapter availability and run a moment sanity check
    Check {
        /// Sample size for the moment check
        #[arg(short = 'n', long, default_value = "100000")]
        samples: usize,
    },
}

fn parse_kind(s: &str) -> std::result::Result<AdapterKind, String> {
    AdapterKind::from_str(s).map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> std::result::Result<ReportFormat, String> {
    ReportFormat::from_str(s).map_err(|e| e.to_string())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Layers defaults, the config file, the environment and `overrides`.
fn load_config(overrides: &CliOverrides) -> Result<CliConfig> {
    Ok(build_config(overrides)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    if cli.verbose && overrides.log_level.is_none() {
        overrides.log_level = Some("debug".to_string());
    }
    if let Commands::Bench {
        warmup,
        adapters,
        host_seed,
        format,
        ..
    } = &cli.command
    {
        overrides.warmup = *warmup;
        overrides.adapters = adapters.clone();
        overrides.host_seed = *host_seed;
        overrides.format = *format;
    }

    let config = load_config(&overrides).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!("normbench v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        warmup = config.warmup,
        host_seed = config.host_seed,
        adapters = ?config.adapters,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Bench {
            length,
            replications,
            ..
        } => commands::bench::run(length, replications, &config).context("benchmark failed")?,
        Commands::Sample {
            adapter,
            count,
            seed,
        } => commands::sample::run(adapter, count, seed).context("sampling failed")?,
        Commands::Check { samples } => commands::check::run(samples).context("check failed")?,
    }

    Ok(())
}
