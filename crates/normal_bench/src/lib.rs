//! # normal_bench: Normal-Vector Benchmark Harness
//!
//! Times interchangeable standard-normal generator adapters under one
//! protocol and reports them fastest first.
//!
//! ## Module Structure
//!
//! - [`config`]: run parameters ([`BenchmarkConfig`])
//! - [`registry`]: adapter set construction and startup exclusion
//! - [`runner`]: sequential measurement and ranking
//! - [`timing`]: per-replication statistics
//! - [`report`]: table, Markdown and JSON output
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_bench::{AdapterRegistry, BenchmarkConfig, BenchmarkRunner, Report, ReportFormat};
//! use normal_core::engine::HostSeed;
//!
//! let config = BenchmarkConfig::new(1_000, 10);
//! let mut registry = AdapterRegistry::all(HostSeed::default());
//! let mut runner = BenchmarkRunner::new(config.clone()).unwrap();
//!
//! let results = runner.run(registry.adapters_mut());
//! let report = Report::new(&config, results).with_excluded(registry.startup_errors());
//! println!("{}", report.render(ReportFormat::Table).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod timing;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use registry::{AdapterRegistry, NamedAdapter};
pub use report::{Report, ReportFormat};
pub use runner::{run, BenchmarkResult, BenchmarkRunner, HarnessState, Outcome};
pub use timing::TimingStats;
