//! Benchmark runner.
//!
//! Runs every adapter sequentially under the same protocol: optional
//! untimed warmup, then exactly `replications` timed calls to
//! `generate(length)`. A failing call aborts that adapter's measurement
//! only; it is reported as a failure entry and the next adapter runs.
//!
//! # State
//!
//! ```text
//! Idle ──run──▶ Running(adapter) ──▶ … ──▶ Reported ──run──▶ Idle ──▶ …
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use normal_core::{Adapter, GenerationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::registry::NamedAdapter;
use crate::timing::TimingStats;

/// Harness lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HarnessState {
    /// No run in progress.
    #[default]
    Idle,
    /// Measuring the named adapter.
    Running(String),
    /// The last run finished and its results were returned.
    Reported,
}

/// How one adapter's measurement ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// All replications ran.
    Completed {
        /// Per-replication timing statistics.
        stats: TimingStats,
    },
    /// A replication failed; measurement was aborted.
    Failed {
        /// The adapter's error message.
        reason: String,
        /// Timed replications finished before the failure.
        completed: usize,
    },
}

/// Result of measuring one adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Adapter label.
    pub name: String,
    /// Requested number of timed replications.
    pub replications: usize,
    /// Accumulated wall-clock time of the timed replications.
    pub elapsed_ns: u64,
    /// Elapsed time relative to the fastest completed adapter.
    /// `None` for failures.
    pub relative: Option<f64>,
    /// 1-based position in the report, fastest first.
    pub rank: usize,
    /// Completion status.
    pub outcome: Outcome,
}

impl BenchmarkResult {
    /// Returns the accumulated elapsed time.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Returns `true` if every replication ran.
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, Outcome::Completed { .. })
    }

    /// Returns the timing statistics of a completed measurement.
    pub fn stats(&self) -> Option<&TimingStats> {
        match &self.outcome {
            Outcome::Completed { stats } => Some(stats),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Sequential benchmark runner.
///
/// # Examples
///
/// ```rust
/// use normal_bench::{AdapterRegistry, BenchmarkConfig, BenchmarkRunner};
/// use normal_core::engine::HostSeed;
///
/// let mut registry = AdapterRegistry::all(HostSeed::default());
/// let mut runner = BenchmarkRunner::new(BenchmarkConfig::new(100, 5)).unwrap();
///
/// let results = runner.run(registry.adapters_mut());
/// assert_eq!(results.len(), registry.len());
/// assert!(results.iter().all(|r| r.replications == 5));
/// ```
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    state: HarnessState,
}

impl BenchmarkRunner {
    /// Creates a runner after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `BenchmarkError::InvalidArgument` for zero replications.
    pub fn new(config: BenchmarkConfig) -> Result<Self, BenchmarkError> {
        config.validate()?;
        Ok(Self {
            config,
            state: HarnessState::Idle,
        })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> &HarnessState {
        &self.state
    }

    fn transition(&mut self, next: HarnessState) {
        debug!(from = ?self.state, to = ?next, "Harness state change");
        self.state = next;
    }

    /// Measures every adapter and returns one result each, sorted by
    /// ascending elapsed time.
    ///
    /// Ties keep input order. Failed adapters follow all completed ones,
    /// also in input order.
    pub fn run(&mut self, adapters: &mut [NamedAdapter]) -> Vec<BenchmarkResult> {
        if self.state != HarnessState::Idle {
            self.transition(HarnessState::Idle);
        }

        info!(
            adapters = adapters.len(),
            length = self.config.length,
            replications = self.config.replications,
            warmup = self.config.warmup,
            "Starting benchmark run"
        );

        let mut completed = Vec::new();
        let mut failed = Vec::new();

        for named in adapters.iter_mut() {
            self.transition(HarnessState::Running(named.name.clone()));
            match self.measure(&mut named.adapter) {
                Ok(timings) => {
                    let stats = TimingStats::from_samples(&timings);
                    debug!(
                        adapter = %named.name,
                        total_ns = stats.total_ns,
                        mean_ns = stats.mean_ns,
                        "Adapter measured"
                    );
                    completed.push((named.name.clone(), stats));
                }
                Err((err, done)) => {
                    warn!(adapter = %named.name, error = %err, completed = done, "Adapter measurement aborted");
                    failed.push((named.name.clone(), err, done));
                }
            }
        }

        let results = self.rank(completed, failed);
        self.transition(HarnessState::Reported);
        info!(results = results.len(), "Benchmark run complete");
        results
    }

    /// Runs warmup and timed replications, returning per-replication
    /// nanoseconds or the error and the number of timed replications done.
    fn measure(&self, adapter: &mut Adapter) -> Result<Vec<u64>, (GenerationError, usize)> {
        let length = self.config.length;

        for _ in 0..self.config.warmup {
            black_box(adapter.generate(length).map_err(|e| (e, 0))?);
        }

        let mut timings = Vec::with_capacity(self.config.replications);
        for _ in 0..self.config.replications {
            let start = Instant::now();
            let samples = adapter.generate(length);
            let elapsed = start.elapsed();
            let samples = samples.map_err(|e| (e, timings.len()))?;
            black_box(samples);
            timings.push(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX));
        }

        Ok(timings)
    }

    fn rank(
        &self,
        mut completed: Vec<(String, TimingStats)>,
        failed: Vec<(String, GenerationError, usize)>,
    ) -> Vec<BenchmarkResult> {
        // Vec::sort_by_key is stable
        completed.sort_by_key(|(_, stats)| stats.total_ns);

        let fastest = completed
            .first()
            .map(|(_, stats)| stats.total_ns.max(1))
            .unwrap_or(1) as f64;

        let replications = self.config.replications;
        let completed = completed.into_iter().map(|(name, stats)| BenchmarkResult {
            name,
            replications,
            elapsed_ns: stats.total_ns,
            relative: Some(stats.total_ns.max(1) as f64 / fastest),
            rank: 0,
            outcome: Outcome::Completed { stats },
        });
        let failed = failed.into_iter().map(|(name, err, done)| BenchmarkResult {
            name,
            replications,
            elapsed_ns: 0,
            relative: None,
            rank: 0,
            outcome: Outcome::Failed {
                reason: err.to_string(),
                completed: done,
            },
        });

        completed
            .chain(failed)
            .enumerate()
            .map(|(i, mut result)| {
                result.rank = i + 1;
                result
            })
            .collect()
    }
}

/// Runs `adapters` with `length` samples over `replications` timed calls.
///
/// # Errors
///
/// Returns `BenchmarkError::InvalidArgument` for zero replications.
pub fn run(
    adapters: &mut [NamedAdapter],
    length: usize,
    replications: usize,
) -> Result<Vec<BenchmarkResult>, BenchmarkError> {
    let mut runner = BenchmarkRunner::new(BenchmarkConfig::new(length, replications))?;
    Ok(runner.run(adapters))
}
