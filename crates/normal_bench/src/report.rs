//! Benchmark reports.
//!
//! A [`Report`] bundles the run parameters with the ranked results and can
//! be rendered as a terminal table, a Markdown table, or JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::runner::{BenchmarkResult, Outcome};

/// Output format of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain-text table for terminals.
    #[default]
    Table,
    /// GitHub-flavoured Markdown.
    Markdown,
    /// JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(BenchmarkError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, markdown, json",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Complete benchmark report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    /// Creation time (RFC 3339, UTC).
    pub timestamp: String,
    /// Samples per replication.
    pub length: usize,
    /// Timed replications per adapter.
    pub replications: usize,
    /// Untimed warmup calls per adapter.
    pub warmup: usize,
    /// Ranked results, fastest first.
    pub results: Vec<BenchmarkResult>,
    /// Adapters excluded at startup, with reasons.
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl Report {
    /// Creates a report stamped with the current time.
    pub fn new(config: &BenchmarkConfig, results: Vec<BenchmarkResult>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            length: config.length,
            replications: config.replications,
            warmup: config.warmup,
            results,
            excluded: Vec::new(),
        }
    }

    /// Records adapters excluded at startup.
    pub fn with_excluded<I, E>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: ToString,
    {
        self.excluded = errors.into_iter().map(|e| e.to_string()).collect();
        self
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: ReportFormat) -> Result<String, BenchmarkError> {
        match format {
            ReportFormat::Table => Ok(self.to_table()),
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Millions of samples per second for a completed result.
    fn throughput(&self, result: &BenchmarkResult) -> Option<f64> {
        if !result.is_completed() || result.elapsed_ns == 0 {
            return None;
        }
        let samples = self.length as f64 * self.replications as f64;
        Some(samples / (result.elapsed_ns as f64 / 1e9) / 1e6)
    }

    /// Renders a plain-text table, fastest adapter first.
    pub fn to_table(&self) -> String {
        let name_width = self
            .results
            .iter()
            .map(|r| r.name.len())
            .chain(std::iter::once("Adapter".len()))
            .max()
            .unwrap_or(7);

        let mut out = String::new();
        out.push_str(&format!(
            "normal vectors: length={} replications={} warmup={}\n",
            self.length, self.replications, self.warmup
        ));
        out.push_str(&format!(
            "{:>4}  {:<w$}  {:>12}  {:>14}  {:>9}  {:>10}\n",
            "Rank",
            "Adapter",
            "Replications",
            "Elapsed (ms)",
            "Relative",
            "Msamples/s",
            w = name_width
        ));
        out.push_str(&"-".repeat(4 + 2 + name_width + 2 + 12 + 2 + 14 + 2 + 9 + 2 + 10));
        out.push('\n');

        for result in &self.results {
            match &result.outcome {
                Outcome::Completed { stats } => {
                    let throughput = self
                        .throughput(result)
                        .map(|t| format!("{:.2}", t))
                        .unwrap_or_else(|| "-".to_string());
                    out.push_str(&format!(
                        "{:>4}  {:<w$}  {:>12}  {:>14.3}  {:>9.3}  {:>10}\n",
                        result.rank,
                        result.name,
                        result.replications,
                        stats.total_ms(),
                        result.relative.unwrap_or(f64::NAN),
                        throughput,
                        w = name_width
                    ));
                }
                Outcome::Failed { reason, .. } => {
                    out.push_str(&format!(
                        "{:>4}  {:<w$}  {:>12}  FAILED: {}\n",
                        result.rank,
                        result.name,
                        result.replications,
                        reason,
                        w = name_width
                    ));
                }
            }
        }

        for excluded in &self.excluded {
            out.push_str(&format!("excluded: {}\n", excluded));
        }
        out
    }

    /// Renders the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Normal Vector Benchmark Results\n\n");
        md.push_str(&format!("**Timestamp:** {}\n\n", self.timestamp));

        md.push_str("## Parameters\n\n");
        md.push_str("| Parameter | Value |\n");
        md.push_str("|-----------|-------|\n");
        md.push_str(&format!("| Vector length | {} |\n", self.length));
        md.push_str(&format!("| Replications | {} |\n", self.replications));
        md.push_str(&format!("| Warmup | {} |\n", self.warmup));
        md.push('\n');

        md.push_str("## Results\n\n");
        md.push_str("| Rank | Adapter | Replications | Elapsed (ms) | Relative | Mean (us) | CV (%) |\n");
        md.push_str("|------|---------|--------------|--------------|----------|-----------|--------|\n");
        for result in &self.results {
            match &result.outcome {
                Outcome::Completed { stats } => {
                    md.push_str(&format!(
                        "| {} | {} | {} | {:.3} | {:.3} | {:.2} | {:.1} |\n",
                        result.rank,
                        result.name,
                        result.replications,
                        stats.total_ms(),
                        result.relative.unwrap_or(f64::NAN),
                        stats.mean_us(),
                        stats.cv_percent()
                    ));
                }
                Outcome::Failed { reason, .. } => {
                    md.push_str(&format!(
                        "| {} | {} | {} | FAILED | - | - | - |\n",
                        result.rank, result.name, result.replications
                    ));
                    md.push_str(&format!("\n> {}: {}\n\n", result.name, reason));
                }
            }
        }

        if !self.excluded.is_empty() {
            md.push_str("\n## Excluded Adapters\n\n");
            for excluded in &self.excluded {
                md.push_str(&format!("- {}\n", excluded));
            }
        }

        md
    }

    /// Serialises the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BenchmarkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingStats;

    fn create_test_report() -> Report {
        let config = BenchmarkConfig::new(100, 5);
        let results = vec![
            BenchmarkResult {
                name: "library".to_string(),
                replications: 5,
                elapsed_ns: 2_000_000,
                relative: Some(1.0),
                rank: 1,
                outcome: Outcome::Completed {
                    stats: TimingStats::from_samples(&[400_000; 5]),
                },
            },
            BenchmarkResult {
                name: "standard".to_string(),
                replications: 5,
                elapsed_ns: 0,
                relative: None,
                rank: 2,
                outcome: Outcome::Failed {
                    reason: "Allocation failure".to_string(),
                    completed: 0,
                },
            },
        ];
        Report::new(&config, results).with_excluded(["Engine unavailable: host"])
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("table".parse::<ReportFormat>().unwrap(), ReportFormat::Table);
        assert_eq!("MD".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_table_lists_results_in_rank_order() {
        let table = create_test_report().to_table();
        let library = table.find("library").unwrap();
        let standard = table.find("standard").unwrap();
        assert!(library < standard);
        assert!(table.contains("Relative"));
        assert!(table.contains("2.000"));
        assert!(table.contains("FAILED: Allocation failure"));
        assert!(table.contains("excluded: Engine unavailable: host"));
    }

    #[test]
    fn test_table_throughput() {
        let report = create_test_report();
        // 500 samples in 2ms
        let throughput = report.throughput(&report.results[0]).unwrap();
        assert!((throughput - 0.25).abs() < 1e-12);
        assert!(report.throughput(&report.results[1]).is_none());
    }

    #[test]
    fn test_to_markdown_contains_required_sections() {
        let md = create_test_report().to_markdown();
        assert!(md.contains("# Normal Vector Benchmark Results"));
        assert!(md.contains("## Parameters"));
        assert!(md.contains("| Vector length | 100 |"));
        assert!(md.contains("| 1 | library | 5 |"));
        assert!(md.contains("| 2 | standard | 5 | FAILED |"));
        assert!(md.contains("## Excluded Adapters"));
    }

    #[test]
    fn test_to_json_contains_required_fields() {
        let json = create_test_report().render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["length"], 100);
        assert_eq!(value["replications"], 5);
        assert_eq!(value["results"][0]["name"], "library");
        assert_eq!(value["results"][0]["outcome"]["status"], "completed");
        assert_eq!(value["results"][1]["outcome"]["status"], "failed");
        assert!(value["timestamp"].is_string());
    }
}
