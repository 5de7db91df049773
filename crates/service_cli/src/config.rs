//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command line flags.

use normal_bench::ReportFormat;
use normal_core::AdapterKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Benchmark CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Report output format
    pub format: ReportFormat,
    /// Untimed warmup calls per adapter
    pub warmup: usize,
    /// Seed applied to the host RNG before any draw
    pub host_seed: u64,
    /// Adapters to benchmark, in report input order
    pub adapters: Vec<AdapterKind>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: ReportFormat::Table,
            warmup: 0,
            host_seed: normal_core::engine::DEFAULT_HOST_SEED,
            adapters: AdapterKind::ALL.to_vec(),
        }
    }
}

/// Environment variable names
pub mod env {
    pub const LOG_LEVEL: &str = "NORMBENCH_LOG_LEVEL";
    pub const FORMAT: &str = "NORMBENCH_FORMAT";
    pub const WARMUP: &str = "NORMBENCH_WARMUP";
    pub const HOST_SEED: &str = "NORMBENCH_HOST_SEED";
    pub const ADAPTERS: &str = "NORMBENCH_ADAPTERS";
}

/// Parses a comma-separated adapter list
pub fn parse_adapter_list(list: &str) -> Result<Vec<AdapterKind>, ConfigError> {
    let kinds = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| AdapterKind::from_str(s).map_err(|e| ConfigError::Invalid(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(kinds)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(env::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(format) = lookup(env::FORMAT) {
            self.format = ReportFormat::from_str(&format)
                .map_err(|e| ConfigError::EnvError(format!("{}: {}", env::FORMAT, e)))?;
        }

        if let Some(warmup) = lookup(env::WARMUP) {
            self.warmup = warmup
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}: not a count: {}", env::WARMUP, warmup)))?;
        }

        if let Some(seed) = lookup(env::HOST_SEED) {
            self.host_seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}: not a seed: {}", env::HOST_SEED, seed)))?;
        }

        if let Some(list) = lookup(env::ADAPTERS) {
            self.adapters = parse_adapter_list(&list)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adapters.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one adapter must be selected".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(warmup) = cli.warmup {
            self.warmup = warmup;
        }
        if let Some(seed) = cli.host_seed {
            self.host_seed = seed;
        }
        if let Some(adapters) = &cli.adapters {
            self.adapters = adapters.clone();
        }
        Ok(())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Report format override
    pub format: Option<ReportFormat>,
    /// Warmup override
    pub warmup: Option<usize>,
    /// Host seed override
    pub host_seed: Option<u64>,
    /// Adapter list override
    pub adapters: Option<Vec<AdapterKind>>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
