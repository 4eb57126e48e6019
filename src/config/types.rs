//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{DEFAULT_LOG_LIMIT, DEFAULT_POLL_INTERVAL};
use crate::error::DeployWatchResult;
use crate::infrastructure::provider::DEFAULT_PROGRAM;
use crate::infrastructure::reports::DEFAULT_REPORT_PATH;

use super::loader;

/// Platform CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before each subcommand
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

fn default_command() -> String {
    DEFAULT_PROGRAM.to_string()
}

/// Polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// 0 means no limit
    #[serde(default)]
    pub max_wait_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_wait_secs: 0,
        }
    }
}

impl PollConfig {
    pub fn max_wait(&self) -> Option<Duration> {
        match self.max_wait_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn default_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

/// Failure log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_limit")]
    pub limit: u32,

    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            limit: default_log_limit(),
            report_path: default_report_path(),
        }
    }
}

fn default_log_limit() -> u32 {
    DEFAULT_LOG_LIMIT
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployWatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }
}
