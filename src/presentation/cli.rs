//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --cli) are inherited by all subcommands
//! - Running without a subcommand is the same as `deploywatch watch`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, Config};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// deploywatch - follow the latest deployment until it finishes
#[derive(Parser, Debug)]
#[command(name = "deploywatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'deploywatch' without arguments to watch the latest deployment.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./deploywatch.toml, then user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Platform CLI program to run
    #[arg(long = "cli", global = true, value_name = "PROGRAM")]
    pub program: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the latest deployment until it succeeds or fails
    Watch(WatchArgs),

    /// Show the latest deployment once
    Status,

    /// Print build logs for a deployment
    Logs {
        /// Deployment host name (e.g. myapp-abc123.vercel.app)
        address: String,

        /// Number of log lines
        #[arg(long, value_name = "N")]
        limit: Option<u32>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchArgs {
    /// Seconds between polls while building
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Give up after this many seconds (0 = never)
    #[arg(long, value_name = "SECS")]
    pub max_wait: Option<u64>,

    /// Log lines to fetch when the deployment fails
    #[arg(long, value_name = "N")]
    pub log_limit: Option<u32>,

    /// Where to write the failure report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Exit non-zero when the deployment fails or the result is inconclusive
    #[arg(long)]
    pub exit_code: bool,
}

impl Cli {
    /// Apply global flag overrides on top of file/env configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(program) = &self.program {
            config.provider.command = program.clone();
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
    }
}

impl WatchArgs {
    /// Apply `watch` flag overrides on top of file/env configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(interval) = self.interval {
            config.poll.interval_secs = interval;
        }
        if let Some(max_wait) = self.max_wait {
            config.poll.max_wait_secs = max_wait;
        }
        if let Some(limit) = self.log_limit {
            config.logs.limit = limit;
        }
        if let Some(report) = &self.report {
            config.logs.report_path = report.clone();
        }
    }
}
