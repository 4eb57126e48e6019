//! Configuration module for deploywatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYWATCH_*)
//! 3. `--config <path>`, else `./deploywatch.toml`, else
//!    `<config dir>/deploywatch/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, LogsConfig, OutputConfig, PollConfig, ProviderConfig};
