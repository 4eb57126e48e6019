//! Use Case Factory
//!
//! Wires use cases to their infrastructure dependencies.

use crate::application::{MonitorOptions, MonitorUseCase};
use crate::config::Config;
use crate::infrastructure::{FileReportStore, VercelCli};

/// Platform CLI provider configured from `[provider]`.
pub fn create_provider(config: &Config) -> VercelCli {
    VercelCli::new(config.provider.command.as_str()).with_args(config.provider.args.clone())
}

/// Monitor use case backed by the platform CLI and a report file.
pub fn create_monitor_use_case(config: &Config) -> MonitorUseCase<VercelCli, FileReportStore> {
    MonitorUseCase::new(
        create_provider(config),
        FileReportStore::new(config.logs.report_path.clone()),
        MonitorOptions::from_config(config),
    )
}
