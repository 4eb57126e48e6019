//! deploywatch - follow a platform deployment until it finishes
//!
//! Polls the platform CLI (Vercel by default) for the most recent deployment,
//! reports state transitions, and when the build fails saves its logs to a
//! local report file.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{CancellationToken, MonitorOptions, MonitorUseCase};
pub use config::Config;
pub use domain::entities::{DeploymentRecord, FailureReport};
pub use domain::ports::{DeploymentProvider, MonitorEvent, MonitorEventSink, ReportStore};
pub use domain::value_objects::{DeployState, InconclusiveReason, MonitorOutcome};
pub use error::{DeployWatchError, DeployWatchResult};
pub use infrastructure::{parse_deployment_list, FileReportStore, JsonEventSink, VercelCli};
