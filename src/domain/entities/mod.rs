//! Domain entities

pub mod deployment;
pub mod failure_report;

pub use deployment::{DeploymentRecord, UNKNOWN_STATE};
pub use failure_report::{FailureReport, LOGS_UNAVAILABLE, REPORT_SEPARATOR_WIDTH};
