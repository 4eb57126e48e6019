//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deployment_provider;
pub mod monitor_events;
pub mod report_store;

pub use deployment_provider::DeploymentProvider;
pub use monitor_events::{MonitorEvent, MonitorEventSink};
pub use report_store::ReportStore;
