//! Application Layer
//!
//! Use cases that orchestrate the flow between ports.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT know how the platform is reached or where reports land
//!
//! ## Use Cases
//!
//! - `MonitorUseCase` - Polls until the latest deployment reaches a terminal state
//! - `check_status` / `fetch_logs` - One-shot queries

pub mod cancel;
pub mod monitor;
pub mod status;

pub use cancel::CancellationToken;
pub use monitor::{MonitorOptions, MonitorUseCase, DEFAULT_LOG_LIMIT, DEFAULT_POLL_INTERVAL};
pub use status::{check_status, fetch_logs, StatusSnapshot};
