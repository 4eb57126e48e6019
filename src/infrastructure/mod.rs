//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `provider/` - Platform CLI provider (Vercel)
//! - `reports/` - Failure report storage (local file)
//! - `events/` - Machine-readable event output (NDJSON)

pub mod events;
pub mod provider;
pub mod reports;

pub use events::JsonEventSink;
pub use provider::{parse_deployment_list, ProviderError, VercelCli};
pub use reports::{FileReportStore, DEFAULT_REPORT_PATH};
