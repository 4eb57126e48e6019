//! Monitor Event Port
//!
//! The monitor loop reports everything it does through these events.
//! Console rendering, NDJSON streams and tests all consume the same stream.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Event emitted during a monitor run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// Monitor started
    Started {
        provider: String,
        interval_secs: u64,
        max_wait_secs: Option<u64>,
    },

    /// The observed state differs from the previous poll
    StatusChanged {
        at: DateTime<Local>,
        state: String,
        url: String,
        created: Option<DateTime<Utc>>,
    },

    /// Still building or deploying
    Progress,

    /// Deployment reached `ERROR`
    DeploymentFailed { url: String },

    /// Build logs fetched during failure handling
    LogsRetrieved { logs: String },

    /// Build logs could not be fetched
    LogsUnavailable { url: String },

    /// Failure report written
    ReportSaved { path: PathBuf },

    /// Failure report could not be written
    ReportFailed { message: String },

    /// Deployment reached `READY`
    DeploymentSucceeded { url: String },

    /// Platform reported a state the monitor does not handle
    UnknownState { state: String },

    /// No deployment status could be fetched
    StatusUnavailable,

    /// Max wait elapsed while the deployment was still in progress
    TimedOut { waited_secs: u64 },

    /// Interrupted by the user
    Cancelled,

    /// Run finished; `outcome` is `MonitorOutcome::label`
    Finished { outcome: String },
}

impl MonitorEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving monitor events
///
/// Implementations:
/// - the console renderer in the binary
/// - `JsonEventSink`: NDJSON event stream for CI
/// - any `Fn(MonitorEvent)` closure
pub trait MonitorEventSink {
    /// Handle a monitor event
    fn on_event(&self, event: MonitorEvent);
}

impl<F: Fn(MonitorEvent)> MonitorEventSink for F {
    fn on_event(&self, event: MonitorEvent) {
        self(event)
    }
}
