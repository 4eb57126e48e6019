//! Failure report persisted when a deployment ends in `ERROR`.

use chrono::{DateTime, Local};

/// Separator line between the report header and the log body.
pub const REPORT_SEPARATOR_WIDTH: usize = 60;

/// Body written in place of logs that could not be retrieved.
pub const LOGS_UNAVAILABLE: &str = "(logs unavailable)";

/// Header plus captured logs for a failed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    failed_at: DateTime<Local>,
    url: String,
    logs: Option<String>,
}

impl FailureReport {
    pub fn new(failed_at: DateTime<Local>, url: impl Into<String>, logs: Option<String>) -> Self {
        Self {
            failed_at,
            url: url.into(),
            logs,
        }
    }

    /// Render the plain-text report file contents.
    ///
    /// The header is always present; the body is the raw log text or the
    /// `(logs unavailable)` marker.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Deployment failed at {}\n",
            self.failed_at.format("%Y-%m-%d %H:%M:%S%.6f")
        ));
        out.push_str(&format!("URL: https://{}\n", self.url));
        out.push_str(&"=".repeat(REPORT_SEPARATOR_WIDTH));
        out.push('\n');
        out.push_str(self.logs.as_deref().unwrap_or(LOGS_UNAVAILABLE));
        out.push('\n');
        out
    }
}
