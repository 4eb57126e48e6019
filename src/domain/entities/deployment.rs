//! Deployment status record as reported by the platform CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State string used when the platform omits one.
pub const UNKNOWN_STATE: &str = "UNKNOWN";

/// One deployment, as returned by a single status query.
///
/// Built fresh on every poll and dropped once the loop has classified it.
/// Unknown fields in the platform's JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Raw state string (`BUILDING`, `READY`, ...)
    #[serde(default, alias = "readyState")]
    state: Option<String>,

    /// Host name of the deployment, without scheme
    #[serde(default)]
    url: String,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    created: Option<i64>,
}

impl DeploymentRecord {
    pub fn new(state: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            url: url.into(),
            created: None,
        }
    }

    pub fn with_created(mut self, created_ms: i64) -> Self {
        self.created = Some(created_ms);
        self
    }

    /// Raw state, `UNKNOWN` when the platform did not report one.
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or(UNKNOWN_STATE)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Full `https://` address of the deployment.
    pub fn address(&self) -> String {
        format!("https://{}", self.url)
    }

    /// Creation time, if present and representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(DateTime::from_timestamp_millis)
    }
}
