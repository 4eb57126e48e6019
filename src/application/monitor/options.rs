//! Monitor options

use std::time::Duration;

use crate::config::Config;

/// Default pause between polls while a deployment is in progress
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default number of log lines fetched on failure
pub const DEFAULT_LOG_LIMIT: u32 = 200;

/// Options for a monitor run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorOptions {
    /// Pause between polls while in progress
    pub interval: Duration,
    /// Give up after this long; `None` polls forever
    pub max_wait: Option<Duration>,
    /// Log lines to fetch when the deployment fails
    pub log_limit: u32,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl MonitorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: Duration::from_secs(config.poll.interval_secs),
            max_wait: config.poll.max_wait(),
            log_limit: config.logs.limit,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_log_limit(mut self, log_limit: u32) -> Self {
        self.log_limit = log_limit;
        self
    }
}
