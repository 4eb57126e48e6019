//! Monitor outcome value object - how a monitor run ended.

use std::path::PathBuf;
use std::time::Duration;

/// Why a run ended without a success/failure classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InconclusiveReason {
    /// No status could be fetched (command failure, bad JSON, empty list)
    NoDeployment,
    /// The platform reported a state the monitor does not know
    UnknownState(String),
}

/// Terminal result of `MonitorUseCase::run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorOutcome {
    Succeeded {
        url: String,
    },
    Failed {
        url: String,
        /// Where the failure report landed, `None` if writing it failed
        report: Option<PathBuf>,
    },
    Inconclusive(InconclusiveReason),
    TimedOut {
        waited: Duration,
    },
    Cancelled,
}

impl MonitorOutcome {
    /// Stable lowercase label used in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            MonitorOutcome::Succeeded { .. } => "success",
            MonitorOutcome::Failed { .. } => "failure",
            MonitorOutcome::Inconclusive(_) => "inconclusive",
            MonitorOutcome::TimedOut { .. } => "timed_out",
            MonitorOutcome::Cancelled => "cancelled",
        }
    }

    /// Process exit code when `--exit-code` is requested.
    pub fn exit_code(&self) -> i32 {
        match self {
            MonitorOutcome::Succeeded { .. } => 0,
            MonitorOutcome::Failed { .. } => 1,
            MonitorOutcome::Inconclusive(_) | MonitorOutcome::TimedOut { .. } => 2,
            MonitorOutcome::Cancelled => 130,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_outcomes() {
        let success = MonitorOutcome::Succeeded { url: "x".into() };
        let failure = MonitorOutcome::Failed {
            url: "x".into(),
            report: None,
        };
        let unknown = MonitorOutcome::Inconclusive(InconclusiveReason::UnknownState("Q".into()));
        let timed_out = MonitorOutcome::TimedOut {
            waited: Duration::from_secs(1),
        };

        assert_eq!(success.exit_code(), 0);
        assert_eq!(failure.exit_code(), 1);
        assert_eq!(unknown.exit_code(), 2);
        assert_eq!(timed_out.exit_code(), 2);
        assert_eq!(MonitorOutcome::Cancelled.exit_code(), 130);
    }

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(
            MonitorOutcome::Inconclusive(InconclusiveReason::NoDeployment).label(),
            "inconclusive"
        );
        assert_eq!(
            MonitorOutcome::TimedOut {
                waited: Duration::ZERO
            }
            .label(),
            "timed_out"
        );
    }
}
