//! One-shot status and log queries.

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::DeploymentProvider;
use crate::domain::value_objects::DeployState;

/// Snapshot of the latest deployment, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub record: Option<DeploymentRecord>,
    pub state: DeployState,
}

/// Fetch the latest deployment once.
pub fn check_status(provider: &impl DeploymentProvider) -> StatusSnapshot {
    let record = provider.latest_status();
    let state = DeployState::classify(record.as_ref());
    StatusSnapshot { record, state }
}

/// Fetch logs once; empty output counts as no logs.
pub fn fetch_logs(provider: &impl DeploymentProvider, address: &str, limit: u32) -> Option<String> {
    provider
        .logs(address, limit)
        .filter(|logs| !logs.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Option<DeploymentRecord>, Option<String>);

    impl DeploymentProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn latest_status(&self) -> Option<DeploymentRecord> {
            self.0.clone()
        }

        fn logs(&self, _address: &str, _limit: u32) -> Option<String> {
            self.1.clone()
        }
    }

    #[test]
    fn check_status_classifies_record() {
        let provider = FixedProvider(Some(DeploymentRecord::new("READY", "x.example.com")), None);
        let snapshot = check_status(&provider);

        assert_eq!(snapshot.state, DeployState::Succeeded);
        assert_eq!(snapshot.record.unwrap().url(), "x.example.com");
    }

    #[test]
    fn check_status_without_record_is_absent() {
        let snapshot = check_status(&FixedProvider(None, None));
        assert_eq!(snapshot.state, DeployState::Absent);
        assert!(snapshot.record.is_none());
    }

    #[test]
    fn fetch_logs_drops_empty_output() {
        let provider = FixedProvider(None, Some(String::new()));
        assert_eq!(fetch_logs(&provider, "x.example.com", 10), None);

        let provider = FixedProvider(None, Some("line".to_string()));
        assert_eq!(fetch_logs(&provider, "x.example.com", 10).as_deref(), Some("line"));
    }
}
