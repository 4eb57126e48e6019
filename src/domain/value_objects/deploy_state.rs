//! Deploy state value object - classification of the platform's raw state string.

use crate::domain::entities::DeploymentRecord;

/// Classified deployment state.
///
/// - `InProgress`: `BUILDING` or `DEPLOYING`; polling continues
/// - `Failed`: `ERROR`
/// - `Succeeded`: `READY`
/// - `Unknown`: any other string, kept verbatim
/// - `Absent`: no usable status at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployState {
    InProgress,
    Failed,
    Succeeded,
    Unknown(String),
    Absent,
}

impl DeployState {
    /// Classify a raw state string. Matching is exact and case-sensitive.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "BUILDING" | "DEPLOYING" => DeployState::InProgress,
            "ERROR" => DeployState::Failed,
            "READY" => DeployState::Succeeded,
            other => DeployState::Unknown(other.to_string()),
        }
    }

    /// Classify the result of a status query.
    pub fn classify(record: Option<&DeploymentRecord>) -> Self {
        match record {
            Some(record) => Self::from_raw(record.state()),
            None => DeployState::Absent,
        }
    }

    /// Whether the loop stops after seeing this state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeployState::InProgress)
    }
}
