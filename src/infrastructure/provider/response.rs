//! Parsing of `ls --json` output.

use serde::Deserialize;

use super::ProviderError;
use crate::domain::entities::DeploymentRecord;

/// Either a bare list or the API-style `{"deployments": [...]}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse {
    List(Vec<DeploymentRecord>),
    Envelope { deployments: Vec<DeploymentRecord> },
}

/// Parse the deployment listing and return its first entry.
///
/// `Ok(None)` means the listing was valid but empty.
pub fn parse_deployment_list(output: &str) -> Result<Option<DeploymentRecord>, ProviderError> {
    let output = output.trim();
    if output.is_empty() {
        return Err(ProviderError::EmptyOutput);
    }

    let deployments = match serde_json::from_str(output)? {
        ListResponse::List(deployments) => deployments,
        ListResponse::Envelope { deployments } => deployments,
    };

    Ok(deployments.into_iter().next())
}
