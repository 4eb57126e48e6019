//! Deployment provider implementations

mod response;
mod vercel_cli;

use thiserror::Error;

pub use response::parse_deployment_list;
pub use vercel_cli::{VercelCli, DEFAULT_PROGRAM};

/// Why a provider call produced nothing usable.
///
/// Never crosses the `DeploymentProvider` port; it only feeds diagnostics.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with code {code:?}")]
    NonZeroExit { program: String, code: Option<i32> },

    #[error("command produced no output")]
    EmptyOutput,

    #[error("unexpected response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
