//! Vercel CLI Provider
//!
//! Shells out to the `vercel` command-line tool. The tool is expected to be
//! installed and already authenticated.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::response::parse_deployment_list;
use super::ProviderError;
use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::DeploymentProvider;

/// Default program name
pub const DEFAULT_PROGRAM: &str = "vercel";

/// Deployment provider backed by the platform CLI.
#[derive(Debug, Clone)]
pub struct VercelCli {
    program: String,
    /// Placed before every subcommand (e.g. `--scope my-team`)
    prefix_args: Vec<String>,
}

impl VercelCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }

    /// Latest deployment, keeping the failure cause.
    pub fn try_latest_status(&self) -> Result<Option<DeploymentRecord>, ProviderError> {
        let output = self.run(&["ls", "--limit", "1", "--json"])?;
        parse_deployment_list(&output)
    }

    /// Logs for one deployment, keeping the failure cause.
    pub fn try_logs(&self, address: &str, limit: u32) -> Result<String, ProviderError> {
        let limit = limit.to_string();
        self.run(&["logs", address, "--limit", limit.as_str()])
    }

    fn run(&self, args: &[&str]) -> Result<String, ProviderError> {
        trace!(program = %self.program, prefix = ?self.prefix_args, ?args, "spawning");

        let output = Command::new(&self.program)
            .args(&self.prefix_args)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProviderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProviderError::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl DeploymentProvider for VercelCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn latest_status(&self) -> Option<DeploymentRecord> {
        match self.try_latest_status() {
            Ok(record) => {
                if record.is_none() {
                    debug!("deployment listing was empty");
                }
                record
            }
            Err(e) => {
                debug!(error = %e, "latest status unavailable");
                None
            }
        }
    }

    fn logs(&self, address: &str, limit: u32) -> Option<String> {
        match self.try_logs(address, limit) {
            Ok(logs) => Some(logs),
            Err(e) => {
                debug!(error = %e, address, "logs unavailable");
                None
            }
        }
    }
}
