//! Deployment Provider Port
//!
//! The capability boundary around the platform: "what is the latest
//! deployment" and "give me its logs". Every failure on the far side of this
//! boundary is collapsed into `None`.

use crate::domain::entities::DeploymentRecord;

/// Source of deployment status and build logs.
pub trait DeploymentProvider {
    /// Short name for headers and diagnostics (e.g. the CLI program name)
    fn name(&self) -> &str;

    /// Most recent deployment, or `None` if nothing usable came back.
    fn latest_status(&self) -> Option<DeploymentRecord>;

    /// Up to `limit` log lines for the deployment at `address`, trimmed.
    fn logs(&self, address: &str, limit: u32) -> Option<String>;
}

impl<P: DeploymentProvider + ?Sized> DeploymentProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn latest_status(&self) -> Option<DeploymentRecord> {
        (**self).latest_status()
    }

    fn logs(&self, address: &str, limit: u32) -> Option<String> {
        (**self).logs(address, limit)
    }
}
