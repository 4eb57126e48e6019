//! Report Store Port
//!
//! Where failure reports are persisted.

use std::path::PathBuf;

use crate::domain::entities::FailureReport;
use crate::error::DeployWatchResult;

/// Persists failure reports.
pub trait ReportStore {
    /// Write the report, replacing any previous one. Returns where it went.
    fn save(&self, report: &FailureReport) -> DeployWatchResult<PathBuf>;
}

impl<R: ReportStore + ?Sized> ReportStore for &R {
    fn save(&self, report: &FailureReport) -> DeployWatchResult<PathBuf> {
        (**self).save(report)
    }
}
