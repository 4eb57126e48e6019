//! File-backed report store

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::FailureReport;
use crate::domain::ports::ReportStore;
use crate::error::{DeployWatchError, DeployWatchResult};

/// Default report filename, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "vercel-error-logs.txt";

/// Writes the failure report to a single fixed path, overwriting it.
#[derive(Debug, Clone)]
pub struct FileReportStore {
    path: PathBuf,
}

impl FileReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for FileReportStore {
    fn save(&self, report: &FailureReport) -> DeployWatchResult<PathBuf> {
        fs::write(&self.path, report.render()).map_err(|source| DeployWatchError::ReportWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path.clone())
    }
}
