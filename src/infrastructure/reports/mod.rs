//! Report store implementations

mod file;

pub use file::{FileReportStore, DEFAULT_REPORT_PATH};
