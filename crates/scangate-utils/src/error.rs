//! Error types for scangate.
//!
//! All failure modes the gate can hit before reaching a policy decision
//! are validation errors: the exit-code contract reserves `2` for them
//! and guarantees no result document is written on that path.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Errors raised while locating, reading, or parsing scan reports and
/// while persisting the result document.
#[derive(Error, Debug)]
pub enum ScanGateError {
    /// The required vulnerability report does not exist at the resolved path.
    #[error("vulnerability report not found: {path}")]
    VulnReportMissing { path: Utf8PathBuf },

    /// A report file exists but could not be read.
    #[error("failed to read report {path}")]
    ReportRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file was read but is not valid JSON in the expected shape.
    #[error("failed to parse report {path}")]
    ReportParse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The result document could not be written.
    #[error("failed to write result document {path}: {reason}")]
    ResultWrite { path: Utf8PathBuf, reason: String },

    /// Other I/O failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanGateError {
    /// Map this error to its exit code.
    ///
    /// Every `ScanGateError` surfaces before a gate decision is made,
    /// so the whole enum maps to [`ExitCode::VALIDATION`].
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::VALIDATION
    }
}
