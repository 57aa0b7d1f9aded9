//! Shared infrastructure for scangate.
//!
//! This crate carries the ambient concerns the gate crates build on:
//! the error type and its exit-code mapping, atomic file writes for the
//! result document, JCS-canonical JSON emission, tracing setup, and the
//! version/architecture path template used to locate scan reports.

pub mod atomic_write;
pub mod canonical;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod paths;

pub use atomic_write::write_file_atomic;
pub use canonical::emit_jcs;
pub use error::ScanGateError;
pub use exit_codes::ExitCode;
pub use logging::init_tracing;
pub use paths::ReportPaths;
