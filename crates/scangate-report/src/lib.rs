//! Trivy report models and finding normalization.
//!
//! Two report shapes come in (vulnerability scan and secret scan); one
//! uniform [`Finding`] stream comes out. Everything downstream of this
//! crate works on findings, never on raw report structures.

pub mod finding;
pub mod report;
pub mod severity;

pub use finding::{Finding, FindingKind};
pub use report::{ScanReport, SecretReport, VulnerabilityReport};
pub use severity::Severity;
