//! scangate - Build-pipeline security gate over container scan reports
//!
//! scangate sits between a container scanner and the rest of a build
//! pipeline: it reads the scanner's vulnerability report (and an
//! optional secret report), counts findings per severity bucket,
//! applies an operator-configured blocking policy, writes a canonical
//! JSON result document, and signals the verdict through its exit code.
//!
//! # Quick Start
//!
//! ```bash
//! # Gate on the default report paths (reports/trivy-vuln-<version>-<arch>.json)
//! scangate
//!
//! # Explicit paths
//! scangate reports/vuln.json reports/result.json reports/secret.json
//! ```
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Reports evaluated, policy allows the build |
//! | 1 | Reports evaluated, policy blocks the build |
//! | 2 | Inputs missing, unreadable, or unparsable (no result written) |
//!
//! # Result Document
//!
//! The result document is emitted in JCS (RFC 8785) canonical form, so
//! identical reports always produce a byte-identical document:
//!
//! ```json
//! {"block":true,"critical":2,"high":0,"medium":0,"reasons":["critical"],"secrets":0}
//! ```

pub mod cli;

pub use scangate_policy::{GateDecision, Reason, SeverityCounts, ThresholdSet};
pub use scangate_report::{Finding, FindingKind, ScanReport, Severity};
pub use scangate_utils::{ExitCode, ReportPaths, ScanGateError, emit_jcs};
