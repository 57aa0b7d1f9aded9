//! The closed severity vocabulary.

use serde::{Deserialize, Serialize};

/// Severity of a finding.
///
/// The first five variants mirror the scanner's own vocabulary and are
/// matched case-sensitively against report values. `Secret` is a
/// sentinel assigned by the gate to secret findings; it never appears
/// in scanner output and [`from_scanner`](Self::from_scanner) never
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
    Secret,
}

impl Severity {
    /// The scanner-facing string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
            Severity::Secret => "SECRET",
        }
    }

    /// Match a severity string from a vulnerability record.
    ///
    /// Exact, case-sensitive. Returns `None` for values outside the
    /// scanner vocabulary; the caller decides how to surface those.
    #[must_use]
    pub fn from_scanner(value: &str) -> Option<Self> {
        match value {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            "UNKNOWN" => Some(Severity::Unknown),
            _ => None,
        }
    }
}
