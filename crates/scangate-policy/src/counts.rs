//! Severity counting over normalized findings.

use serde::Serialize;

use scangate_report::{Finding, FindingKind, Severity};

/// Counts per policy-relevant bucket.
///
/// Secrets are one undifferentiated bucket; LOW and UNKNOWN
/// vulnerabilities carry no policy weight and are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub secrets: u64,
}

impl SeverityCounts {
    /// Tally findings into buckets in one pass.
    #[must_use]
    pub fn tally(findings: &[Finding]) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            match finding.kind {
                FindingKind::Secret => counts.secrets += 1,
                FindingKind::Vulnerability => match finding.severity {
                    Severity::Critical => counts.critical += 1,
                    Severity::High => counts.high += 1,
                    Severity::Medium => counts.medium += 1,
                    Severity::Low | Severity::Unknown | Severity::Secret => {}
                },
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vuln(severity: Severity, id: &str) -> Finding {
        Finding::vulnerability(
            severity,
            "target".to_string(),
            id.to_string(),
            "pkg".to_string(),
            None,
        )
    }

    #[test]
    fn test_tally_buckets() {
        let findings = vec![
            vuln(Severity::Critical, "CVE-1"),
            vuln(Severity::Critical, "CVE-2"),
            vuln(Severity::High, "CVE-3"),
            vuln(Severity::Medium, "CVE-4"),
            Finding::secret("f".to_string(), "rule".to_string()),
        ];

        let counts = SeverityCounts::tally(&findings);
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.secrets, 1);
    }

    #[test]
    fn test_low_and_unknown_are_not_counted() {
        let findings = vec![
            vuln(Severity::Low, "CVE-1"),
            vuln(Severity::Unknown, "CVE-2"),
        ];
        assert_eq!(SeverityCounts::tally(&findings), SeverityCounts::default());
    }

    #[test]
    fn test_empty_findings() {
        assert_eq!(SeverityCounts::tally(&[]), SeverityCounts::default());
    }
}
