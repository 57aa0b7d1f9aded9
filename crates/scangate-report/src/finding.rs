//! The normalized finding model.

use serde::Serialize;

use crate::severity::Severity;

/// What kind of scan produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Vulnerability,
    Secret,
}

/// One normalized finding from either report shape.
///
/// Immutable once built. Vulnerability findings carry a scanner
/// severity; secret findings always carry [`Severity::Secret`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    /// Scan target the finding was located in (image layer, file path).
    pub target: String,
    /// CVE/advisory id for vulnerabilities, title or rule id for secrets.
    pub identifier: String,
    /// Affected package, vulnerability findings only.
    pub package_name: Option<String>,
    /// Version carrying the fix, when the scanner knows one.
    pub fixed_version: Option<String>,
}

impl Finding {
    /// Build a vulnerability finding.
    #[must_use]
    pub fn vulnerability(
        severity: Severity,
        target: String,
        identifier: String,
        package_name: String,
        fixed_version: Option<String>,
    ) -> Self {
        Self {
            severity,
            kind: FindingKind::Vulnerability,
            target,
            identifier,
            package_name: Some(package_name),
            fixed_version,
        }
    }

    /// Build a secret finding. Severity is always the secret sentinel.
    #[must_use]
    pub fn secret(target: String, identifier: String) -> Self {
        Self {
            severity: Severity::Secret,
            kind: FindingKind::Secret,
            target,
            identifier,
            package_name: None,
            fixed_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerability_finding_shape() {
        let finding = Finding::vulnerability(
            Severity::Critical,
            "alpine:3.19".to_string(),
            "CVE-2024-0001".to_string(),
            "openssl".to_string(),
            Some("3.1.5".to_string()),
        );
        assert_eq!(finding.kind, FindingKind::Vulnerability);
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.package_name.as_deref(), Some("openssl"));
        assert_eq!(finding.fixed_version.as_deref(), Some("3.1.5"));
    }

    #[test]
    fn test_secret_finding_carries_sentinel_severity() {
        let finding = Finding::secret("app/.env".to_string(), "AWS Access Key".to_string());
        assert_eq!(finding.kind, FindingKind::Secret);
        assert_eq!(finding.severity, Severity::Secret);
        assert!(finding.package_name.is_none());
        assert!(finding.fixed_version.is_none());
    }
}
