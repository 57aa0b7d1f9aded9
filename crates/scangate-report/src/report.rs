//! Serde models for the two Trivy report shapes and flattening into
//! findings.
//!
//! Trivy emits nested, nullable structures: a report holds a list of
//! results per target, each holding a list of vulnerability or secret
//! records. Any of those lists may be absent or `null`; absence
//! flattens to zero findings, never an error.

use camino::Utf8Path;
use serde::Deserialize;
use tracing::warn;

use scangate_utils::ScanGateError;

use crate::finding::Finding;
use crate::severity::Severity;

/// Top-level vulnerability scan report.
#[derive(Debug, Clone, Deserialize)]
pub struct VulnerabilityReport {
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<VulnerabilityResult>>,
}

/// One scanned target's vulnerability results.
#[derive(Debug, Clone, Deserialize)]
pub struct VulnerabilityResult {
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Vulnerabilities", default)]
    pub vulnerabilities: Option<Vec<VulnerabilityRecord>>,
}

/// One vulnerability record as the scanner reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct VulnerabilityRecord {
    #[serde(rename = "Severity")]
    pub severity: String,
    #[serde(rename = "PkgName")]
    pub pkg_name: String,
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: String,
    #[serde(rename = "FixedVersion", default)]
    pub fixed_version: Option<String>,
}

/// Top-level secret scan report.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretReport {
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<SecretResult>>,
}

/// One scanned target's secret results.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretResult {
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Secrets", default)]
    pub secrets: Option<Vec<SecretRecord>>,
}

/// One secret record as the scanner reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretRecord {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "RuleID", default)]
    pub rule_id: Option<String>,
}

/// A loaded report of either shape, behind one flattening interface.
#[derive(Debug, Clone)]
pub enum ScanReport {
    Vulnerabilities(VulnerabilityReport),
    Secrets(SecretReport),
}

impl ScanReport {
    /// Load and parse a vulnerability report from disk.
    pub fn load_vulnerabilities(path: &Utf8Path) -> Result<Self, ScanGateError> {
        let report = read_report(path)?;
        Ok(ScanReport::Vulnerabilities(report))
    }

    /// Load and parse a secret report from disk.
    pub fn load_secrets(path: &Utf8Path) -> Result<Self, ScanGateError> {
        let report = read_report(path)?;
        Ok(ScanReport::Secrets(report))
    }

    /// Flatten the report into normalized findings.
    ///
    /// This is the only construction site for [`Finding`] values fed to
    /// policy evaluation. Vulnerability records with a severity outside
    /// the scanner vocabulary are kept as [`Severity::Unknown`] and
    /// logged, so a scanner vocabulary change is visible rather than
    /// silently blocking or passing.
    #[must_use]
    pub fn findings(&self) -> Vec<Finding> {
        match self {
            ScanReport::Vulnerabilities(report) => report
                .results
                .iter()
                .flatten()
                .flat_map(|result| {
                    result
                        .vulnerabilities
                        .iter()
                        .flatten()
                        .map(|record| vulnerability_finding(&result.target, record))
                })
                .collect(),
            ScanReport::Secrets(report) => report
                .results
                .iter()
                .flatten()
                .flat_map(|result| {
                    result
                        .secrets
                        .iter()
                        .flatten()
                        .map(|record| secret_finding(&result.target, record))
                })
                .collect(),
        }
    }
}

fn vulnerability_finding(target: &str, record: &VulnerabilityRecord) -> Finding {
    let severity = Severity::from_scanner(&record.severity).unwrap_or_else(|| {
        warn!(
            severity = %record.severity,
            id = %record.vulnerability_id,
            target = %target,
            "unrecognized severity value, treating as UNKNOWN"
        );
        Severity::Unknown
    });

    Finding::vulnerability(
        severity,
        target.to_string(),
        record.vulnerability_id.clone(),
        record.pkg_name.clone(),
        record.fixed_version.clone(),
    )
}

fn secret_finding(target: &str, record: &SecretRecord) -> Finding {
    let identifier = record
        .title
        .clone()
        .or_else(|| record.rule_id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    Finding::secret(target.to_string(), identifier)
}

fn read_report<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, ScanGateError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanGateError::ReportRead {
        path: path.to_owned(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ScanGateError::ReportParse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_vuln(json: &str) -> ScanReport {
        ScanReport::Vulnerabilities(serde_json::from_str(json).unwrap())
    }

    fn parse_secret(json: &str) -> ScanReport {
        ScanReport::Secrets(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_flatten_vulnerabilities() {
        let report = parse_vuln(
            r#"{
                "Results": [
                    {
                        "Target": "alpine:3.19 (alpine 3.19.1)",
                        "Vulnerabilities": [
                            {
                                "Severity": "CRITICAL",
                                "PkgName": "openssl",
                                "VulnerabilityID": "CVE-2024-0001",
                                "FixedVersion": "3.1.5"
                            },
                            {
                                "Severity": "LOW",
                                "PkgName": "busybox",
                                "VulnerabilityID": "CVE-2024-0002"
                            }
                        ]
                    }
                ]
            }"#,
        );

        let findings = report.findings();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].identifier, "CVE-2024-0001");
        assert_eq!(findings[0].fixed_version.as_deref(), Some("3.1.5"));
        assert_eq!(findings[1].severity, Severity::Low);
        assert!(findings[1].fixed_version.is_none());
    }

    #[test]
    fn test_null_results_flatten_to_nothing() {
        assert!(parse_vuln(r#"{"Results": null}"#).findings().is_empty());
        assert!(parse_vuln(r#"{}"#).findings().is_empty());
        assert!(
            parse_vuln(r#"{"Results": [{"Target": "t", "Vulnerabilities": null}]}"#)
                .findings()
                .is_empty()
        );
        assert!(parse_secret(r#"{"Results": null}"#).findings().is_empty());
    }

    #[test]
    fn test_unrecognized_severity_maps_to_unknown() {
        let report = parse_vuln(
            r#"{
                "Results": [
                    {
                        "Target": "t",
                        "Vulnerabilities": [
                            {
                                "Severity": "critical",
                                "PkgName": "p",
                                "VulnerabilityID": "CVE-1"
                            }
                        ]
                    }
                ]
            }"#,
        );

        let findings = report.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Unknown);
    }

    #[test]
    fn test_secret_identifier_fallback_chain() {
        let report = parse_secret(
            r#"{
                "Results": [
                    {
                        "Target": "app/.env",
                        "Secrets": [
                            {"Title": "AWS Access Key", "RuleID": "aws-access-key-id"},
                            {"RuleID": "github-pat"},
                            {}
                        ]
                    }
                ]
            }"#,
        );

        let findings = report.findings();
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.kind == FindingKind::Secret));
        assert_eq!(findings[0].identifier, "AWS Access Key");
        assert_eq!(findings[1].identifier, "github-pat");
        assert_eq!(findings[2].identifier, "unknown");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = ScanReport::load_vulnerabilities(Utf8Path::new("/nonexistent/report.json"))
            .unwrap_err();
        assert!(matches!(err, ScanGateError::ReportRead { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let err = ScanReport::load_vulnerabilities(path).unwrap_err();
        assert!(matches!(err, ScanGateError::ReportParse { .. }));
    }

    #[test]
    fn test_load_valid_report_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"Results": []}"#).unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let report = ScanReport::load_secrets(path).unwrap();
        assert!(report.findings().is_empty());
    }
}
