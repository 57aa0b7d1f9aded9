//! Default path resolution for scan reports and the result document.
//!
//! The build pipeline runs one gate per target architecture, so every
//! path carries the release version and architecture. Defaults come
//! from `RELEASE_VERSION`, `TARGETARCH`, and `SCAN_REPORT_DIR`;
//! explicit CLI arguments override them per file.

use camino::{Utf8Path, Utf8PathBuf};

/// Environment variable naming the release version under scan.
pub const RELEASE_VERSION_ENV: &str = "RELEASE_VERSION";

/// Environment variable naming the target architecture under scan.
pub const TARGETARCH_ENV: &str = "TARGETARCH";

/// Environment variable naming the directory holding scan reports.
pub const SCAN_REPORT_DIR_ENV: &str = "SCAN_REPORT_DIR";

/// Fallback release version when `RELEASE_VERSION` is unset.
pub const DEFAULT_VERSION: &str = "dev";

/// Fallback report directory when `SCAN_REPORT_DIR` is unset.
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Identifies one gate invocation: which release and architecture the
/// reports describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIdentity {
    pub version: String,
    pub arch: String,
}

impl ScanIdentity {
    /// Resolve the identity from the environment.
    ///
    /// Unset or empty variables fall back to `dev` and the host
    /// architecture.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the identity from an injectable lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let version = lookup(RELEASE_VERSION_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let arch = lookup(TARGETARCH_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| std::env::consts::ARCH.to_string());
        Self { version, arch }
    }
}

/// The three paths one gate run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Required Trivy vulnerability report.
    pub vuln: Utf8PathBuf,
    /// Optional Trivy secret report.
    pub secret: Utf8PathBuf,
    /// Result document written by the gate.
    pub result: Utf8PathBuf,
}

impl ReportPaths {
    /// Build the default paths for an identity under a base directory.
    #[must_use]
    pub fn defaults(base: &Utf8Path, identity: &ScanIdentity) -> Self {
        let ScanIdentity { version, arch } = identity;
        Self {
            vuln: base.join(format!("trivy-vuln-{version}-{arch}.json")),
            secret: base.join(format!("trivy-secret-{version}-{arch}.json")),
            result: base.join(format!("scan-result-{version}-{arch}.json")),
        }
    }

    /// Resolve the working paths: defaults from the environment, each
    /// overridable by an explicit CLI argument.
    #[must_use]
    pub fn resolve(
        identity: &ScanIdentity,
        vuln_arg: Option<Utf8PathBuf>,
        result_arg: Option<Utf8PathBuf>,
        secret_arg: Option<Utf8PathBuf>,
    ) -> Self {
        let base = std::env::var(SCAN_REPORT_DIR_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_REPORT_DIR), Utf8PathBuf::from);
        let defaults = Self::defaults(&base, identity);

        Self {
            vuln: vuln_arg.unwrap_or(defaults.vuln),
            secret: secret_arg.unwrap_or(defaults.secret),
            result: result_arg.unwrap_or(defaults.result),
        }
    }
}
