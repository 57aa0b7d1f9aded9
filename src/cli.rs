//! Command-line interface for scangate
//!
//! This module provides argument parsing and the single gate operation:
//! resolve paths, load reports, evaluate the policy, persist the result
//! document, and map the outcome to an exit code.

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{debug, error, info, warn};

use crate::{ExitCode, Finding, FindingKind, ScanGateError, ScanReport};
use scangate_policy::{
    GateDecision, SeverityCounts, ThresholdSet, collect_blocking, emit_gate_json, evaluate,
};
use scangate_utils::paths::ScanIdentity;
use scangate_utils::{ReportPaths, init_tracing, write_file_atomic};

/// scangate - security gate over container scan reports
#[derive(Parser)]
#[command(name = "scangate")]
#[command(
    about = "Blocks or allows a container build based on vulnerability and secret scan reports"
)]
#[command(long_about = r#"
scangate reads a Trivy vulnerability report (required) and a Trivy secret
report (optional), counts findings per severity bucket, applies the blocking
policy configured through FAIL_ON_* environment variables, writes a canonical
JSON result document, and exits with the verdict.

EXAMPLES:
  # Gate on the default paths under ./reports
  scangate

  # Explicit report and result paths
  scangate reports/vuln.json reports/result.json reports/secret.json

  # Gate a specific release/architecture pair
  RELEASE_VERSION=1.4.2 TARGETARCH=arm64 scangate

  # Also block on medium vulnerabilities
  FAIL_ON_MEDIUM=1 scangate

ENVIRONMENT:
  RELEASE_VERSION   Release under scan (default: dev)
  TARGETARCH        Architecture under scan (default: host architecture)
  SCAN_REPORT_DIR   Directory holding the reports (default: reports)
  FAIL_ON_CRITICAL  Block on critical vulnerabilities ("1" = on; default on)
  FAIL_ON_HIGH      Block on high vulnerabilities ("1" = on; default on)
  FAIL_ON_MEDIUM    Block on medium vulnerabilities ("1" = on; default off)
  FAIL_ON_SECRET    Block on secret findings ("1" = on; default on)

EXIT CODES:
  0  Reports evaluated, policy allows the build
  1  Reports evaluated, policy blocks the build
  2  Inputs missing, unreadable, or unparsable (no result document written)
"#)]
#[command(version)]
pub struct Cli {
    /// Path to the vulnerability report (default: <dir>/trivy-vuln-<version>-<arch>.json)
    pub vuln_json: Option<Utf8PathBuf>,

    /// Path for the result document (default: <dir>/scan-result-<version>-<arch>.json)
    pub result_json: Option<Utf8PathBuf>,

    /// Path to the secret report (default: <dir>/trivy-secret-<version>-<arch>.json)
    pub secret_json: Option<Utf8PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the gate.
///
/// Handles all output. The caller only maps the returned `ExitCode` to
/// `std::process::exit`; success means the policy allowed the build.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    // A second init in the same process reports an error; ignore it.
    let _ = init_tracing(cli.verbose);

    let identity = ScanIdentity::from_env();
    let thresholds = ThresholdSet::from_env();
    let paths = ReportPaths::resolve(&identity, cli.vuln_json, cli.result_json, cli.secret_json);

    match execute_gate(&paths, thresholds, &identity) {
        Ok(decision) if decision.block => Err(ExitCode::POLICY_BLOCK),
        Ok(_) => Ok(()),
        Err(err) => {
            error!(error = %err, "scan gate failed");
            Err(err.to_exit_code())
        }
    }
}

/// Execute one gate pass: load, flatten, evaluate, persist, log.
///
/// Any error here surfaces before the result document is written, so a
/// validation failure never leaves a stale or partial document behind.
fn execute_gate(
    paths: &ReportPaths,
    thresholds: ThresholdSet,
    identity: &ScanIdentity,
) -> Result<GateDecision, ScanGateError> {
    debug!(
        vuln = %paths.vuln,
        secret = %paths.secret,
        result = %paths.result,
        "resolved report paths"
    );

    if !paths.vuln.exists() {
        return Err(ScanGateError::VulnReportMissing {
            path: paths.vuln.clone(),
        });
    }

    let mut findings = ScanReport::load_vulnerabilities(&paths.vuln)?.findings();

    if paths.secret.exists() {
        findings.extend(ScanReport::load_secrets(&paths.secret)?.findings());
    } else {
        warn!(
            path = %paths.secret,
            "secret report not found, continuing with zero secret findings"
        );
    }

    let counts = SeverityCounts::tally(&findings);
    let decision = evaluate(counts, thresholds);

    let document = emit_gate_json(&decision).map_err(|e| ScanGateError::ResultWrite {
        path: paths.result.clone(),
        reason: e.to_string(),
    })?;
    write_file_atomic(&paths.result, &document).map_err(|e| ScanGateError::ResultWrite {
        path: paths.result.clone(),
        reason: e.to_string(),
    })?;

    info!(
        version = %identity.version,
        arch = %identity.arch,
        critical = counts.critical,
        high = counts.high,
        medium = counts.medium,
        secrets = counts.secrets,
        block = decision.block,
        "scan summary"
    );

    if decision.block {
        for finding in collect_blocking(&findings, &decision) {
            warn!("{}", format_blocking_line(finding));
        }
    }

    Ok(decision)
}

/// One log line per blocking finding.
fn format_blocking_line(finding: &Finding) -> String {
    match finding.kind {
        FindingKind::Vulnerability => {
            let package = finding.package_name.as_deref().unwrap_or("unknown");
            let fixed = finding.fixed_version.as_deref().unwrap_or("Not Fixed");
            format!(
                "[{}] {} ({}) in {} -> Fixed: {}",
                finding.severity.as_str(),
                package,
                finding.identifier,
                finding.target,
                fixed
            )
        }
        FindingKind::Secret => {
            format!("[SECRET] {} in {}", finding.identifier, finding.target)
        }
    }
}
