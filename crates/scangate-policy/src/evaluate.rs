//! Policy evaluation.
//!
//! A pure fold over the four buckets in fixed priority order. Blocking
//! is monotone in the counts: adding findings can only turn an allow
//! into a block, never the reverse.

use serde::Serialize;

use scangate_report::{Finding, FindingKind, Severity};

use crate::counts::SeverityCounts;
use crate::thresholds::ThresholdSet;

/// Why the gate blocked, one per triggered bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Critical,
    High,
    Medium,
    Secrets,
}

impl Reason {
    /// The string form persisted in the result document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Reason::Critical => "critical",
            Reason::High => "high",
            Reason::Medium => "medium",
            Reason::Secrets => "secrets",
        }
    }
}

/// The gate's decision over one pair of reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub counts: SeverityCounts,
    pub block: bool,
    /// Every triggered bucket, in priority order. Complete rather than
    /// first-match so the operator sees the whole picture in one run.
    pub reasons: Vec<Reason>,
}

/// Evaluate the counts against the thresholds.
///
/// Priority order is fixed: critical, high, medium, secrets. A bucket
/// triggers when its switch is enabled and its count is nonzero.
#[must_use]
pub fn evaluate(counts: SeverityCounts, thresholds: ThresholdSet) -> GateDecision {
    let buckets = [
        (Reason::Critical, thresholds.block_on_critical, counts.critical),
        (Reason::High, thresholds.block_on_high, counts.high),
        (Reason::Medium, thresholds.block_on_medium, counts.medium),
        (Reason::Secrets, thresholds.block_on_secret, counts.secrets),
    ];

    let reasons: Vec<Reason> = buckets
        .into_iter()
        .filter(|&(_, enabled, count)| enabled && count > 0)
        .map(|(reason, _, _)| reason)
        .collect();

    GateDecision {
        counts,
        block: !reasons.is_empty(),
        reasons,
    }
}

/// Collect the findings behind a blocking decision, grouped by the
/// decision's reasons in priority order. Used for the itemized log
/// lines only; the result document never carries findings.
#[must_use]
pub fn collect_blocking<'a>(findings: &'a [Finding], decision: &GateDecision) -> Vec<&'a Finding> {
    let mut blocking = Vec::new();
    for reason in &decision.reasons {
        blocking.extend(findings.iter().filter(|f| matches_reason(f, *reason)));
    }
    blocking
}

fn matches_reason(finding: &Finding, reason: Reason) -> bool {
    match reason {
        Reason::Critical => {
            finding.kind == FindingKind::Vulnerability && finding.severity == Severity::Critical
        }
        Reason::High => {
            finding.kind == FindingKind::Vulnerability && finding.severity == Severity::High
        }
        Reason::Medium => {
            finding.kind == FindingKind::Vulnerability && finding.severity == Severity::Medium
        }
        Reason::Secrets => finding.kind == FindingKind::Secret,
    }
}
