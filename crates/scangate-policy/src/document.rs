//! The persisted result document.
//!
//! Exactly six fields: the four counts, the block verdict, and the
//! reasons list. Findings never appear in the document; they go to the
//! log instead.

use anyhow::Result;
use serde::Serialize;

use scangate_utils::emit_jcs;

use crate::evaluate::GateDecision;

/// Wire shape of the result document.
#[derive(Debug, Clone, Serialize)]
pub struct GateDocument {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub secrets: u64,
    pub block: bool,
    pub reasons: Vec<String>,
}

impl From<&GateDecision> for GateDocument {
    fn from(decision: &GateDecision) -> Self {
        Self {
            critical: decision.counts.critical,
            high: decision.counts.high,
            medium: decision.counts.medium,
            secrets: decision.counts.secrets,
            block: decision.block,
            reasons: decision
                .reasons
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        }
    }
}

/// Render a decision as the JCS-canonical result document.
pub fn emit_gate_json(decision: &GateDecision) -> Result<String> {
    emit_jcs(&GateDocument::from(decision))
}
