//! Gate policy for scangate: thresholds, counting, evaluation, and the
//! persisted decision document.
//!
//! Evaluation is pure. Reading the environment happens once at the
//! edge ([`ThresholdSet::from_env`]); everything after that is a
//! function of findings and thresholds.

pub mod counts;
pub mod document;
pub mod evaluate;
pub mod thresholds;

pub use counts::SeverityCounts;
pub use document::{GateDocument, emit_gate_json};
pub use evaluate::{GateDecision, Reason, collect_blocking, evaluate};
pub use thresholds::ThresholdSet;
