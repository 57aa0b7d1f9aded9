//! Canonical JSON emission (RFC 8785 JCS).
//!
//! The result document is the gate's machine-readable contract with
//! downstream pipeline steps. Emitting it as JCS-canonical JSON makes
//! the byte sequence a pure function of the document's content, so
//! re-running the gate over identical reports produces a byte-identical
//! file.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a value to a JCS-canonical JSON string.
///
/// Keys are sorted, whitespace is elided, and number formatting follows
/// RFC 8785.
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;

    let canonical_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON (RFC 8785)")?;

    String::from_utf8(canonical_bytes).with_context(|| "Canonical JSON was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        zebra: u64,
        apple: bool,
        middle: Vec<String>,
    }

    #[test]
    fn test_emit_jcs_sorts_keys() {
        let sample = Sample {
            zebra: 3,
            apple: true,
            middle: vec!["a".to_string()],
        };
        let json = emit_jcs(&sample).unwrap();
        assert_eq!(json, r#"{"apple":true,"middle":["a"],"zebra":3}"#);
    }

    #[test]
    fn test_emit_jcs_is_deterministic() {
        let sample = Sample {
            zebra: 0,
            apple: false,
            middle: vec!["x".to_string(), "y".to_string()],
        };
        let first = emit_jcs(&sample).unwrap();
        let second = emit_jcs(&sample).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emit_jcs_no_whitespace() {
        let sample = Sample {
            zebra: 1,
            apple: true,
            middle: vec![],
        };
        let json = emit_jcs(&sample).unwrap();
        assert!(!json.contains(' '));
        assert!(!json.contains('\n'));
    }
}
