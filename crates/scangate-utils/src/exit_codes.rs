//! Exit code constants for the gate.
//!
//! The gate's exit code is its primary interface to the surrounding
//! build pipeline, so the numeric values are a stable contract.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Reports evaluated, policy allows the build |
//! | 1 | `POLICY_BLOCK` | Reports evaluated, policy blocks the build |
//! | 2 | `VALIDATION` | Inputs missing, unreadable, or unparsable |

/// Exit codes matching the documented exit code table.
///
/// `ExitCode` provides type-safe exit code handling. Use the named
/// constants for the documented codes, or [`as_i32()`](Self::as_i32)
/// to get the numeric value for `std::process::exit()`.
///
/// The distinction between `POLICY_BLOCK` and `VALIDATION` matters to
/// callers: a `1` means the gate ran and the scan results failed the
/// policy, while a `2` means the gate never reached a decision and no
/// result document was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - reports evaluated and the policy allows the build
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Policy block - reports evaluated and at least one enabled
    /// threshold was exceeded
    pub const POLICY_BLOCK: ExitCode = ExitCode(1);

    /// Validation error - required input missing, unreadable, or
    /// unparsable; no result document was written
    pub const VALIDATION: ExitCode = ExitCode(2);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an `ExitCode` from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}
