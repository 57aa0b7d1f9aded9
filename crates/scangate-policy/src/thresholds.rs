//! Blocking thresholds resolved from the environment.

/// Environment variable gating critical vulnerabilities.
pub const FAIL_ON_CRITICAL_ENV: &str = "FAIL_ON_CRITICAL";

/// Environment variable gating high vulnerabilities.
pub const FAIL_ON_HIGH_ENV: &str = "FAIL_ON_HIGH";

/// Environment variable gating medium vulnerabilities.
pub const FAIL_ON_MEDIUM_ENV: &str = "FAIL_ON_MEDIUM";

/// Environment variable gating secret findings.
pub const FAIL_ON_SECRET_ENV: &str = "FAIL_ON_SECRET";

/// The four blocking switches, resolved once at startup.
///
/// Each switch follows the same rule: an unset or empty variable keeps
/// the documented default, and a set non-empty value means enabled iff
/// it is exactly `"1"`. The coercion is deliberate: `FAIL_ON_HIGH=0`
/// disables the high gate even though its default is enabled, and
/// typos like `"true"` disable rather than enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSet {
    pub block_on_critical: bool,
    pub block_on_high: bool,
    pub block_on_medium: bool,
    pub block_on_secret: bool,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            block_on_critical: true,
            block_on_high: true,
            block_on_medium: false,
            block_on_secret: true,
        }
    }
}

impl ThresholdSet {
    /// Resolve the switches from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the switches from an injectable lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            block_on_critical: resolve_switch(
                lookup(FAIL_ON_CRITICAL_ENV),
                defaults.block_on_critical,
            ),
            block_on_high: resolve_switch(lookup(FAIL_ON_HIGH_ENV), defaults.block_on_high),
            block_on_medium: resolve_switch(lookup(FAIL_ON_MEDIUM_ENV), defaults.block_on_medium),
            block_on_secret: resolve_switch(lookup(FAIL_ON_SECRET_ENV), defaults.block_on_secret),
        }
    }
}

fn resolve_switch(value: Option<String>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) if v.is_empty() => default,
        Some(v) => v == "1",
    }
}
