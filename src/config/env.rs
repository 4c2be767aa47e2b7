//! Environment overrides.
//!
//! `PSEUDOTERM_NO_COLOR` takes precedence; the conventional `NO_COLOR` is
//! honored as a fallback.

use super::Config;

/// Env var that disables color output when set to any non-empty value.
pub(super) const NO_COLOR_ENV: &str = "PSEUDOTERM_NO_COLOR";
/// Cross-tool convention, see no-color.org.
pub(super) const NO_COLOR_FALLBACK_ENV: &str = "NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if env_with_fallback(env_lookup, NO_COLOR_ENV, NO_COLOR_FALLBACK_ENV).is_some() {
        config.display.color = false;
    }
}

/// Resolve a non-empty value from the canonical env var or its fallback.
pub(super) fn env_with_fallback<FEnv>(
    env_lookup: &FEnv,
    canonical: &str,
    fallback: &str,
) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(canonical)
        .filter(|v| !v.is_empty())
        .or_else(|| env_lookup(fallback).filter(|v| !v.is_empty()))
}
