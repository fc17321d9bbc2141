//! Environment overrides and post-load normalization.
//!
//! `STOREFRONT_*` variables override file values for immediate CLI use.

use crate::error::ConfigError;

use super::defaults::DEFAULT_CSS_SELECTOR;
use super::{Config, ConfigDiagnostics};

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_blank(env_lookup("STOREFRONT_API_BASE_URL")) {
        config.api.base_url = url;
    }
    if let Some(subdomain) = non_blank(env_lookup("STOREFRONT_SUBDOMAIN")) {
        config.api.subdomain = Some(subdomain);
    }
    if let Some(timeout) = non_blank(env_lookup("STOREFRONT_API_TIMEOUT_SECS")) {
        let parsed = timeout
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "invalid STOREFRONT_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
                ))
            })?;
        config.api.timeout_secs = parsed;
    }
    Ok(())
}

/// Repair values that parse but cannot be used, recording each repair.
pub(super) fn normalize_config(config: &mut Config, diagnostics: &mut ConfigDiagnostics) {
    // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
    if config.api.timeout_secs == 0 {
        config.api.timeout_secs = 1;
        diagnostics
            .warnings
            .push("api.timeout_secs must be at least 1; using 1".to_string());
    }
    if config.theme.selector.trim().is_empty() {
        config.theme.selector = DEFAULT_CSS_SELECTOR.to_string();
        diagnostics
            .warnings
            .push(format!("theme.selector is blank; using `{DEFAULT_CSS_SELECTOR}`"));
    }
    if config.api.base_url.trim().is_empty() {
        diagnostics
            .warnings
            .push("api.base_url is blank; `fetch` will fail until it is set".to_string());
    }
    config.api.subdomain = non_blank(config.api.subdomain.take());
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
