//! Configuration data model.
//!
//! Struct/enum definitions plus default values only. Source discovery and
//! env handling live in sibling modules.

use serde::Deserialize;

use super::defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_CSS_SELECTOR, DEFAULT_PUBLIC_PATH,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub theme: ThemeConfig,
    pub display: DisplayConfig,
}

/// Public storefront API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub public_path: String,
    pub timeout_secs: u64,
    /// Tenant used when the CLI is given neither `--subdomain` nor `--host`.
    pub subdomain: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            public_path: DEFAULT_PUBLIC_PATH.into(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            subdomain: None,
        }
    }
}

/// Theme application defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Treat the root as already carrying the dark marker.
    pub dark: bool,
    /// Reject themes with malformed colours instead of falling back to white.
    pub strict: bool,
    /// Selector for emitted CSS rules.
    pub selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark: false,
            strict: false,
            selector: DEFAULT_CSS_SELECTOR.into(),
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Diagnostics captured while resolving runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    /// Values that were present but unusable and replaced by defaults.
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}

/// Result of explicit global config initialization (`storefront-theme init`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: std::path::PathBuf,
    },
    AlreadyInitialized {
        path: std::path::PathBuf,
    },
    Overwritten {
        path: std::path::PathBuf,
        backup_path: std::path::PathBuf,
    },
}
