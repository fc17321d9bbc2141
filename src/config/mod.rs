//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`STOREFRONT_API_BASE_URL`,
//!    `STOREFRONT_API_TIMEOUT_SECS`, `STOREFRONT_SUBDOMAIN`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./storefront.toml in the current directory
//! 4. $XDG_CONFIG_HOME/storefront-theme/storefront.toml (or
//!    ~/.config/storefront-theme/storefront.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{config_root_dir, default_global_config_path, initialize_default_global_config};
pub use loader::load_config_with_diagnostics;
pub use types::{
    ApiConfig, Config, ConfigDiagnostics, DisplayConfig, GlobalConfigInitResult, LoadedConfig,
    ThemeConfig,
};
