//! Default configuration constants.

/// Embedded default `storefront.toml` template written by `storefront-theme init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/storefront.toml");
/// Config file name used for local and global lookups.
pub(super) const CONFIG_FILE_NAME: &str = "storefront.toml";
/// Per-user config directory name under the config root.
pub(super) const CONFIG_DIR_NAME: &str = "storefront-theme";
/// Public storefront API host.
pub(super) const DEFAULT_API_BASE_URL: &str = "http://api.tarkeeb.online";
/// Path of the tenant public-view endpoint.
pub(super) const DEFAULT_PUBLIC_PATH: &str = "/public/";
/// Default timeout for public API requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 20;
/// Selector that owns the theme custom properties.
pub(super) const DEFAULT_CSS_SELECTOR: &str = ":root";
