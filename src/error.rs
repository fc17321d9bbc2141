//! Unified error types for theme conversion, config, and tenant fetches.

use std::fmt;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors raised by strict hex colour parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not `#` followed by exactly 3 or 6 hex digits.
    InvalidFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(f, "invalid color format `{input}` (expected #RGB or #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the public storefront API.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status(u16, String),
    /// Body was not a valid public payload.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

/// Errors reading a design-settings document supplied by the caller.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// JSON parsed, but it is neither a public payload nor a settings object.
    Shape(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Shape(msg) => write!(f, "unexpected settings shape: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the CLI.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Api(ApiError),
    Settings(SettingsError),
    /// Strict mode refused to apply a theme with malformed colours.
    StrictColors(Vec<String>),
    /// No tenant could be resolved from flags, env, or config.
    MissingTenant,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::Settings(e) => write!(f, "settings: {e}"),
            Self::StrictColors(roles) => write!(
                f,
                "strict mode: invalid colors for {}",
                roles.join(", ")
            ),
            Self::MissingTenant => write!(
                f,
                "no tenant subdomain given (use --subdomain, --host, or STOREFRONT_SUBDOMAIN)"
            ),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}
