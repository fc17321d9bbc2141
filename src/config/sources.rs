//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from local `./storefront.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

impl ConfigSource {
    /// File the config text came from, if any.
    pub(super) fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Global(path) => Some(path.as_path()),
            Self::Local => Some(Path::new(CONFIG_FILE_NAME)),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // 1) Explicit override path from CLI takes absolute precedence.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    // 2) Local config in the working directory.
    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }

    // 3) Per-user config.
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    // 4) Nothing found; caller parses empty text into defaults.
    Ok((String::new(), ConfigSource::BuiltInDefaults))
}
