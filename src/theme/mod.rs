//! Tenant theme model and CSS custom-property application.
//!
//! A [`ThemeConfiguration`] maps semantic [`ColorRole`]s to tenant hex
//! colours. [`apply_theme`] converts each colour to an HSL triple and writes
//! it to the document root through a [`StyleSink`], which is the only
//! side-effecting boundary in the theme pipeline.

use std::collections::BTreeMap;

use crate::color::is_valid_hex;

mod apply;
mod sink;

pub use apply::apply_theme;
pub use sink::{DetachedSink, RootStyle, StyleSink, DARK_CLASS};

/// Semantic theme key backed by a CSS custom property on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Foreground,
    Border,
    /// Corner radius; a CSS length, never converted.
    Radius,
}

impl ColorRole {
    /// Application order. Stable so repeated runs emit identical output.
    pub const ALL: [ColorRole; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Background,
        Self::Foreground,
        Self::Border,
        Self::Radius,
    ];

    /// Stable settings key for this role.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Border => "border",
            Self::Radius => "radius",
        }
    }

    /// Custom property consumed by the storefront stylesheet.
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::Secondary => "--secondary",
            Self::Background => "--background",
            Self::Foreground => "--foreground",
            Self::Border => "--border",
            Self::Radius => "--radius",
        }
    }

    /// Value substituted when the tenant leaves this role unset.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Primary => "#00bfff",
            Self::Secondary => "#ffffff",
            Self::Background => "#ffffff",
            Self::Foreground => "#304b7a",
            Self::Border => "#e5e5e5",
            Self::Radius => "0.5rem",
        }
    }

    /// False only for `radius`.
    pub fn is_color(self) -> bool {
        !matches!(self, Self::Radius)
    }

    /// Roles the dark colour scheme owns; never overwritten while it is active.
    pub fn is_scheme_owned(self) -> bool {
        matches!(self, Self::Background | Self::Foreground)
    }

    /// Resolve a settings key, accepting `primary`, `primary_color`,
    /// `primaryColor` and `primary-color` spellings.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = kebab_case(key.trim());
        let base = normalized
            .strip_suffix("-color")
            .unwrap_or(normalized.as_str());
        Self::ALL.iter().copied().find(|role| role.key() == base)
    }
}

/// Tenant theme: role overrides plus opaque pass-through properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfiguration {
    roles: BTreeMap<ColorRole, String>,
    extras: BTreeMap<String, String>,
}

impl ThemeConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ThemeConfiguration::set`].
    pub fn with(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.set(role, value);
        self
    }

    /// Set one role. Surrounding whitespace is dropped; a blank value clears
    /// the role so its default applies.
    pub fn set(&mut self, role: ColorRole, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.roles.remove(&role);
        } else {
            self.roles.insert(role, trimmed.to_string());
        }
    }

    /// Configured value for `role`, if any.
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        self.roles.get(&role).map(String::as_str)
    }

    /// Value applied for `role`: the configured one, else the default.
    pub fn resolved(&self, role: ColorRole) -> &str {
        self.get(role).unwrap_or_else(|| role.default_value())
    }

    /// Add an unrecognised key, written verbatim as `--kebab-case`.
    ///
    /// Keys that do not form a plain custom-property name, or that collide
    /// with a role property, are dropped, as are values that could escape
    /// their declaration.
    pub fn set_extra(&mut self, key: &str, value: impl Into<String>) {
        let Some(name) = css_var_name(key) else {
            tracing::warn!(key, "ignoring theme key with no usable property name");
            return;
        };
        if ColorRole::ALL.iter().any(|role| role.css_property() == name) {
            tracing::warn!(key, "ignoring pass-through key that shadows a theme role");
            return;
        }
        let value = value.into();
        if !is_inert_css_value(&value) {
            tracing::warn!(key, "ignoring theme value that is not a single CSS value");
            return;
        }
        self.extras.insert(name, value);
    }

    /// Pass-through value stored under property `name`.
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extras.get(name).map(String::as_str)
    }

    /// Pass-through properties in name order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extras
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Colour roles whose resolved value would fall back to white.
    pub fn invalid_roles(&self) -> Vec<ColorRole> {
        ColorRole::ALL
            .iter()
            .copied()
            .filter(|role| role.is_color() && !is_valid_hex(self.resolved(*role)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.extras.is_empty()
    }
}

/// `primaryColor` / `primary_color` → `--primary-color`.
///
/// `None` unless the result is built from `[a-z0-9-]` alone.
pub fn css_var_name(key: &str) -> Option<String> {
    let trimmed = key.trim().trim_start_matches('-');
    let kebab = kebab_case(trimmed);
    let name = format!("--{kebab}");
    is_custom_property_name(&name).then_some(name)
}

/// `--` followed by at least one of `[a-z0-9-]`.
pub fn is_custom_property_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
    })
}

/// True when `value` cannot end its declaration or rule early: no `;`,
/// braces, backslash, `<`, comment opener or control characters.
pub fn is_inert_css_value(value: &str) -> bool {
    !value.contains("/*")
        && !value
            .chars()
            .any(|ch| matches!(ch, ';' | '{' | '}' | '\\' | '<') || ch.is_control())
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(ch);
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
