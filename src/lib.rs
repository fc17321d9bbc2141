//! Storefront theming for multi-tenant shops.
//!
//! Tenant design settings arrive as hex colours keyed by semantic role. This
//! crate converts them to the `H S% L%` triples the storefront stylesheet
//! reads through `hsl(var(--primary))` and friends, and writes them to the
//! document root through an injectable style sink.
//!
//! # Quick start
//!
//! ```
//! use storefront_theme::theme::{apply_theme, ColorRole, RootStyle, ThemeConfiguration};
//!
//! let config = ThemeConfiguration::new().with(ColorRole::Primary, "#ff0000");
//! let mut root = RootStyle::new();
//! apply_theme(&config, &mut root);
//! assert_eq!(root.property("--primary"), Some("0 100% 50%"));
//! assert_eq!(root.property("--radius"), Some("0.5rem"));
//! ```

pub mod api;
pub mod build_info;
pub mod color;
pub mod config;
pub mod error;
pub mod render;
pub mod tenant;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
