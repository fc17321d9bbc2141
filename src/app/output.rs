//! Theme application for CLI output.
//!
//! Merges CLI flags with `[theme]` config, applies the theme to a fresh
//! in-memory root, and formats the result for stdout.

use storefront_theme::config::ThemeConfig;
use storefront_theme::error::AppError;
use storefront_theme::render::{preview_rows, Renderer};
use storefront_theme::theme::{apply_theme, RootStyle, ThemeConfiguration};

use crate::cli::{OutputArgs, OutputFormat};

/// Effective output settings after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutputSettings {
    pub dark: bool,
    pub strict: bool,
    pub preview: bool,
    pub format: OutputFormat,
    pub selector: String,
}

impl OutputSettings {
    /// Flags can only switch `dark`/`strict` on; config supplies the baseline.
    pub(crate) fn resolve(args: &OutputArgs, theme: &ThemeConfig) -> Self {
        Self {
            dark: args.dark || theme.dark,
            strict: args.strict || theme.strict,
            preview: args.preview,
            format: args.format,
            selector: theme.selector.clone(),
        }
    }
}

/// Apply `theme` and return the text destined for stdout.
pub(crate) fn render_theme(
    theme: &ThemeConfiguration,
    settings: &OutputSettings,
    renderer: &Renderer,
) -> Result<String, AppError> {
    if settings.strict {
        // The dark scheme owns background/foreground; those values are never written.
        let invalid: Vec<_> = theme
            .invalid_roles()
            .into_iter()
            .filter(|role| !(settings.dark && role.is_scheme_owned()))
            .collect();
        if !invalid.is_empty() {
            let roles = invalid
                .iter()
                .map(|role| format!("{} (`{}`)", role.key(), theme.resolved(*role)))
                .collect();
            return Err(AppError::StrictColors(roles));
        }
    }

    let mut root = if settings.dark {
        RootStyle::dark()
    } else {
        RootStyle::new()
    };
    apply_theme(theme, &mut root);

    if settings.preview {
        renderer.section("theme preview");
        renderer.swatches(&preview_rows(theme, &root));
    }

    Ok(match settings.format {
        OutputFormat::Css => root.to_css(&settings.selector),
        OutputFormat::Json => format!("{:#}\n", root.to_json()),
    })
}
