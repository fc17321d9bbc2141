//! Terminal status output and theme swatch previews.
//!
//! Everything here writes to stderr so stdout carries only the emitted CSS.

use crossterm::style::{Color, Stylize};

use crate::color::{parse_hex, Rgb};
use crate::theme::{ColorRole, RootStyle, ThemeConfiguration};

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";
const INDENT_1: &str = "  ";
const SWATCH: &str = "      ";

/// One row of a theme preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchRow {
    pub property: &'static str,
    /// Source value from the configuration (or its default).
    pub source: String,
    /// Value currently on the root; `None` when the role was skipped.
    pub applied: Option<String>,
    /// Swatch colour; `None` for `radius` and malformed hex.
    pub rgb: Option<Rgb>,
}

/// Build preview rows for every role, pairing configured input with the
/// value that actually landed on `root`.
pub fn preview_rows(config: &ThemeConfiguration, root: &RootStyle) -> Vec<SwatchRow> {
    ColorRole::ALL
        .iter()
        .map(|role| {
            let source = config.resolved(*role).to_string();
            let rgb = if role.is_color() {
                parse_hex(&source).ok()
            } else {
                None
            };
            SwatchRow {
                property: role.css_property(),
                applied: root.property(role.css_property()).map(str::to_string),
                source,
                rgb,
            }
        })
        .collect()
}

/// Status-line renderer for the CLI.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value field row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{INDENT_1}{key}: {value}");
        }
    }

    /// Print theme swatches. Without colour support only the values are shown.
    pub fn swatches(&self, rows: &[SwatchRow]) {
        for row in rows {
            let applied = row.applied.as_deref().unwrap_or("(skipped)");
            let text = format!("{:<13} {:<10} {applied}", row.property, row.source);
            match (self.color, row.rgb) {
                (true, Some(Rgb { r, g, b })) => {
                    eprintln!("{INDENT_1}{} {text}", SWATCH.on(Color::Rgb { r, g, b }));
                }
                _ => eprintln!("{INDENT_1}{SWATCH} {text}"),
            }
        }
    }
}
