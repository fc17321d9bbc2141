//! Theme application onto a style sink.

use crate::color::to_css_hsl_string;

use super::sink::{StyleSink, DARK_CLASS};
use super::{is_inert_css_value, ColorRole, ThemeConfiguration};

/// Write `config` to the document root behind `sink`.
///
/// Missing roles take their defaults; malformed colours degrade to white
/// without blocking the remaining roles. While the root carries the dark
/// marker, `--background` and `--foreground` are left alone. Pass-through
/// properties from an earlier application that `config` no longer carries
/// are removed. A detached sink makes this a no-op.
pub fn apply_theme(config: &ThemeConfiguration, sink: &mut dyn StyleSink) {
    if !sink.is_attached() {
        tracing::debug!("no document root attached; theme not applied");
        return;
    }

    for stale in sink.applied_extras() {
        if config.extra(&stale).is_none() {
            tracing::debug!(property = %stale, "remove stale pass-through property");
            sink.remove_property(&stale);
        }
    }

    let dark = sink.has_class(DARK_CLASS);
    for role in ColorRole::ALL {
        if dark && role.is_scheme_owned() {
            tracing::debug!(role = role.key(), "dark scheme active; skipping");
            continue;
        }
        let raw = config.resolved(role);
        let value = if role.is_color() {
            to_css_hsl_string(raw)
        } else if is_inert_css_value(raw) {
            raw.to_string()
        } else {
            tracing::warn!(role = role.key(), "unsafe theme value; using default");
            role.default_value().to_string()
        };
        tracing::debug!(property = role.css_property(), %value, "set theme property");
        sink.set_property(role.css_property(), &value);
    }

    let mut written = Vec::new();
    for (name, value) in config.extras() {
        tracing::debug!(property = name, value, "set pass-through property");
        sink.set_property(name, value);
        written.push(name.to_string());
    }
    sink.record_applied_extras(written);
}
