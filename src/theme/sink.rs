//! Style-sink port for the document root.
//!
//! `apply_theme` never touches a concrete document. It writes through
//! [`StyleSink`], so headless contexts plug in [`DetachedSink`] and tests or
//! the CLI use the in-memory [`RootStyle`].

use std::collections::BTreeSet;
use std::fmt::Write as _;

use super::{is_custom_property_name, is_inert_css_value};

/// Root-element class that marks the dark colour scheme.
pub const DARK_CLASS: &str = "dark";

/// Injectable document-root interface used by theme application.
pub trait StyleSink {
    /// False when there is no document to style (headless render).
    fn is_attached(&self) -> bool {
        true
    }
    /// Whether the root element currently carries `class`.
    fn has_class(&self, class: &str) -> bool;
    /// Assign one custom property, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);
    /// Drop one custom property from the root.
    fn remove_property(&mut self, name: &str);
    /// Pass-through properties written by the previous theme application.
    fn applied_extras(&self) -> Vec<String>;
    /// Remember the pass-through properties the current application wrote.
    fn record_applied_extras(&mut self, names: Vec<String>);
}

/// Sink for contexts without a document. Every write is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSink;

impl StyleSink for DetachedSink {
    fn is_attached(&self) -> bool {
        false
    }

    fn has_class(&self, _class: &str) -> bool {
        false
    }

    fn set_property(&mut self, _name: &str, _value: &str) {}

    fn remove_property(&mut self, _name: &str) {}

    fn applied_extras(&self) -> Vec<String> {
        Vec::new()
    }

    fn record_applied_extras(&mut self, _names: Vec<String>) {}
}

/// In-memory document root: class list plus inline custom properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    classes: BTreeSet<String>,
    // Insertion-ordered; overwrites keep their original slot.
    properties: Vec<(String, String)>,
    applied_extras: BTreeSet<String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root already switched to the dark scheme.
    pub fn dark() -> Self {
        let mut root = Self::new();
        root.add_class(DARK_CLASS);
        root
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn is_dark(&self) -> bool {
        self.classes.contains(DARK_CLASS)
    }

    /// Current value of one property.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the properties as one CSS rule for `selector`.
    ///
    /// Entries whose name or value could break out of the rule are left out.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = format!("{selector} {{\n");
        for (name, value) in &self.properties {
            if !is_custom_property_name(name) || !is_inert_css_value(value) {
                tracing::warn!(property = %name, "omitting unsafe declaration from CSS output");
                continue;
            }
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push_str("}\n");
        out
    }

    /// Properties as a flat JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .properties
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl StyleSink for RootStyle {
    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn set_property(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.properties.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value.to_string();
        } else {
            self.properties.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.retain(|(key, _)| key != name);
    }

    fn applied_extras(&self) -> Vec<String> {
        self.applied_extras.iter().cloned().collect()
    }

    fn record_applied_extras(&mut self, names: Vec<String>) {
        self.applied_extras = names.into_iter().collect();
    }
}
