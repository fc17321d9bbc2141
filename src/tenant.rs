//! Tenant payload model, category dispatch, and design-settings mapping.
//!
//! The public storefront endpoint returns one JSON document per tenant. Only
//! the parts that drive layout and theming are modelled; everything else in
//! the payload is ignored on decode.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::SettingsError;
use crate::theme::{ColorRole, ThemeConfiguration};

/// Storefront vertical reported in `system.category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Restaurant,
    Supermarket,
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "restaurant" => Self::Restaurant,
            "supermarket" => Self::Supermarket,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Supermarket => "supermarket",
            Self::Other(raw) => raw,
        }
    }
}

/// Page shell the storefront renders for the current tenant state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Payload not loaded yet.
    Loading,
    Restaurant,
    Supermarket,
    Unknown(String),
}

impl Layout {
    pub fn for_payload(payload: Option<&PublicPayload>) -> Self {
        let Some(payload) = payload else {
            return Self::Loading;
        };
        match payload.category() {
            Category::Restaurant => Self::Restaurant,
            Category::Supermarket => Self::Supermarket,
            Category::Other(raw) => Self::Unknown(raw),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Loading => "loading",
            Self::Restaurant => "restaurant",
            Self::Supermarket => "supermarket",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Tenant system record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TenantSystem {
    pub name: String,
    pub category: String,
    pub public_title: Option<String>,
    pub design_settings: Option<BTreeMap<String, Value>>,
}

/// One sellable entry: a menu item or a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub category: String,
    pub is_available: bool,
}

/// Decoded public storefront response.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicPayload {
    pub system: TenantSystem,
    /// Restaurant menu grouped by menu category.
    #[serde(default)]
    pub menu: Option<BTreeMap<String, Vec<CatalogItem>>>,
    /// Supermarket product list.
    #[serde(default)]
    pub products: Option<Vec<CatalogItem>>,
}

impl PublicPayload {
    pub fn category(&self) -> Category {
        Category::parse(&self.system.category)
    }

    /// Number of catalog entries, whichever vertical shape is present.
    pub fn item_count(&self) -> usize {
        let menu = self
            .menu
            .as_ref()
            .map(|groups| groups.values().map(Vec::len).sum::<usize>())
            .unwrap_or(0);
        let products = self.products.as_ref().map(Vec::len).unwrap_or(0);
        menu + products
    }

    /// Theme built from `system.design_settings`, empty when absent.
    pub fn theme(&self) -> ThemeConfiguration {
        self.system
            .design_settings
            .as_ref()
            .map(design_settings_to_theme)
            .unwrap_or_default()
    }
}

/// Tenant label from a request hostname: `acme.example.com:3000` → `acme`.
pub fn subdomain_from_host(host: &str) -> Option<String> {
    let host = host.trim();
    let host = host.split_once("://").map_or(host, |(_, rest)| rest);
    let host = host.split(['/', ':']).next().unwrap_or_default();
    let label = host.split('.').next().unwrap_or_default().trim();
    (!label.is_empty()).then(|| label.to_ascii_lowercase())
}

/// Map raw design settings onto theme roles. Unrecognised keys become
/// pass-through properties.
pub fn design_settings_to_theme(settings: &BTreeMap<String, Value>) -> ThemeConfiguration {
    let mut config = ThemeConfiguration::new();
    for (key, value) in settings {
        let Some(text) = setting_text(key, value) else {
            continue;
        };
        match ColorRole::from_key(key) {
            Some(role) => config.set(role, text),
            None => config.set_extra(key, text),
        }
    }
    config
}

fn setting_text(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!(key, "ignoring non-scalar design setting");
            None
        }
    }
}

/// Settings document accepted from files or stdin.
#[derive(Debug, Clone)]
pub enum SettingsDocument {
    /// Full public payload; theme comes from `system.design_settings`.
    Payload(Box<PublicPayload>),
    /// Bare design-settings object.
    Bare(BTreeMap<String, Value>),
}

impl SettingsDocument {
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Err(SettingsError::Shape(
                "expected a JSON object at the top level".to_string(),
            ));
        };
        if map.get("system").is_some_and(Value::is_object) {
            let payload: PublicPayload = serde_json::from_value(Value::Object(map))?;
            return Ok(Self::Payload(Box::new(payload)));
        }
        Ok(Self::Bare(map.into_iter().collect()))
    }

    pub fn theme(&self) -> ThemeConfiguration {
        match self {
            Self::Payload(payload) => payload.theme(),
            Self::Bare(settings) => design_settings_to_theme(settings),
        }
    }

    pub fn payload(&self) -> Option<&PublicPayload> {
        match self {
            Self::Payload(payload) => Some(payload.as_ref()),
            Self::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{restaurant_payload_json, supermarket_payload_json};

    #[test]
    fn subdomain_is_first_host_label() {
        assert_eq!(subdomain_from_host("Acme.example.com").as_deref(), Some("acme"));
        assert_eq!(subdomain_from_host("acme.localhost:3000").as_deref(), Some("acme"));
        assert_eq!(subdomain_from_host("https://shop.tarkeeb.online/menu").as_deref(), Some("shop"));
        assert_eq!(subdomain_from_host("localhost").as_deref(), Some("localhost"));
        assert_eq!(subdomain_from_host(""), None);
        assert_eq!(subdomain_from_host(".example.com"), None);
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Restaurant"), Category::Restaurant);
        assert_eq!(Category::parse(" supermarket "), Category::Supermarket);
        assert_eq!(Category::parse("pharmacy"), Category::Other("pharmacy".into()));
    }

    #[test]
    fn layout_dispatches_on_category() {
        assert_eq!(Layout::for_payload(None), Layout::Loading);
        let doc = SettingsDocument::parse(&restaurant_payload_json()).unwrap();
        assert_eq!(Layout::for_payload(doc.payload()), Layout::Restaurant);
        let doc = SettingsDocument::parse(&supermarket_payload_json()).unwrap();
        assert_eq!(Layout::for_payload(doc.payload()), Layout::Supermarket);
    }

    #[test]
    fn unknown_category_keeps_raw_value() {
        let doc = SettingsDocument::parse(r#"{"system":{"name":"x","category":"florist"}}"#).unwrap();
        let layout = Layout::for_payload(doc.payload());
        assert_eq!(layout, Layout::Unknown("florist".into()));
        assert_eq!(layout.label(), "unknown");
    }

    #[test]
    fn supermarket_settings_use_color_suffixed_keys() {
        let doc = SettingsDocument::parse(&supermarket_payload_json()).unwrap();
        let theme = doc.theme();
        assert_eq!(theme.get(ColorRole::Primary), Some("#16a34a"));
        assert_eq!(theme.get(ColorRole::Secondary), Some("#facc15"));
        assert_eq!(theme.get(ColorRole::Radius), Some("0.75rem"));
        assert_eq!(doc.payload().map(PublicPayload::item_count), Some(2));
    }

    #[test]
    fn restaurant_menu_items_are_counted() {
        let doc = SettingsDocument::parse(&restaurant_payload_json()).unwrap();
        assert_eq!(doc.payload().map(PublicPayload::item_count), Some(3));
    }

    #[test]
    fn bare_settings_object_is_accepted() {
        let doc = SettingsDocument::parse(
            r##"{"primary":"#ff0000","border":null,"cardShadow":"none","weights":[1,2]}"##,
        )
        .unwrap();
        let theme = doc.theme();
        assert_eq!(theme.get(ColorRole::Primary), Some("#ff0000"));
        assert_eq!(theme.get(ColorRole::Border), None);
        let extras: Vec<_> = theme.extras().collect();
        assert_eq!(extras, vec![("--card-shadow", "none")]);
    }

    #[test]
    fn numeric_settings_are_stringified() {
        let mut settings = BTreeMap::new();
        settings.insert("zIndex".to_string(), serde_json::json!(10));
        let theme = design_settings_to_theme(&settings);
        let extras: Vec<_> = theme.extras().collect();
        assert_eq!(extras, vec![("--z-index", "10")]);
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = SettingsDocument::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, SettingsError::Shape(_)));
    }

    #[test]
    fn payload_without_settings_yields_empty_theme() {
        let doc = SettingsDocument::parse(r#"{"system":{"category":"restaurant"}}"#).unwrap();
        assert!(doc.theme().is_empty());
    }
}
