//! End-to-end theme regression checks against the public library API.
//!
//! Stylesheets read these exact custom-property values, so the expected
//! strings here are the visual contract.

use storefront_theme::color::{hex_to_hsl, is_valid_hex, to_css_hsl_string, Hsl};
use storefront_theme::tenant::{Layout, SettingsDocument};
use storefront_theme::theme::{
    apply_theme, ColorRole, DetachedSink, RootStyle, StyleSink, ThemeConfiguration,
};

#[test]
fn reference_colors_convert_exactly() {
    assert_eq!(hex_to_hsl("#ffffff"), Hsl::new(0, 0, 100));
    assert_eq!(hex_to_hsl("#000000"), Hsl::new(0, 0, 0));
    assert_eq!(hex_to_hsl("#ff0000"), Hsl::new(0, 100, 50));
    assert_eq!(hex_to_hsl("#abc"), hex_to_hsl("#aabbcc"));
}

#[test]
fn invalid_inputs_degrade_to_white() {
    for input in ["notacolor", "", "#12"] {
        assert!(!is_valid_hex(input));
        assert_eq!(hex_to_hsl(input), Hsl::FALLBACK);
    }
}

#[test]
fn css_strings_have_expected_shape() {
    for input in ["#00bfff", "#304b7a", "#e5e5e5", "#fff", "garbage"] {
        let css = to_css_hsl_string(input);
        let parts: Vec<&str> = css.split(' ').collect();
        assert_eq!(parts.len(), 3, "{css}");
        assert!(parts[0].parse::<u16>().is_ok(), "{css}");
        assert!(parts[1].ends_with('%') && parts[2].ends_with('%'), "{css}");
    }
}

#[test]
fn empty_configuration_writes_default_palette() {
    let mut root = RootStyle::new();
    apply_theme(&ThemeConfiguration::new(), &mut root);
    assert_eq!(
        root.to_css(":root"),
        ":root {\n\
         \x20 --primary: 195 100% 50%;\n\
         \x20 --secondary: 0 0% 100%;\n\
         \x20 --background: 0 0% 100%;\n\
         \x20 --foreground: 218 44% 33%;\n\
         \x20 --border: 0 0% 90%;\n\
         \x20 --radius: 0.5rem;\n\
         }\n"
    );
}

#[test]
fn second_application_replaces_first() {
    let mut root = RootStyle::new();
    apply_theme(
        &ThemeConfiguration::new()
            .with(ColorRole::Primary, "#ff0000")
            .with(ColorRole::Border, "#000000"),
        &mut root,
    );
    let second = ThemeConfiguration::new().with(ColorRole::Primary, "#0000ff");
    apply_theme(&second, &mut root);

    assert_eq!(root.property("--primary"), Some("240 100% 50%"));
    assert_eq!(root.property("--border"), Some("0 0% 90%"));
}

#[test]
fn dark_marker_protects_background_and_foreground() {
    let mut root = RootStyle::dark();
    root.set_property("--background", "222 47% 11%");
    root.set_property("--foreground", "210 40% 98%");
    let config = ThemeConfiguration::new()
        .with(ColorRole::Background, "#ffffff")
        .with(ColorRole::Foreground, "#000000");
    apply_theme(&config, &mut root);

    assert_eq!(root.property("--background"), Some("222 47% 11%"));
    assert_eq!(root.property("--foreground"), Some("210 40% 98%"));
    assert_eq!(root.property("--primary"), Some("195 100% 50%"));
}

#[test]
fn detached_context_writes_nothing() {
    #[derive(Default)]
    struct Recording {
        writes: usize,
    }
    impl StyleSink for Recording {
        fn is_attached(&self) -> bool {
            false
        }
        fn has_class(&self, _class: &str) -> bool {
            false
        }
        fn set_property(&mut self, _name: &str, _value: &str) {
            self.writes += 1;
        }
        fn remove_property(&mut self, _name: &str) {
            self.writes += 1;
        }
        fn applied_extras(&self) -> Vec<String> {
            vec!["--ring".to_string()]
        }
        fn record_applied_extras(&mut self, _names: Vec<String>) {
            self.writes += 1;
        }
    }

    let mut sink = Recording::default();
    apply_theme(&ThemeConfiguration::new(), &mut sink);
    assert_eq!(sink.writes, 0);
    apply_theme(&ThemeConfiguration::new(), &mut DetachedSink);
}

#[test]
fn supermarket_payload_themes_the_root() {
    let doc = SettingsDocument::parse(
        r##"{
            "system": {
                "name": "Corner Market",
                "category": "supermarket",
                "design_settings": {
                    "primary_color": "#ff0000",
                    "secondary_color": "#00ff00",
                    "border": "#0000ff",
                    "radius": "4px",
                    "accentColor": "#123456"
                }
            },
            "products": []
        }"##,
    )
    .unwrap();
    assert_eq!(Layout::for_payload(doc.payload()), Layout::Supermarket);

    let mut root = RootStyle::new();
    apply_theme(&doc.theme(), &mut root);
    assert_eq!(root.property("--primary"), Some("0 100% 50%"));
    assert_eq!(root.property("--secondary"), Some("120 100% 50%"));
    assert_eq!(root.property("--border"), Some("240 100% 50%"));
    assert_eq!(root.property("--radius"), Some("4px"));
    assert_eq!(root.property("--accent-color"), Some("#123456"));
}

#[test]
fn tenant_text_cannot_escape_the_root_rule() {
    let doc = SettingsDocument::parse(
        r##"{
            "radius": "0.5rem; } body { display: none",
            "bad{key}": "x",
            "shadow": "none } html { color: red"
        }"##,
    )
    .unwrap();
    let mut root = RootStyle::new();
    apply_theme(&doc.theme(), &mut root);

    let css = root.to_css(":root");
    assert_eq!(css.matches('{').count(), 1, "{css}");
    assert_eq!(css.matches('}').count(), 1, "{css}");
    assert!(css.contains("  --radius: 0.5rem;\n"), "{css}");
    assert!(!css.contains("display"), "{css}");
    assert!(!css.contains("--shadow"), "{css}");
}

#[test]
fn reapplying_drops_pass_through_properties_from_the_previous_tenant() {
    let first = SettingsDocument::parse(r##"{"primary": "#ff0000", "accentColor": "#123456"}"##)
        .unwrap()
        .theme();
    let second = ThemeConfiguration::new().with(ColorRole::Primary, "#0000ff");

    let mut root = RootStyle::new();
    apply_theme(&first, &mut root);
    assert_eq!(root.property("--accent-color"), Some("#123456"));
    apply_theme(&second, &mut root);

    let mut expected = RootStyle::new();
    apply_theme(&second, &mut expected);
    assert_eq!(root, expected);
}
