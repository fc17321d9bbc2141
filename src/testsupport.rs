//! Shared test fixtures for config, tenant, and settings tests.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("storefront-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Restaurant payload: bare role keys, three menu items in two groups.
pub fn restaurant_payload_json() -> String {
    json!({
        "system": {
            "name": "Beit Sitti",
            "description": "Family kitchen",
            "category": "restaurant",
            "public_title": "Beit Sitti",
            "design_settings": {
                "primary": "#e11d48",
                "foreground": "#1f2937",
                "radius": "1rem"
            },
            "slider_images": []
        },
        "menu": {
            "Mains": [
                { "id": 1, "name": "Mansaf", "price": "12.00", "category": "Mains", "is_available": true },
                { "id": 2, "name": "Maqluba", "price": "10.50", "category": "Mains", "is_available": false }
            ],
            "Desserts": [
                { "id": 3, "name": "Knafeh", "price": "4.00", "category": "Desserts", "is_available": true }
            ]
        }
    })
    .to_string()
}

/// Supermarket payload: `*_color` keys, two products.
pub fn supermarket_payload_json() -> String {
    json!({
        "system": {
            "id": 7,
            "name": "Green Basket",
            "category": "supermarket",
            "custom_domain": null,
            "design_settings": {
                "primary_color": "#16a34a",
                "secondary_color": "#facc15",
                "background": "#ffffff",
                "foreground": "#0f172a",
                "border": "#e2e8f0",
                "radius": "0.75rem"
            }
        },
        "products": [
            { "id": 10, "name": "Olive oil", "price": "8.25", "stock_quantity": 40, "category": "Pantry", "is_available": true },
            { "id": 11, "name": "Za'atar", "price": "3.10", "stock_quantity": 0, "category": "Spices", "is_available": false }
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.path().exists());
    }

    #[test]
    fn payload_fixtures_are_valid_json() {
        for raw in [restaurant_payload_json(), supermarket_payload_json()] {
            let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
            assert!(value["system"]["design_settings"].is_object());
        }
    }
}
