//! Subcommand handlers.

use std::io::Read;

use storefront_theme::api::PublicClient;
use storefront_theme::color::{is_valid_hex, to_css_hsl_string};
use storefront_theme::config::{initialize_default_global_config, Config, GlobalConfigInitResult};
use storefront_theme::error::{AppError, SettingsError};
use storefront_theme::render::Renderer;
use storefront_theme::tenant::{subdomain_from_host, Layout, PublicPayload, SettingsDocument};

use crate::app::output::{render_theme, OutputSettings};
use crate::cli::OutputArgs;

/// `convert`: one `input: H S% L%` line per colour.
pub(crate) fn convert(colors: &[String], renderer: &Renderer) -> String {
    let mut out = String::new();
    for color in colors {
        if !is_valid_hex(color) {
            renderer.warn(&format!("`{color}` is not #RGB or #RRGGBB; using white"));
        }
        out.push_str(&format!("{color}: {}\n", to_css_hsl_string(color)));
    }
    out
}

/// `apply`: theme from a settings file, or stdin for `-`/absent.
pub(crate) fn apply(
    config: &Config,
    settings_path: Option<&str>,
    output: &OutputArgs,
    renderer: &Renderer,
) -> Result<String, AppError> {
    let text = read_settings_text(settings_path).map_err(SettingsError::from)?;
    let document = SettingsDocument::parse(&text)?;
    if let Some(payload) = document.payload() {
        report_tenant(renderer, payload);
    }
    let settings = OutputSettings::resolve(output, &config.theme);
    render_theme(&document.theme(), &settings, renderer)
}

/// `fetch`: theme from the live public API.
pub(crate) async fn fetch(
    config: &Config,
    subdomain: Option<&str>,
    host: Option<&str>,
    output: &OutputArgs,
    renderer: &Renderer,
) -> Result<String, AppError> {
    let tenant = resolve_tenant(subdomain, host, config.api.subdomain.as_deref())
        .ok_or(AppError::MissingTenant)?;
    let client = PublicClient::new(&config.api);
    let payload = client.fetch(&tenant).await?;
    report_tenant(renderer, &payload);
    let settings = OutputSettings::resolve(output, &config.theme);
    render_theme(&payload.theme(), &settings, renderer)
}

/// `init`: write the default global config.
pub(crate) fn init(force: bool, renderer: &Renderer) -> Result<(), AppError> {
    match initialize_default_global_config(force)? {
        GlobalConfigInitResult::Created { path } => {
            renderer.section("config created");
            renderer.field("path", &path.display().to_string());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            renderer.warn(&format!(
                "{} already exists; pass --force to overwrite",
                path.display()
            ));
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.section("config overwritten");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
        }
    }
    Ok(())
}

/// Tenant precedence: `--subdomain`, then `--host`, then config/env default.
pub(crate) fn resolve_tenant(
    subdomain: Option<&str>,
    host: Option<&str>,
    configured: Option<&str>,
) -> Option<String> {
    let explicit = subdomain
        .map(|value| value.trim().to_ascii_lowercase())
        .filter(|value| !value.is_empty());
    explicit
        .or_else(|| host.and_then(subdomain_from_host))
        .or_else(|| configured.map(str::to_string))
}

fn read_settings_text(path: Option<&str>) -> std::io::Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn report_tenant(renderer: &Renderer, payload: &PublicPayload) {
    let layout = Layout::for_payload(Some(payload));
    let name = if payload.system.name.is_empty() {
        "(unnamed tenant)"
    } else {
        payload.system.name.as_str()
    };
    renderer.section(name);
    renderer.field("category", payload.category().as_str());
    renderer.field("layout", layout.label());
    renderer.field("items", &payload.item_count().to_string());
    if let Layout::Unknown(raw) = &layout {
        renderer.warn(&format!("unknown storefront category `{raw}`"));
    }
}
