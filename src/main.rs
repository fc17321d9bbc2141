//! CLI entry point for storefront-theme.

mod app;
mod cli;

use clap::Parser;
use storefront_theme::config::load_config_with_diagnostics;
use storefront_theme::render::Renderer;
use tracing_subscriber::EnvFilter;

use crate::app::commands;
use crate::cli::Command;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    setup_tracing(args.verbose);

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    for warning in &loaded.diagnostics.warnings {
        renderer.warn(warning);
    }

    let result = match &args.command {
        Command::Convert { colors } => Ok(commands::convert(colors, &renderer)),
        Command::Apply { settings, output } => {
            commands::apply(&config, settings.as_deref(), output, &renderer)
        }
        Command::Fetch {
            subdomain,
            host,
            output,
        } => {
            commands::fetch(
                &config,
                subdomain.as_deref(),
                host.as_deref(),
                output,
                &renderer,
            )
            .await
        }
        Command::Init { force } => commands::init(*force, &renderer).map(|()| String::new()),
    };

    match result {
        Ok(stdout) => print!("{stdout}"),
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Stderr logging; `STOREFRONT_LOG` takes an `EnvFilter` directive.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("storefront_theme=debug,info")
    } else {
        EnvFilter::try_from_env("STOREFRONT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
