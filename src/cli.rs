//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use storefront_theme::build_info;

/// Convert tenant design settings into storefront CSS custom properties.
#[derive(Debug, Parser)]
#[command(name = "storefront-theme", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: ./storefront.toml or
    /// ~/.config/storefront-theme/storefront.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr (overrides STOREFRONT_LOG).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert hex colors to `H S% L%` strings.
    Convert {
        /// Colors in `#RGB` or `#RRGGBB` form.
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Apply a design-settings JSON file (or stdin) and print the result.
    Apply {
        /// Public payload or bare settings object; `-` or absent reads stdin.
        settings: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch a tenant from the public API and print its theme.
    Fetch {
        /// Tenant subdomain sent as `x-subdomain`.
        #[arg(short = 's', long = "subdomain", conflicts_with = "host")]
        subdomain: Option<String>,

        /// Storefront hostname; the tenant is its first label.
        #[arg(long = "host")]
        host: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the default config to ~/.config/storefront-theme/storefront.toml.
    Init {
        /// Overwrite an existing config, keeping a timestamped backup.
        #[arg(long = "force")]
        force: bool,
    },
}

/// Output and application flags shared by `apply` and `fetch`.
#[derive(Debug, Clone, ClapArgs)]
pub struct OutputArgs {
    /// Treat the document root as already in dark mode.
    #[arg(long = "dark")]
    pub dark: bool,

    /// Fail instead of falling back to white on malformed colors.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format for the applied properties.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// Show color swatches on stderr.
    #[arg(long = "preview")]
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Css,
    Json,
}
