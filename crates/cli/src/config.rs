//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Command;

/// Teahouse storefront
#[derive(Debug, Parser)]
#[command(name = "teahouse", about = "Teahouse storefront", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Shop backend and local storage settings.
    #[command(flatten)]
    pub(crate) shop: ShopConfig,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments.
    pub(crate) fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub(crate) log_format: LogFormat,
}

/// Shop settings.
#[derive(Debug, Args)]
pub(crate) struct ShopConfig {
    /// Shop backend base URL
    #[arg(
        long,
        env = "TEAHOUSE_API_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    pub(crate) api_url: String,

    /// Directory holding the persisted cart
    #[arg(long, env = "TEAHOUSE_DATA_DIR", default_value = ".teahouse", global = true)]
    pub(crate) data_dir: PathBuf,

    /// Read the menu from a YAML catalog instead of the backend
    #[arg(long, env = "TEAHOUSE_MENU_FILE", global = true)]
    pub(crate) menu_file: Option<PathBuf>,
}
