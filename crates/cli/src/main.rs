//! Teahouse storefront CLI

use std::process;

use tracing::error;

use crate::config::Cli;

mod commands;
mod config;
mod logging;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load();

    if let Err(error) = logging::init(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    let ctx = commands::Context::new(&cli.shop);

    if let Err(err) = cli.command.run(ctx).await {
        error!(error = %err, "command failed");
        eprintln!("{err}");
        process::exit(1);
    }
}
