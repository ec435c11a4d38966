//! Jarvis Calendar CLI
//!
//! Command-line client for the calendar backend.

#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod render;

use clap::Parser;
use infrastructure::{AppConfig, LogConfig, init_logging};

use crate::cli::{Cli, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    init_logging(&LogConfig {
        filter: log_filter_from_verbosity(cli.verbose).to_string(),
        ..config.log.clone()
    })?;

    if let Some(url) = cli.api_url {
        config.api = config.api.with_base_url(url);
    }

    commands::run(cli.command, &config).await
}
