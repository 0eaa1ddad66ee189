//! Command-line driver for the photo feed and detail paths.

mod cli;
mod commands;
mod config;

use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    pickr_logging::initialize(&config.log_settings(cli.verbose));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(commands::run(cli.command, &config))
}
