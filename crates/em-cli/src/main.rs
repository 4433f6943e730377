use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use em_cli::{Cli, Config, Controller};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries the menu, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let teardown = Controller::new(io::stdin().lock(), io::stdout().lock(), config).run()?;
    tracing::info!(
        events = teardown.events_released,
        attributes = teardown.attributes_released,
        abandoned = teardown.queue_abandoned,
        "session ended"
    );

    Ok(())
}
