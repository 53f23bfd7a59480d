use anyhow::{Context, Result};
use clap::Parser;
use resume_analyzer::cli::{handle_command, AnalyzerCli};
use resume_analyzer::core::ConfigManager;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AnalyzerCli::parse();
    let config = ConfigManager::load(cli.config.as_deref())?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&config.logging.file)
        .with_context(|| format!("Failed to open log file {}", config.logging.file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    info!("Resume analyzer starting");
    info!("Environment: {}", ConfigManager::environment());
    info!("Analysis service: {}", config.service.base_url);

    handle_command(cli, config).await
}
