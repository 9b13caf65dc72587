//! Storefront CLI
//!
//! Renders catalog pages to static HTML.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use storefront_cli::cli::Args;
use storefront_cli::logging::init_logging;
use storefront_core::{LoggingConfig, StorefrontConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = StorefrontConfig::load(args.config.as_deref());
    let level = match &config {
        Ok(config) => config.logging.level.clone(),
        Err(_) => LoggingConfig::default().level,
    };
    init_logging(&level, args.verbose);

    if let Err(e) = &config {
        tracing::debug!("Configuration not loaded: {e}");
    }

    storefront_cli::commands::run(args, config).await?;
    Ok(())
}
