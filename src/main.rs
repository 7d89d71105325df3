//! Aerial catalog CLI
//!
//! Ingests the cached Aerial video manifests of the configured sources and prints
//! the deduplicated catalog.
//!
//! # Usage
//!
//! ```bash
//! aerial sources
//! aerial ingest --source "tvOS 12" --format json
//! aerial decode --input entries.json --schema unified --base-url file:///videos/
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use aerial_catalog::app::container::DefaultAppContainer;
use aerial_catalog::cli::{commands, Cli, Commands};
use aerial_catalog::config_initialization::initialize_configuration_hierarchy;
use aerial_catalog::output::{OutputFormat, OutputWriter};
use aerial_catalog::ports::{config_keys, ConfigPort};
use aerial_catalog::utils::logging::{LogFormat, LoggingConfig};

/// Main entry point for the Aerial catalog CLI
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = initialize_configuration_hierarchy(&cli)?;

    // Initialize logging
    let log_format = match cli
        .log_format
        .clone()
        .or_else(|| std::env::var("AERIAL_LOG_FORMAT").ok())
    {
        Some(format) => LogFormat::parse(&format)?,
        None => LogFormat::Compact,
    };
    LoggingConfig {
        level: config.get_config_or_default(config_keys::LOG_LEVEL, "info"),
        format: log_format,
        target: false,
    }
    .init();

    if let Some(path) = config.config_file_path() {
        debug!("Using configuration file {}", path);
    }

    let writer = OutputWriter::new(OutputFormat::parse(
        &config.get_config_or_default(config_keys::OUTPUT_FORMAT, "text"),
    )?);

    // Execute the requested command
    let output = match cli.command {
        Commands::Ingest(args) => {
            info!("Executing ingest command");
            let container = DefaultAppContainer::new(&config)?;
            commands::ingest(args, &config, &container, writer).await?
        }
        Commands::Sources(args) => {
            info!("Executing sources command");
            let container = DefaultAppContainer::new(&config)?;
            commands::sources(args, &config, &container, writer).await?
        }
        Commands::Decode(args) => {
            info!("Executing decode command");
            commands::decode(args, &config, writer).await?
        }
    };

    print!("{}", output);
    Ok(())
}
