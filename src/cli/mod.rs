//! CLI module for the Aerial catalog
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{DecodeArgs, IngestArgs, SourcesArgs};

/// Aerial catalog tool
///
/// Ingests the cached video manifests of the configured sources and prints the
/// deduplicated catalog.
#[derive(Parser, Debug)]
#[command(name = "aerial")]
#[command(about = "Ingest and normalize Aerial video manifests")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.config/aerial/config.toml)
    #[arg(long, global = true, env = "AERIAL_CONFIG")]
    pub config: Option<String>,

    /// Directory holding the cached manifests
    #[arg(long, global = true)]
    pub cache_root: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest the cached manifests of configured sources
    Ingest(args::IngestArgs),
    /// List configured sources and their cache state
    Sources(args::SourcesArgs),
    /// Ingest a standalone manifest file
    Decode(args::DecodeArgs),
}

impl Commands {
    /// Output format requested on the command line, if any
    pub fn format(&self) -> Option<&str> {
        match self {
            Commands::Ingest(args) => args.format.as_deref(),
            Commands::Sources(args) => args.format.as_deref(),
            Commands::Decode(args) => args.format.as_deref(),
        }
    }
}
