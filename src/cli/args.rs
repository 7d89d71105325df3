//! Command-line argument definitions

use clap::Args;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Restrict to the named sources (repeatable, default: all enabled sources)
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print every decoded asset without duplicate resolution
    #[arg(long)]
    pub unprocessed: bool,

    /// Print the raw asset records instead of canonical videos
    #[arg(long, requires = "unprocessed")]
    pub raw: bool,
}

/// Arguments for the sources command
#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// Output format (text, json, yaml)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Remove the cached files of the named source before listing (repeatable)
    #[arg(long, value_name = "NAME")]
    pub wipe: Vec<String>,
}

/// Arguments for the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Manifest file to decode
    #[arg(short, long)]
    pub input: String,

    /// Manifest schema (legacy, tvos10, unified, macos)
    #[arg(short, long, default_value = "unified")]
    pub schema: String,

    /// Base location asset paths are resolved against
    #[arg(long, default_value = "")]
    pub base_url: String,

    /// Source name recorded on the decoded videos
    #[arg(long, default_value = "standalone")]
    pub name: String,

    /// Supplementary asset document, merged when the name starts with "tvOS 13"
    #[arg(long)]
    pub supplement: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(short, long)]
    pub format: Option<String>,
}
