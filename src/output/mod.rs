//! Rendering of catalogs and source listings

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

pub mod writer;

pub use writer::OutputWriter;

/// Rendering format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable lines
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid output format: {}. Valid formats: text, json, yaml",
                value
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}
