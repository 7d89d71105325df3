//! Error handling module for the Aerial catalog

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for catalog operations outside the domain layer
#[derive(Error, Debug)]
pub enum AerialError {
    /// Configuration file missing or malformed
    #[error("Failed to load configuration from {path}: {message}")]
    ConfigError { path: String, message: String },

    /// Requested source is not part of the configured catalog
    #[error("Unknown source: {name}")]
    UnknownSource { name: String },

    /// Rendering of results failed
    #[error("Failed to render output: {message}")]
    OutputError { message: String },

    /// Domain layer error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type AerialResult<T> = std::result::Result<T, AerialError>;
