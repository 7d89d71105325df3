// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No manifest bytes are available for the source
    NotCached(String),
    /// Manifest bytes are present but the document does not match its schema
    ParseFailure(String),
    /// A legacy catalog entry lacks a required field or carries one of the wrong type
    FieldMissing { entry: String, reason: String },
    /// Invalid arguments provided
    BadArgs(String),
    /// File system operation failed
    FsFail(String),
    /// Configuration could not be loaded or is invalid
    ConfigFail(String),
    /// Internal error
    InternalError(String),
}

impl DomainError {
    /// Whether this error only means "nothing to ingest" rather than a fault
    pub fn is_not_cached(&self) -> bool {
        matches!(self, DomainError::NotCached(_))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotCached(msg) => write!(f, "Not cached: {}", msg),
            DomainError::ParseFailure(msg) => write!(f, "Could not parse manifest data: {}", msg),
            DomainError::FieldMissing { entry, reason } => {
                write!(f, "Entry {} excluded: {}", entry, reason)
            }
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::ConfigFail(msg) => write!(f, "Configuration error: {}", msg),
            DomainError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
