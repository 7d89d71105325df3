//! Aerial catalog library
//!
//! Ingests the video manifests Apple has published for its Aerial screensavers
//! across several schema generations and normalizes them into one
//! deduplicated catalog of canonical videos.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::catalog::VideoCatalog;
pub use domain::errors::DomainError;
pub use domain::model::{ManifestSchema, Source, SourceScene, SourceType, Video, VideoFormat};
pub use error::{AerialError, AerialResult};
pub use manifest::{ingest_document, EnrichmentContext, IngestStats};
