//! Manifest ingestion
//!
//! One decoder per catalog schema generation. Each decoder turns raw document
//! bytes into canonical videos, enriches them from the lookup services and either
//! appends them to the catalog being built or merges them into the video they
//! duplicate.

pub mod enrich;
pub mod legacy;
pub mod macos;
pub mod schema;
pub mod tvos10;
pub mod unified;
pub mod urls;

use serde::Serialize;

use crate::domain::catalog::{Resolution, VideoCatalog};
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::DuplicatePolicy;

pub use enrich::{EnrichmentContext, NameResolution};
pub use urls::UrlTableBuilder;

/// Signature shared by every schema decoder
pub type IngestFn = fn(
    &Source,
    &[u8],
    &EnrichmentContext<'_>,
    &mut VideoCatalog,
) -> Result<IngestStats, DomainError>;

/// Decoder for a schema generation
pub fn decoder_for(schema: ManifestSchema) -> IngestFn {
    match schema {
        ManifestSchema::LegacyBatches => legacy::ingest,
        ManifestSchema::TvOS10 => tvos10::ingest,
        ManifestSchema::Unified => unified::ingest,
        ManifestSchema::MacOS => macos::ingest,
    }
}

/// Decode a document with the schema its source declares and merge it into `catalog`
pub fn ingest_document(
    source: &Source,
    bytes: &[u8],
    ctx: &EnrichmentContext<'_>,
    catalog: &mut VideoCatalog,
) -> Result<IngestStats, DomainError> {
    let schema = source.schema();
    tracing::debug!(source = %source.name, %schema, bytes = bytes.len(), "Decoding manifest");
    decoder_for(schema)(source, bytes, ctx, catalog)
}

/// Counters collected while ingesting one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Entries decoded from the document
    pub decoded: usize,
    /// Entries appended as new videos
    pub appended: usize,
    /// Entries merged into an existing video
    pub merged: usize,
    /// Legacy entries dropped because they are not videos
    pub dropped: usize,
    /// Legacy entries excluded because a required field is missing
    pub skipped: Vec<String>,
}

impl IngestStats {
    /// Accumulate the counters of another document
    pub fn absorb(&mut self, other: IngestStats) {
        self.decoded += other.decoded;
        self.appended += other.appended;
        self.merged += other.merged;
        self.dropped += other.dropped;
        self.skipped.extend(other.skipped);
    }
}

/// Append `video` or merge it into the video it duplicates under the
/// duplicate policy of `schema`
pub(crate) fn upsert(
    catalog: &mut VideoCatalog,
    schema: ManifestSchema,
    primary_url: &str,
    video: Video,
    stats: &mut IngestStats,
) {
    let policy = DuplicatePolicy::for_schema(schema);
    match catalog.resolve(&video.id, primary_url, policy) {
        Resolution::Duplicate(handle) => {
            let outcome = catalog.merge(handle, &video.urls, &video.poi);
            tracing::trace!(
                id = %video.id,
                urls_filled = outcome.urls_filled,
                poi_filled = outcome.poi_filled,
                "Merged duplicate video"
            );
            stats.merged += 1;
        }
        Resolution::New => {
            catalog.insert(video);
            stats.appended += 1;
        }
    }
}

/// Map a serde failure to a parse failure for `source`
pub(crate) fn parse_failure(source: &Source, error: serde_json::Error) -> DomainError {
    DomainError::ParseFailure(format!("{}: {}", source.name, error))
}
