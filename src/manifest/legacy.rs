//! Legacy array-of-batches schema with loosely typed entries.
//!
//! Unlike the typed schemas, every entry must carry `url`, `accessibilityLabel`,
//! `timeOfDay`, `id` and `type`. An entry missing one of them is excluded on its
//! own; its siblings are still ingested.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::catalog::VideoCatalog;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::manifest::enrich::EnrichmentContext;
use crate::manifest::urls::UrlTableBuilder;
use crate::manifest::{parse_failure, upsert, IngestStats};

/// One entry of a legacy batch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEntry {
    pub url: String,
    pub accessibility_label: String,
    pub time_of_day: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl LegacyEntry {
    /// Decode one loosely typed entry; `position` names it when it has no usable id
    fn from_value(value: &Value, position: &str) -> Result<Self, DomainError> {
        serde_json::from_value(value.clone()).map_err(|e| DomainError::FieldMissing {
            entry: value
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| position.to_string()),
            reason: e.to_string(),
        })
    }

    pub fn is_video(&self) -> bool {
        self.kind == "video"
    }
}

/// Decode the batch structure. The outer result fails for a malformed document,
/// the inner results fail per entry.
pub fn decode(
    source: &Source,
    bytes: &[u8],
) -> Result<Vec<Result<LegacyEntry, DomainError>>, DomainError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| parse_failure(source, e))?;
    let batches = document.as_array().ok_or_else(|| {
        DomainError::ParseFailure(format!("{}: expected an array of batches", source.name))
    })?;

    let mut entries = Vec::new();
    for (batch_index, batch) in batches.iter().enumerate() {
        let assets = batch
            .get("assets")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DomainError::ParseFailure(format!(
                    "{}: batch {} has no assets array",
                    source.name, batch_index
                ))
            })?;

        for (entry_index, item) in assets.iter().enumerate() {
            let position = format!("batch {} entry {}", batch_index, entry_index);
            entries.push(LegacyEntry::from_value(item, &position));
        }
    }

    Ok(entries)
}

fn to_video(source: &Source, entry: LegacyEntry, ctx: &EnrichmentContext<'_>) -> Video {
    let merge = ctx.source_info.merge_info(&entry.id);

    Video {
        secondary_name: ctx.legacy_secondary_name(&entry.id),
        scene: ctx.scene(&entry.id, None),
        urls: UrlTableBuilder::legacy(source, Some(&entry.url), merge.as_ref()),
        source: source.name.clone(),
        poi: PoiMap::new(),
        community_poi: ctx.community_poi(&entry.id),
        id: entry.id,
        name: entry.accessibility_label,
        kind: entry.kind,
        time_of_day: entry.time_of_day,
    }
}

pub fn ingest(
    source: &Source,
    bytes: &[u8],
    ctx: &EnrichmentContext<'_>,
    catalog: &mut VideoCatalog,
) -> Result<IngestStats, DomainError> {
    let entries = decode(source, bytes)?;
    let mut stats = IngestStats::default();

    for entry in entries {
        stats.decoded += 1;
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                stats.skipped.push(e.to_string());
                continue;
            }
        };

        if !entry.is_video() {
            stats.dropped += 1;
            continue;
        }

        let primary_url = source.localize_path(Some(&entry.url));
        let video = to_video(source, entry, ctx);
        upsert(
            catalog,
            ManifestSchema::LegacyBatches,
            &primary_url,
            video,
            &mut stats,
        );
    }

    Ok(stats)
}
