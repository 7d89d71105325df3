//! macOS desktop schema with a category tree and 240 fps encodes only

use crate::domain::catalog::VideoCatalog;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::manifest::enrich::{EnrichmentContext, DEFAULT_TIME_OF_DAY};
use crate::manifest::schema::{MacAsset, MacManifest};
use crate::manifest::urls::UrlTableBuilder;
use crate::manifest::{parse_failure, upsert, IngestStats};

pub fn decode(source: &Source, bytes: &[u8]) -> Result<MacManifest, DomainError> {
    serde_json::from_slice(bytes).map_err(|e| parse_failure(source, e))
}

fn to_video(
    source: &Source,
    asset: &MacAsset,
    manifest: &MacManifest,
    ctx: &EnrichmentContext<'_>,
) -> Video {
    Video {
        id: asset.id.clone(),
        name: ctx.mac_name(asset, manifest).into_name(),
        secondary_name: ctx.mac_secondary_name(asset),
        kind: "video".to_string(),
        time_of_day: DEFAULT_TIME_OF_DAY.to_string(),
        scene: ctx.scene(&asset.id, None),
        urls: UrlTableBuilder::mac(source, asset),
        source: source.name.clone(),
        poi: asset.points_of_interest.clone(),
        community_poi: ctx.community_poi(&asset.id),
    }
}

pub fn ingest(
    source: &Source,
    bytes: &[u8],
    ctx: &EnrichmentContext<'_>,
    catalog: &mut VideoCatalog,
) -> Result<IngestStats, DomainError> {
    let manifest = decode(source, bytes)?;
    let mut stats = IngestStats {
        decoded: manifest.assets.len(),
        ..IngestStats::default()
    };

    for asset in &manifest.assets {
        let video = to_video(source, asset, &manifest, ctx);
        upsert(catalog, ManifestSchema::MacOS, "", video, &mut stats);
    }

    Ok(stats)
}
