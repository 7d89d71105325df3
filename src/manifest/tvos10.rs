//! tvOS 10 schema, an array of `{id, assets}` groups

use crate::domain::catalog::VideoCatalog;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::manifest::enrich::{EnrichmentContext, DEFAULT_TIME_OF_DAY};
use crate::manifest::schema::{TvOS10Manifest, VideoAsset};
use crate::manifest::urls::UrlTableBuilder;
use crate::manifest::{parse_failure, upsert, IngestStats};

pub fn decode(source: &Source, bytes: &[u8]) -> Result<TvOS10Manifest, DomainError> {
    serde_json::from_slice(bytes).map_err(|e| parse_failure(source, e))
}

fn to_video(source: &Source, asset: &VideoAsset, ctx: &EnrichmentContext<'_>) -> Video {
    let merge = ctx.source_info.merge_info(&asset.id);

    Video {
        id: asset.id.clone(),
        name: asset.accessibility_label.clone(),
        secondary_name: ctx.secondary_name(asset),
        kind: "video".to_string(),
        time_of_day: asset
            .time_of_day
            .clone()
            .unwrap_or_else(|| DEFAULT_TIME_OF_DAY.to_string()),
        scene: ctx.scene(&asset.id, asset.scene.as_deref()),
        urls: UrlTableBuilder::legacy(source, asset.url.as_deref(), merge.as_ref()),
        source: source.name.clone(),
        poi: ctx.merged_poi(&asset.id),
        community_poi: ctx.community_poi(&asset.id),
    }
}

pub fn ingest(
    source: &Source,
    bytes: &[u8],
    ctx: &EnrichmentContext<'_>,
    catalog: &mut VideoCatalog,
) -> Result<IngestStats, DomainError> {
    let groups = decode(source, bytes)?;
    let mut stats = IngestStats::default();

    for asset in groups.iter().flat_map(|group| group.assets.iter()) {
        stats.decoded += 1;
        let primary_url = asset.url.as_deref().unwrap_or_default();
        let video = to_video(source, asset, ctx);
        upsert(catalog, ManifestSchema::TvOS10, primary_url, video, &mut stats);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LookupTables;

    const DOCUMENT: &str = r#"[
        {
            "id": "batch-1",
            "assets": [
                {
                    "id": "B1",
                    "accessibilityLabel": "Greenland",
                    "timeOfDay": "night",
                    "url": "http://a/b1.mov",
                    "type": "video"
                },
                {
                    "id": "B2",
                    "accessibilityLabel": "China",
                    "url": "http://a/b2.mov"
                }
            ]
        },
        {
            "id": "batch-2",
            "assets": [
                { "id": "B1", "accessibilityLabel": "Greenland", "url": "http://other/b1.mov" }
            ]
        }
    ]"#;

    const TABLES: &str = r#"{
        "mergeInfo": {
            "B2": {
                "url-1080-SDR": "http://m/b2-1080-sdr.mov",
                "url-1080-HDR": "http://m/b2-1080-hdr.mov",
                "url-4K-SDR": "http://m/b2-4k-sdr.mov",
                "url-4K-HDR": "http://m/b2-4k-hdr.mov"
            }
        },
        "mergePoi": { "B1": "NEW-B1" },
        "extraPoi": { "NEW-B1": { "0": "Ice sheet" } },
        "sceneOverrides": { "B2": "City" }
    }"#;

    #[test]
    fn test_groups_are_flattened_and_deduplicated() {
        let tables = LookupTables::from_json(TABLES).unwrap();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let source = Source::new("tvOS 10", "https://example.com/", SourceType::TvOS10);
        let mut catalog = VideoCatalog::new();

        let stats = ingest(&source, DOCUMENT.as_bytes(), &ctx, &mut catalog).unwrap();

        assert_eq!(stats.decoded, 3);
        assert_eq!(stats.appended, 2);
        assert_eq!(stats.merged, 1);
        let b1 = catalog.find_by_id("B1").unwrap();
        assert_eq!(b1.url(VideoFormat::V1080pH264), "http://a/b1.mov");
        assert_eq!(b1.time_of_day, "night");
        assert_eq!(b1.poi.get("0").map(String::as_str), Some("Ice sheet"));
    }

    #[test]
    fn test_merge_info_and_scene_override() {
        let tables = LookupTables::from_json(TABLES).unwrap();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let source = Source::new("tvOS 10", "https://example.com/", SourceType::TvOS10);
        let mut catalog = VideoCatalog::new();

        ingest(&source, DOCUMENT.as_bytes(), &ctx, &mut catalog).unwrap();

        let b2 = catalog.find_by_id("B2").unwrap();
        assert_eq!(b2.scene, "city");
        assert_eq!(b2.time_of_day, "day");
        assert_eq!(b2.url(VideoFormat::V4KHDR), "http://m/b2-4k-hdr.mov");
        assert!(!b2.urls.has_slot(VideoFormat::V4KSDR240));
    }
}
