//! Unified schema used by tvOS 11, 12, 13 and local sources

use crate::domain::catalog::VideoCatalog;
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::manifest::enrich::{EnrichmentContext, DEFAULT_TIME_OF_DAY};
use crate::manifest::schema::{VideoAsset, VideoManifest};
use crate::manifest::urls::UrlTableBuilder;
use crate::manifest::{parse_failure, upsert, IngestStats};

/// Decode the document structure
pub fn decode(source: &Source, bytes: &[u8]) -> Result<VideoManifest, DomainError> {
    serde_json::from_slice(bytes).map_err(|e| parse_failure(source, e))
}

/// Build the canonical video for one asset
pub fn to_video(source: &Source, asset: &VideoAsset, ctx: &EnrichmentContext<'_>) -> Video {
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
        urls: UrlTableBuilder::unified(source, asset),
        source: source.name.clone(),
        poi: asset.points_of_interest.clone().unwrap_or_default(),
        community_poi: ctx.community_poi(&asset.id),
    }
}

/// Decode and merge into `catalog`
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
        let primary_url = asset.url_1080_h264.as_deref().unwrap_or_default();
        let video = to_video(source, asset, ctx);
        upsert(catalog, ManifestSchema::Unified, primary_url, video, &mut stats);
    }

    Ok(stats)
}

/// Every asset as a canonical video, in document order and without duplicate
/// resolution. Used when a local source rewrites its own document.
pub fn read_videos(
    source: &Source,
    bytes: &[u8],
    ctx: &EnrichmentContext<'_>,
) -> Result<Vec<Video>, DomainError> {
    let manifest = decode(source, bytes)?;
    Ok(manifest
        .assets
        .iter()
        .map(|asset| to_video(source, asset, ctx))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LookupTables;

    const DOCUMENT: &str = r#"{
        "assets": [
            {
                "id": "V1",
                "accessibilityLabel": "Hawaii",
                "url-1080-H264": "http://a/1.mp4"
            },
            {
                "id": "V2",
                "accessibilityLabel": "New York",
                "title": "Lower Manhattan",
                "timeOfDay": "night",
                "scene": "city",
                "pointsOfInterest": { "0": "NY_A1_0", "60": "NY_A1_60" },
                "url-4K-HDR": "http://a/2-4k-hdr.mov"
            }
        ],
        "initialAssetCount": 2,
        "version": 1
    }"#;

    fn source() -> Source {
        Source::new("tvOS 12", "https://example.com/", SourceType::TvOS12)
    }

    #[test]
    fn test_single_h264_url_scenario() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let mut catalog = VideoCatalog::new();

        let stats = ingest(&source(), DOCUMENT.as_bytes(), &ctx, &mut catalog).unwrap();

        assert_eq!(stats.decoded, 2);
        assert_eq!(stats.appended, 2);
        let v1 = catalog.find_by_id("V1").unwrap();
        assert_eq!(v1.url(VideoFormat::V1080pH264), "http://a/1.mp4");
        for format in VideoFormat::ALL.iter().skip(1) {
            assert_eq!(v1.url(*format), "", "slot {} should be empty", format);
        }
    }

    #[test]
    fn test_same_url_under_new_id_stays_separate() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let mut catalog = VideoCatalog::new();
        let document = r#"{"assets": [
            {"id": "V1", "accessibilityLabel": "Hawaii", "url-1080-H264": "http://a/1.mp4"},
            {"id": "V9", "accessibilityLabel": "Hawaii", "url-1080-H264": "http://a/1.mp4"}
        ]}"#;

        let stats = ingest(&source(), document.as_bytes(), &ctx, &mut catalog).unwrap();

        assert_eq!(stats.merged, 0);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_defaults_applied_at_enrichment() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let videos = read_videos(&source(), DOCUMENT.as_bytes(), &ctx).unwrap();

        assert_eq!(videos[0].secondary_name, "Unknown");
        assert_eq!(videos[0].time_of_day, "day");
        assert_eq!(videos[0].scene, "landscape");
        assert!(videos[0].poi.is_empty());

        assert_eq!(videos[1].secondary_name, "Lower Manhattan");
        assert_eq!(videos[1].time_of_day, "night");
        assert_eq!(videos[1].scene, "city");
        assert_eq!(videos[1].poi.len(), 2);
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);

        let mut first = VideoCatalog::new();
        let mut second = VideoCatalog::new();
        ingest(&source(), DOCUMENT.as_bytes(), &ctx, &mut first).unwrap();
        ingest(&source(), DOCUMENT.as_bytes(), &ctx, &mut second).unwrap();

        assert_eq!(first.into_videos(), second.into_videos());
    }

    #[test]
    fn test_second_document_fills_empty_slots() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let mut catalog = VideoCatalog::new();
        ingest(&source(), DOCUMENT.as_bytes(), &ctx, &mut catalog).unwrap();

        let second = r#"{"assets": [{
            "id": "V1",
            "accessibilityLabel": "Hawaii",
            "url-1080-H264": "",
            "url-4K-HDR": "http://a/4k.mp4"
        }]}"#;
        let stats = ingest(&source(), second.as_bytes(), &ctx, &mut catalog).unwrap();

        assert_eq!(stats.merged, 1);
        assert_eq!(catalog.len(), 2);
        let v1 = catalog.find_by_id("V1").unwrap();
        assert_eq!(v1.url(VideoFormat::V1080pH264), "http://a/1.mp4");
        assert_eq!(v1.url(VideoFormat::V4KHDR), "http://a/4k.mp4");
    }

    #[test]
    fn test_invalid_document_is_parse_failure() {
        let tables = LookupTables::default();
        let ctx = EnrichmentContext::new(&tables, &tables);
        let mut catalog = VideoCatalog::new();

        let err = ingest(&source(), br#"{"asset": []}"#, &ctx, &mut catalog).unwrap_err();

        assert!(matches!(err, DomainError::ParseFailure(_)));
        assert!(catalog.is_empty());
    }
}
