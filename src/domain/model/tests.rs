// Unit tests for domain models

use super::*;

#[test]
fn test_schema_for_source_type() {
    assert_eq!(ManifestSchema::for_type(SourceType::TvOS10), ManifestSchema::TvOS10);
    assert_eq!(ManifestSchema::for_type(SourceType::MacOS), ManifestSchema::MacOS);
    assert_eq!(ManifestSchema::for_type(SourceType::TvOS11), ManifestSchema::Unified);
    assert_eq!(ManifestSchema::for_type(SourceType::TvOS12), ManifestSchema::Unified);
    assert_eq!(ManifestSchema::for_type(SourceType::Local), ManifestSchema::Unified);
}

#[test]
fn test_schema_override_wins() {
    let source = Source::new("tvOS 10", "https://example.com/", SourceType::TvOS10)
        .with_schema(ManifestSchema::LegacyBatches);
    assert_eq!(source.schema(), ManifestSchema::LegacyBatches);
}

#[test]
fn test_schema_parse() {
    assert_eq!(ManifestSchema::parse("legacy").unwrap(), ManifestSchema::LegacyBatches);
    assert_eq!(ManifestSchema::parse("MacOS").unwrap(), ManifestSchema::MacOS);
    assert!(ManifestSchema::parse("tvos14").is_err());
}

#[test]
fn test_source_type_parse() {
    assert_eq!(SourceType::parse("tvOS12").unwrap(), SourceType::TvOS12);
    assert!(SourceType::parse("android").is_err());
}

#[test]
fn test_localize_path_for_local_source() {
    let source = Source::new("My videos", "file:///Users/me/Aerial/", SourceType::Local);
    assert_eq!(
        source.localize_path(Some("beach.mov")),
        "file:///Users/me/Aerial/beach.mov"
    );
    assert_eq!(source.localize_path(None), "");
}

#[test]
fn test_localize_path_for_remote_source() {
    let source = Source::new("tvOS 12", "https://sylvan.apple.com/Aerials/", SourceType::TvOS12);
    assert_eq!(
        source.localize_path(Some("https://cdn.example.com/a.mov")),
        "https://cdn.example.com/a.mov"
    );
}

#[test]
fn test_needs_supplement_matches_prefix_only() {
    assert!(Source::new("tvOS 13", "", SourceType::TvOS12).needs_supplement());
    assert!(Source::new("tvOS 13.4 beta", "", SourceType::TvOS12).needs_supplement());
    assert!(!Source::new("tvOS 12", "", SourceType::TvOS12).needs_supplement());
    assert!(!Source::new("My tvOS 13", "", SourceType::Local).needs_supplement());
}

#[test]
fn test_video_urls_slots() {
    let mut urls = VideoUrls::with_slots(&VideoFormat::LEGACY);
    assert!(urls.has_slot(VideoFormat::V4KHDR));
    assert!(!urls.has_slot(VideoFormat::V4KSDR240));
    assert!(urls.is_empty_slot(VideoFormat::V4KSDR240));

    urls.set(VideoFormat::V1080pH264, "http://a/1.mp4");
    assert_eq!(urls.get(VideoFormat::V1080pH264), "http://a/1.mp4");
    assert_eq!(urls.available(), vec![VideoFormat::V1080pH264]);
}

#[test]
fn test_video_format_serialization() {
    let json = serde_json::to_string(&VideoFormat::V4KSDR240).unwrap();
    assert_eq!(json, "\"4K-SDR-240FPS\"");

    let mut urls = VideoUrls::default();
    urls.set(VideoFormat::V1080pHDR, "x");
    assert_eq!(serde_json::to_string(&urls).unwrap(), r#"{"1080p-HDR":"x"}"#);
}

#[test]
fn test_source_deserializes_with_defaults() {
    let source: Source = toml::from_str(
        r#"
        name = "tvOS 12"
        manifest_url = "https://sylvan.apple.com/Aerials/"
        type = "tvos12"
        scenes = ["City", "Sea"]
        "#,
    )
    .unwrap();

    assert_eq!(source.source_type, SourceType::TvOS12);
    assert_eq!(source.scenes, vec![SourceScene::City, SourceScene::Sea]);
    assert!(source.is_cachable);
    assert!(source.enabled);
    assert_eq!(source.schema(), ManifestSchema::Unified);
}

#[test]
fn test_scene_tag_is_lowercase() {
    assert_eq!(SourceScene::Countryside.tag(), "countryside");
}

#[test]
fn test_display_name() {
    let video = Video {
        id: "A".to_string(),
        name: "Los Angeles".to_string(),
        secondary_name: "Santa Monica Beach".to_string(),
        kind: "video".to_string(),
        time_of_day: "day".to_string(),
        scene: "landscape".to_string(),
        urls: VideoUrls::default(),
        source: "tvOS 12".to_string(),
        poi: PoiMap::new(),
        community_poi: PoiMap::new(),
    };
    assert_eq!(video.display_name(), "Los Angeles - Santa Monica Beach");
}
