//! Per-schema construction of a video's format to URL table

use crate::domain::model::*;
use crate::manifest::schema::{MacAsset, VideoAsset};
use crate::ports::MergeUrls;

/// Builds complete URL tables: every format a schema declares gets a slot,
/// unavailable formats are empty strings.
pub struct UrlTableBuilder;

impl UrlTableBuilder {
    /// Unified and local assets carry every format
    pub fn unified(source: &Source, asset: &VideoAsset) -> VideoUrls {
        let mut urls = VideoUrls::with_slots(ManifestSchema::Unified.formats());
        urls.set(VideoFormat::V1080pH264, source.localize_path(asset.url_1080_h264.as_deref()));
        urls.set(VideoFormat::V1080pHEVC, source.localize_path(asset.url_1080_sdr.as_deref()));
        urls.set(VideoFormat::V1080pHDR, source.localize_path(asset.url_1080_hdr.as_deref()));
        urls.set(VideoFormat::V4KHEVC, source.localize_path(asset.url_4k_sdr.as_deref()));
        urls.set(VideoFormat::V4KHDR, source.localize_path(asset.url_4k_hdr.as_deref()));
        urls.set(VideoFormat::V4KSDR240, source.localize_path(asset.url_4k_sdr_240fps.as_deref()));
        urls
    }

    /// tvOS 10 and legacy entries only list an H.264 URL; HEVC and HDR
    /// variants come from the merge table when newer catalogs published them.
    pub fn legacy(source: &Source, url: Option<&str>, merge: Option<&MergeUrls>) -> VideoUrls {
        let mut urls = VideoUrls::with_slots(ManifestSchema::TvOS10.formats());
        urls.set(VideoFormat::V1080pH264, source.localize_path(url));

        if let Some(merge) = merge {
            urls.set(VideoFormat::V1080pHEVC, merge.url_1080_sdr.as_str());
            urls.set(VideoFormat::V1080pHDR, merge.url_1080_hdr.as_str());
            urls.set(VideoFormat::V4KHEVC, merge.url_4k_sdr.as_str());
            urls.set(VideoFormat::V4KHDR, merge.url_4k_hdr.as_str());
        }
        urls
    }

    /// The macOS document only has 240 fps encodes
    pub fn mac(source: &Source, asset: &MacAsset) -> VideoUrls {
        let mut urls = VideoUrls::with_slots(ManifestSchema::MacOS.formats());
        urls.set(VideoFormat::V4KSDR240, source.localize_path(Some(&asset.url_4k_sdr_240fps)));
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset_with_h264(url: Option<&str>) -> VideoAsset {
        VideoAsset {
            accessibility_label: "Hawaii".to_string(),
            id: "V1".to_string(),
            title: None,
            time_of_day: None,
            scene: None,
            points_of_interest: None,
            url_4k_hdr: None,
            url_4k_sdr: None,
            url_1080_h264: url.map(str::to_string),
            url_1080_hdr: None,
            url_1080_sdr: None,
            url_4k_sdr_120fps: None,
            url_4k_sdr_240fps: None,
            url: None,
            kind: None,
        }
    }

    #[test]
    fn test_unified_table_has_every_slot() {
        let source = Source::new("tvOS 12", "https://example.com/", SourceType::TvOS12);
        let urls = UrlTableBuilder::unified(&source, &asset_with_h264(Some("http://a/1.mp4")));

        for format in VideoFormat::ALL {
            assert!(urls.has_slot(format), "missing slot {}", format);
        }
        assert_eq!(urls.get(VideoFormat::V1080pH264), "http://a/1.mp4");
        assert_eq!(urls.get(VideoFormat::V4KHDR), "");
    }

    #[test]
    fn test_unified_table_localizes_file_sources() {
        let source = Source::new("Mine", "file:///videos/", SourceType::Local);
        let urls = UrlTableBuilder::unified(&source, &asset_with_h264(Some("a.mov")));

        assert_eq!(urls.get(VideoFormat::V1080pH264), "file:///videos/a.mov");
        assert_eq!(urls.get(VideoFormat::V1080pHEVC), "");
    }

    #[test]
    fn test_legacy_table_uses_merge_info() {
        let source = Source::new("tvOS 10", "https://example.com/", SourceType::TvOS10);
        let merge = MergeUrls {
            url_1080_sdr: "http://m/1080-sdr.mov".to_string(),
            url_1080_hdr: "http://m/1080-hdr.mov".to_string(),
            url_4k_sdr: "http://m/4k-sdr.mov".to_string(),
            url_4k_hdr: "http://m/4k-hdr.mov".to_string(),
        };

        let urls = UrlTableBuilder::legacy(&source, Some("http://a/old.mov"), Some(&merge));

        assert_eq!(urls.get(VideoFormat::V1080pH264), "http://a/old.mov");
        assert_eq!(urls.get(VideoFormat::V1080pHEVC), "http://m/1080-sdr.mov");
        assert_eq!(urls.get(VideoFormat::V4KHDR), "http://m/4k-hdr.mov");
        assert!(!urls.has_slot(VideoFormat::V4KSDR240));
    }

    #[test]
    fn test_legacy_table_without_merge_info() {
        let source = Source::new("tvOS 10", "https://example.com/", SourceType::TvOS10);
        let urls = UrlTableBuilder::legacy(&source, None, None);

        assert_eq!(urls.available(), Vec::<VideoFormat>::new());
        assert_eq!(urls.iter().count(), VideoFormat::LEGACY.len());
    }
}
