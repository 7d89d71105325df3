// Video catalog - Arena of canonical videos built during one ingestion pass

use std::collections::HashMap;

use crate::domain::model::*;
use crate::domain::rules::*;

/// Stable index of a video inside a [`VideoCatalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoHandle(usize);

/// Result of looking a candidate up in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No matching video, the candidate must be appended
    New,
    /// The candidate is a variant of an existing video and must be merged into it
    Duplicate(VideoHandle),
}

impl Resolution {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Resolution::Duplicate(_))
    }
}

/// Ordered, deduplicated set of canonical videos.
///
/// Videos are never removed; handles stay valid for the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<Video>,
    by_id: HashMap<String, usize>,
}

impl VideoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn get(&self, handle: VideoHandle) -> &Video {
        &self.videos[handle.0]
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Video> {
        self.by_id.get(id).map(|&index| &self.videos[index])
    }

    /// Find the video a candidate duplicates, if any
    pub fn resolve(&self, id: &str, primary_url: &str, policy: DuplicatePolicy) -> Resolution {
        if let Some(&index) = self.by_id.get(id) {
            return Resolution::Duplicate(VideoHandle(index));
        }

        if policy == DuplicatePolicy::ById {
            return Resolution::New;
        }

        self.videos
            .iter()
            .position(|video| policy.matches(video, id, primary_url))
            .map(|index| Resolution::Duplicate(VideoHandle(index)))
            .unwrap_or(Resolution::New)
    }

    /// Append a video that resolved as new.
    ///
    /// If the id is already present the video is merged into the existing record.
    pub fn insert(&mut self, video: Video) -> VideoHandle {
        if let Some(&index) = self.by_id.get(&video.id) {
            SlotFillMerger::merge(&mut self.videos[index], &video.urls, &video.poi);
            return VideoHandle(index);
        }

        let index = self.videos.len();
        self.by_id.insert(video.id.clone(), index);
        self.videos.push(video);
        VideoHandle(index)
    }

    /// Slot-fill merge a later contributor into an existing video
    pub fn merge(&mut self, handle: VideoHandle, urls: &VideoUrls, poi: &PoiMap) -> MergeOutcome {
        SlotFillMerger::merge(&mut self.videos[handle.0], urls, poi)
    }

    /// Fold another catalog into this one, in the other catalog's order.
    ///
    /// Returns the number of videos that were merged rather than appended.
    pub fn absorb(&mut self, other: VideoCatalog) -> usize {
        let mut merged = 0;
        for video in other.videos {
            match self.resolve(&video.id, "", DuplicatePolicy::ById) {
                Resolution::Duplicate(handle) => {
                    self.merge(handle, &video.urls, &video.poi);
                    merged += 1;
                }
                Resolution::New => {
                    self.insert(video);
                }
            }
        }
        merged
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, format: VideoFormat, url: &str) -> Video {
        let mut urls = VideoUrls::with_slots(&VideoFormat::ALL);
        urls.set(format, url);
        Video {
            id: id.to_string(),
            name: format!("Video {}", id),
            secondary_name: String::new(),
            kind: "video".to_string(),
            time_of_day: "day".to_string(),
            scene: "landscape".to_string(),
            urls,
            source: "test".to_string(),
            poi: PoiMap::new(),
            community_poi: PoiMap::new(),
        }
    }

    #[test]
    fn test_resolve_new_then_duplicate() {
        let mut catalog = VideoCatalog::new();
        assert_eq!(catalog.resolve("V1", "", DuplicatePolicy::ById), Resolution::New);

        let handle = catalog.insert(video("V1", VideoFormat::V1080pH264, "http://a/1.mp4"));
        assert_eq!(
            catalog.resolve("V1", "", DuplicatePolicy::ById),
            Resolution::Duplicate(handle)
        );
    }

    #[test]
    fn test_resolve_by_url_only_for_legacy_policy() {
        let mut catalog = VideoCatalog::new();
        catalog.insert(video("V1", VideoFormat::V1080pH264, "http://a/1.mp4"));

        assert_eq!(
            catalog.resolve("OLD-1", "http://a/1.mp4", DuplicatePolicy::ById),
            Resolution::New
        );
        assert!(catalog
            .resolve("OLD-1", "http://a/1.mp4", DuplicatePolicy::ByIdOrPrimaryUrl)
            .is_duplicate());
    }

    #[test]
    fn test_insert_existing_id_merges() {
        let mut catalog = VideoCatalog::new();
        let first = catalog.insert(video("V1", VideoFormat::V1080pH264, "http://a/1.mp4"));
        let second = catalog.insert(video("V1", VideoFormat::V4KHDR, "http://a/4k.mp4"));

        assert_eq!(first, second);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(first).url(VideoFormat::V4KHDR), "http://a/4k.mp4");
    }

    #[test]
    fn test_absorb_preserves_order_and_first_writer() {
        let mut first = VideoCatalog::new();
        first.insert(video("V1", VideoFormat::V1080pH264, "http://first/1.mp4"));
        first.insert(video("V2", VideoFormat::V1080pH264, "http://first/2.mp4"));

        let mut second = VideoCatalog::new();
        second.insert(video("V3", VideoFormat::V1080pH264, "http://second/3.mp4"));
        second.insert(video("V1", VideoFormat::V1080pH264, "http://second/1.mp4"));

        let merged = first.absorb(second);
        let ids: Vec<&str> = first.videos().iter().map(|v| v.id.as_str()).collect();

        assert_eq!(merged, 1);
        assert_eq!(ids, vec!["V1", "V2", "V3"]);
        assert_eq!(
            first.find_by_id("V1").unwrap().url(VideoFormat::V1080pH264),
            "http://first/1.mp4"
        );
    }
}
