// Domain rules - Merge and identity policies

use crate::domain::model::*;

/// How a candidate video is matched against videos already in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Same identifier
    ById,
    /// Same identifier, or failing that the same non-empty 1080p H.264 URL
    ByIdOrPrimaryUrl,
}

impl DuplicatePolicy {
    /// Matching policy for videos decoded from a given schema
    pub fn for_schema(schema: ManifestSchema) -> Self {
        match schema {
            ManifestSchema::LegacyBatches => DuplicatePolicy::ByIdOrPrimaryUrl,
            ManifestSchema::TvOS10 | ManifestSchema::Unified | ManifestSchema::MacOS => {
                DuplicatePolicy::ById
            }
        }
    }

    /// Whether an existing video is the same physical video as the candidate
    pub fn matches(&self, existing: &Video, id: &str, primary_url: &str) -> bool {
        if existing.id == id {
            return true;
        }
        match self {
            DuplicatePolicy::ById => false,
            DuplicatePolicy::ByIdOrPrimaryUrl => {
                !primary_url.is_empty() && existing.url(VideoFormat::V1080pH264) == primary_url
            }
        }
    }
}

/// Outcome of a slot-fill merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub urls_filled: usize,
    pub poi_filled: usize,
}

impl MergeOutcome {
    pub fn changed(&self) -> bool {
        self.urls_filled > 0 || self.poi_filled > 0
    }
}

/// First-writer-wins merge of a later contributor into an existing video.
///
/// A slot is only written while it is empty; a non-empty value is never replaced,
/// whichever contributor is newer.
pub struct SlotFillMerger;

impl SlotFillMerger {
    /// Merge a URL table and POI annotations into an existing video
    pub fn merge(existing: &mut Video, urls: &VideoUrls, poi: &PoiMap) -> MergeOutcome {
        MergeOutcome {
            urls_filled: Self::merge_urls(&mut existing.urls, urls),
            poi_filled: Self::merge_poi(&mut existing.poi, poi),
        }
    }

    /// Fill empty URL slots, returning how many were filled
    pub fn merge_urls(existing: &mut VideoUrls, incoming: &VideoUrls) -> usize {
        let mut filled = 0;
        for (format, url) in incoming.iter() {
            if !existing.is_empty_slot(format) {
                continue;
            }
            if !url.is_empty() {
                existing.set(format, url);
                filled += 1;
            } else if !existing.has_slot(format) {
                // keep every declared slot present
                existing.set(format, "");
            }
        }
        filled
    }

    /// Add POI offsets the existing video does not annotate yet
    pub fn merge_poi(existing: &mut PoiMap, incoming: &PoiMap) -> usize {
        let mut filled = 0;
        for (offset, label) in incoming {
            if label.is_empty() {
                continue;
            }
            let slot = existing.entry(offset.clone()).or_default();
            if slot.is_empty() {
                *slot = label.clone();
                filled += 1;
            }
        }
        filled
    }
}
