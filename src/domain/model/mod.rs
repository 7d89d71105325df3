// Domain models - Core types and data structures

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Point-of-interest annotations, keyed by playback offset in seconds
pub type PoiMap = BTreeMap<String, String>;

/// Name prefix of the catalog generation that needs the supplementary asset list
pub const SUPPLEMENT_SOURCE_PREFIX: &str = "tvOS 13";

/// Prefix marking a base location on the local file system
pub const FILE_URL_PREFIX: &str = "file://";

/// Catalog generation a source was published for.
///
/// tvOS 10 has its own format, tvOS 11 is close to 12+ but without points of
/// interest, and 12/13 share the format that local sources use as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Local,
    #[serde(rename = "tvos10")]
    TvOS10,
    #[serde(rename = "tvos11")]
    TvOS11,
    #[serde(rename = "tvos12")]
    TvOS12,
    #[serde(rename = "macos")]
    MacOS,
}

impl SourceType {
    /// Parse source type from string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "local" => Ok(SourceType::Local),
            "tvos10" => Ok(SourceType::TvOS10),
            "tvos11" => Ok(SourceType::TvOS11),
            "tvos12" => Ok(SourceType::TvOS12),
            "macos" => Ok(SourceType::MacOS),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid source type: {}. Valid types: local, tvos10, tvos11, tvos12, macos",
                value
            ))),
        }
    }
}

/// Scene classification a source or video can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceScene {
    Nature,
    City,
    Space,
    Sea,
    Beach,
    Countryside,
}

impl SourceScene {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceScene::Nature => "Nature",
            SourceScene::City => "City",
            SourceScene::Space => "Space",
            SourceScene::Sea => "Sea",
            SourceScene::Beach => "Beach",
            SourceScene::Countryside => "Countryside",
        }
    }

    /// Scene tag as stored on a canonical video
    pub fn tag(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for SourceScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural schema a manifest document is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestSchema {
    /// Array of batches holding loosely typed asset dictionaries
    LegacyBatches,
    /// tvOS 10 array of `{id, assets}` groups
    #[serde(rename = "tvos10")]
    TvOS10,
    /// tvOS 11/12/13 and local sources
    Unified,
    /// macOS desktop manifest with a category tree
    #[serde(rename = "macos")]
    MacOS,
}

impl ManifestSchema {
    /// Default schema for a source type
    pub fn for_type(source_type: SourceType) -> Self {
        match source_type {
            SourceType::TvOS10 => ManifestSchema::TvOS10,
            SourceType::MacOS => ManifestSchema::MacOS,
            SourceType::Local | SourceType::TvOS11 | SourceType::TvOS12 => {
                ManifestSchema::Unified
            }
        }
    }

    /// Formats every video produced by this schema carries a slot for
    pub fn formats(&self) -> &'static [VideoFormat] {
        match self {
            ManifestSchema::LegacyBatches | ManifestSchema::TvOS10 => &VideoFormat::LEGACY,
            ManifestSchema::Unified | ManifestSchema::MacOS => &VideoFormat::ALL,
        }
    }

    /// Parse schema from string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "legacy-batches" | "legacy" => Ok(ManifestSchema::LegacyBatches),
            "tvos10" => Ok(ManifestSchema::TvOS10),
            "unified" => Ok(ManifestSchema::Unified),
            "macos" => Ok(ManifestSchema::MacOS),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid manifest schema: {}. Valid schemas: legacy-batches, tvos10, unified, macos",
                value
            ))),
        }
    }
}

impl fmt::Display for ManifestSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManifestSchema::LegacyBatches => "legacy-batches",
            ManifestSchema::TvOS10 => "tvos10",
            ManifestSchema::Unified => "unified",
            ManifestSchema::MacOS => "macos",
        };
        f.write_str(name)
    }
}

/// A named catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub manifest_url: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(default)]
    pub scenes: Vec<SourceScene>,
    #[serde(default = "default_true")]
    pub is_cachable: bool,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub more: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Overrides the schema implied by `source_type`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<ManifestSchema>,
}

fn default_true() -> bool {
    true
}

impl Source {
    /// Create a new source with default metadata
    pub fn new(name: impl Into<String>, manifest_url: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            manifest_url: manifest_url.into(),
            source_type,
            scenes: Vec::new(),
            is_cachable: true,
            license: String::new(),
            more: String::new(),
            enabled: true,
            schema: None,
        }
    }

    /// Force a specific manifest schema
    pub fn with_schema(mut self, schema: ManifestSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Schema used to decode this source's manifest
    pub fn schema(&self) -> ManifestSchema {
        self.schema
            .unwrap_or_else(|| ManifestSchema::for_type(self.source_type))
    }

    /// Whether the base location is on the local file system
    pub fn is_local_file(&self) -> bool {
        self.manifest_url.starts_with(FILE_URL_PREFIX)
    }

    /// Whether the supplementary asset list is unioned into this source
    pub fn needs_supplement(&self) -> bool {
        self.name.starts_with(SUPPLEMENT_SOURCE_PREFIX)
    }

    /// Resolve an asset path against the base location.
    ///
    /// Absent paths become empty strings.
    pub fn localize_path(&self, path: Option<&str>) -> String {
        match path {
            Some(path) if self.is_local_file() => format!("{}{}", self.manifest_url, path),
            Some(path) => path.to_string(),
            None => String::new(),
        }
    }
}

/// Resolution/codec/dynamic-range combination a video URL is encoded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VideoFormat {
    #[serde(rename = "1080p-H264")]
    V1080pH264,
    #[serde(rename = "1080p-HEVC")]
    V1080pHEVC,
    #[serde(rename = "1080p-HDR")]
    V1080pHDR,
    #[serde(rename = "4K-HEVC")]
    V4KHEVC,
    #[serde(rename = "4K-HDR")]
    V4KHDR,
    #[serde(rename = "4K-SDR-240FPS")]
    V4KSDR240,
}

impl VideoFormat {
    /// Every known format
    pub const ALL: [VideoFormat; 6] = [
        VideoFormat::V1080pH264,
        VideoFormat::V1080pHEVC,
        VideoFormat::V1080pHDR,
        VideoFormat::V4KHEVC,
        VideoFormat::V4KHDR,
        VideoFormat::V4KSDR240,
    ];

    /// Formats known before the 240 fps encodes existed
    pub const LEGACY: [VideoFormat; 5] = [
        VideoFormat::V1080pH264,
        VideoFormat::V1080pHEVC,
        VideoFormat::V1080pHDR,
        VideoFormat::V4KHEVC,
        VideoFormat::V4KHDR,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VideoFormat::V1080pH264 => "1080p-H264",
            VideoFormat::V1080pHEVC => "1080p-HEVC",
            VideoFormat::V1080pHDR => "1080p-HDR",
            VideoFormat::V4KHEVC => "4K-HEVC",
            VideoFormat::V4KHDR => "4K-HDR",
            VideoFormat::V4KSDR240 => "4K-SDR-240FPS",
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format to URL table of one video. An empty string means "not available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoUrls(BTreeMap<VideoFormat, String>);

impl VideoUrls {
    /// Table with an empty slot for each of the given formats
    pub fn with_slots(formats: &[VideoFormat]) -> Self {
        Self(formats.iter().map(|f| (*f, String::new())).collect())
    }

    pub fn set(&mut self, format: VideoFormat, url: impl Into<String>) {
        self.0.insert(format, url.into());
    }

    /// URL for a format, empty if unavailable
    pub fn get(&self, format: VideoFormat) -> &str {
        self.0.get(&format).map(String::as_str).unwrap_or("")
    }

    pub fn has_slot(&self, format: VideoFormat) -> bool {
        self.0.contains_key(&format)
    }

    /// Whether a slot is absent or holds an empty URL
    pub fn is_empty_slot(&self, format: VideoFormat) -> bool {
        self.get(format).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VideoFormat, &str)> {
        self.0.iter().map(|(f, u)| (*f, u.as_str()))
    }

    /// Formats with a non-empty URL
    pub fn available(&self) -> Vec<VideoFormat> {
        self.iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(format, _)| format)
            .collect()
    }
}

/// Deduplicated, enriched video shared across catalog generations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub name: String,
    pub secondary_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_of_day: String,
    pub scene: String,
    pub urls: VideoUrls,
    /// Name of the source that first contributed this video
    pub source: String,
    pub poi: PoiMap,
    pub community_poi: PoiMap,
}

impl Video {
    /// URL for a format, empty if unavailable
    pub fn url(&self, format: VideoFormat) -> &str {
        self.urls.get(format)
    }

    /// Display title, combining both names when a secondary name exists
    pub fn display_name(&self) -> String {
        if self.secondary_name.is_empty() || self.secondary_name == self.name {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.secondary_name)
        }
    }
}

#[cfg(test)]
mod tests;
