// Ports - Interface definitions (contracts)

use crate::domain::errors::*;
use crate::domain::model::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for the byte store holding cached manifests
#[async_trait]
pub trait ManifestStorePort: Send + Sync {
    /// Read the cached manifest of a source, `None` when nothing is cached
    async fn read_manifest(&self, source_name: &str) -> Result<Option<Vec<u8>>, DomainError>;

    /// Read the supplementary asset document, `None` when it is not available
    async fn read_supplement(&self) -> Result<Option<Vec<u8>>, DomainError>;

    /// Check if a manifest is cached for the source
    async fn is_cached(&self, source_name: &str) -> bool;

    /// Date of the cached manifest as `yyyy-MM-dd`, empty when unknown
    async fn last_updated(&self, source: &Source) -> String;

    /// Bytes used on disk by the source
    async fn disk_usage(&self, source_name: &str) -> Result<u64, DomainError>;

    /// Remove everything cached for the source; a source with nothing cached is not an error
    async fn wipe(&self, source_name: &str) -> Result<(), DomainError>;
}

/// Port for community naming and localized strings
pub trait NamingPort: Send + Sync {
    /// Community supplied name for a video
    fn community_name(&self, id: &str) -> Option<String>;

    /// Community supplied points of interest for a video, empty if none
    fn community_poi(&self, id: &str) -> PoiMap;

    /// Localized string for a key, or the key itself when untranslated
    fn localized_name(&self, key: &str) -> String;

    /// Points of interest published under an alternate id
    fn extra_poi(&self, alternate_id: &str) -> PoiMap;
}

/// Port for per-video catalog corrections
pub trait SourceInfoPort: Send + Sync {
    /// Corrected scene for a video
    fn scene_override(&self, id: &str) -> Option<SourceScene>;

    /// HEVC/HDR URLs that later catalogs published for an old video
    fn merge_info(&self, id: &str) -> Option<MergeUrls>;

    /// Alternate id whose points of interest apply to an old video
    fn merge_poi(&self, id: &str) -> Option<String>;
}

/// HEVC and HDR variants of a video only listed in newer catalogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeUrls {
    #[serde(rename = "url-1080-SDR", default)]
    pub url_1080_sdr: String,
    #[serde(rename = "url-1080-HDR", default)]
    pub url_1080_hdr: String,
    #[serde(rename = "url-4K-SDR", default)]
    pub url_4k_sdr: String,
    #[serde(rename = "url-4K-HDR", default)]
    pub url_4k_hdr: String,
}

/// Port for configuration management
pub trait ConfigPort: Send + Sync {
    /// Get configuration value
    fn get_config(&self, key: &str) -> Option<String>;

    /// Get configuration value with default
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config(key).unwrap_or_else(|| default.to_string())
    }

    /// Configured catalog sources, in declaration order
    fn sources(&self) -> Vec<Source>;

    /// Validate configuration
    fn validate_config(&self) -> Result<(), DomainError>;

    /// Path of the loaded configuration file, if any
    fn config_file_path(&self) -> Option<String>;
}

/// Port for logging and observability
pub trait LogPort: Send + Sync {
    /// Log info message
    fn info(&self, message: &str);

    /// Log warning message
    fn warn(&self, message: &str);

    /// Log error message
    fn error(&self, message: &str);

    /// Log debug message
    fn debug(&self, message: &str);
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> Result<Self, DomainError> {
        match level_str.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                level_str
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Keys understood by [`ConfigPort`]
pub mod config_keys {
    /// Directory holding one `<source>/entries.json` per cached source
    pub const CACHE_ROOT: &str = "cache_root";
    /// JSON file with community names, POIs and catalog corrections
    pub const LOOKUPS_PATH: &str = "lookups_path";
    /// Supplementary asset document unioned into tvOS 13 sources
    pub const SUPPLEMENT_PATH: &str = "supplement_path";
    pub const LOG_LEVEL: &str = "log_level";
    pub const OUTPUT_FORMAT: &str = "output_format";
}
