//! Structural types of the catalog documents Apple publishes

use serde::{Deserialize, Serialize};

use crate::domain::model::PoiMap;

/// Asset entry shared by the tvOS 10, unified and local documents.
///
/// Besides Apple's own fields, local and community documents may carry a
/// `title` (e.g. "Santa Monica Beach" for a "Los Angeles" label), a
/// `timeOfDay` (`day`, `night`, `sunset`, `sunrise`) and a `scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAsset {
    pub accessibility_label: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_of_interest: Option<PoiMap>,
    #[serde(rename = "url-4K-HDR", default, skip_serializing_if = "Option::is_none")]
    pub url_4k_hdr: Option<String>,
    #[serde(rename = "url-4K-SDR", default, skip_serializing_if = "Option::is_none")]
    pub url_4k_sdr: Option<String>,
    #[serde(rename = "url-1080-H264", default, skip_serializing_if = "Option::is_none")]
    pub url_1080_h264: Option<String>,
    #[serde(rename = "url-1080-HDR", default, skip_serializing_if = "Option::is_none")]
    pub url_1080_hdr: Option<String>,
    #[serde(rename = "url-1080-SDR", default, skip_serializing_if = "Option::is_none")]
    pub url_1080_sdr: Option<String>,
    #[serde(rename = "url-4K-SDR-120FPS", default, skip_serializing_if = "Option::is_none")]
    pub url_4k_sdr_120fps: Option<String>,
    #[serde(rename = "url-4K-SDR-240FPS", default, skip_serializing_if = "Option::is_none")]
    pub url_4k_sdr_240fps: Option<String>,
    /// Single H.264 URL of the tvOS 10 catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// tvOS 11/12/13 and local document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoManifest {
    pub assets: Vec<VideoAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_asset_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// One group of the tvOS 10 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvOS10Group {
    pub id: String,
    pub assets: Vec<VideoAsset>,
}

/// tvOS 10 document
pub type TvOS10Manifest = Vec<TvOS10Group>;

/// macOS desktop document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacManifest {
    pub localization_version: String,
    pub categories: Vec<MacCategory>,
    pub initial_asset_count: i64,
    pub assets: Vec<MacAsset>,
    pub version: i64,
}

/// Category or subcategory node of the macOS document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<MacCategory>>,
    pub localized_description_key: String,
    #[serde(rename = "representativeAssetID")]
    pub representative_asset_id: String,
    pub preview_image: String,
    pub id: String,
    pub preferred_order: i64,
    pub localized_name_key: String,
}

/// Asset entry of the macOS document. Only 240 fps 4K SDR encodes are listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacAsset {
    #[serde(rename = "shotID")]
    pub shot_id: String,
    pub preview_image: String,
    #[serde(rename = "previewImage-900x580", default, skip_serializing_if = "Option::is_none")]
    pub preview_image_900x580: Option<String>,
    pub localized_name_key: String,
    pub accessibility_label: String,
    pub preferred_order: i64,
    pub categories: Vec<String>,
    pub id: String,
    pub subcategories: Vec<String>,
    pub points_of_interest: PoiMap,
    #[serde(rename = "url-4K-SDR-240FPS")]
    pub url_4k_sdr_240fps: String,
    pub include_in_shuffle: bool,
    pub show_in_top_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}
