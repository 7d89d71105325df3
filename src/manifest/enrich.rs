//! Field enrichment from the community and correction tables

use crate::domain::model::*;
use crate::manifest::schema::{MacAsset, MacManifest, VideoAsset};
use crate::ports::{NamingPort, SourceInfoPort};

/// Scene used when neither a correction nor the document provides one
pub const DEFAULT_SCENE: &str = "landscape";

/// Time of day used when the document does not provide one
pub const DEFAULT_TIME_OF_DAY: &str = "day";

/// Secondary name used when neither a community name nor a title exists
pub const UNKNOWN_NAME: &str = "Unknown";

/// Name reported for macOS assets whose subcategory is not in the category tree
pub const NOT_FOUND_NAME: &str = "Not found";

/// Read-only lookup services consulted while ingesting a document
#[derive(Clone, Copy)]
pub struct EnrichmentContext<'a> {
    pub naming: &'a dyn NamingPort,
    pub source_info: &'a dyn SourceInfoPort,
}

impl<'a> EnrichmentContext<'a> {
    pub fn new(naming: &'a dyn NamingPort, source_info: &'a dyn SourceInfoPort) -> Self {
        Self {
            naming,
            source_info,
        }
    }

    /// Community name, else the asset title, else "Unknown"
    pub fn secondary_name(&self, asset: &VideoAsset) -> String {
        self.naming
            .community_name(&asset.id)
            .or_else(|| asset.title.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Community name or nothing, for the loosely typed legacy entries
    pub fn legacy_secondary_name(&self, id: &str) -> String {
        self.naming.community_name(id).unwrap_or_default()
    }

    pub fn mac_secondary_name(&self, asset: &MacAsset) -> String {
        self.naming.localized_name(&asset.localized_name_key)
    }

    /// Corrected scene, else the document's scene, else "landscape"
    pub fn scene(&self, id: &str, declared: Option<&str>) -> String {
        match self.source_info.scene_override(id) {
            Some(scene) => scene.tag(),
            None => declared.unwrap_or(DEFAULT_SCENE).to_string(),
        }
    }

    pub fn community_poi(&self, id: &str) -> PoiMap {
        self.naming.community_poi(id)
    }

    /// Points of interest of an old video, borrowed from its newer alternate id
    pub fn merged_poi(&self, id: &str) -> PoiMap {
        self.source_info
            .merge_poi(id)
            .map(|alternate| self.naming.extra_poi(&alternate))
            .unwrap_or_default()
    }

    /// Resolve the display name of a macOS asset through the category tree
    pub fn mac_name(&self, asset: &MacAsset, manifest: &MacManifest) -> NameResolution {
        let Some(wanted) = asset.subcategories.first() else {
            return NameResolution::NotFound;
        };

        manifest
            .categories
            .iter()
            .filter_map(|category| category.subcategories.as_ref())
            .flatten()
            .find(|subcategory| &subcategory.id == wanted)
            .map(|subcategory| {
                NameResolution::Found(self.naming.localized_name(&subcategory.localized_name_key))
            })
            .unwrap_or(NameResolution::NotFound)
    }
}

/// Outcome of a macOS category lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    Found(String),
    /// Degraded success, the video keeps the "Not found" name
    NotFound,
}

impl NameResolution {
    pub fn into_name(self) -> String {
        match self {
            NameResolution::Found(name) => name,
            NameResolution::NotFound => NOT_FOUND_NAME.to_string(),
        }
    }
}
