// Lookup tables adapter - Community naming and catalog corrections from a JSON file

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// In-memory lookup tables.
///
/// ```json
/// {
///   "communityNames": { "<id>": "Santa Monica Beach" },
///   "communityPoi": { "<id>": { "0": "..." } },
///   "sceneOverrides": { "<id>": "City" },
///   "mergeInfo": { "<id>": { "url-1080-SDR": "...", "url-1080-HDR": "...", "url-4K-SDR": "...", "url-4K-HDR": "..." } },
///   "mergePoi": { "<old id>": "<new id>" },
///   "extraPoi": { "<new id>": { "0": "..." } },
///   "localizedNames": { "<key>": "Yosemite" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupTables {
    pub community_names: HashMap<String, String>,
    pub community_poi: HashMap<String, PoiMap>,
    pub scene_overrides: HashMap<String, SourceScene>,
    pub merge_info: HashMap<String, MergeUrls>,
    pub merge_poi: HashMap<String, String>,
    pub extra_poi: HashMap<String, PoiMap>,
    pub localized_names: HashMap<String, String>,
}

impl LookupTables {
    /// Parse tables from a JSON document
    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse lookup tables: {}", e)))
    }

    /// Load tables from a JSON file
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to read lookup tables {}: {}",
                path.display(),
                e
            ))
        })?;
        let tables = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            community_names = tables.community_names.len(),
            scene_overrides = tables.scene_overrides.len(),
            merge_info = tables.merge_info.len(),
            "Loaded lookup tables"
        );
        Ok(tables)
    }
}

impl NamingPort for LookupTables {
    fn community_name(&self, id: &str) -> Option<String> {
        self.community_names.get(id).cloned()
    }

    fn community_poi(&self, id: &str) -> PoiMap {
        self.community_poi.get(id).cloned().unwrap_or_default()
    }

    fn localized_name(&self, key: &str) -> String {
        self.localized_names
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn extra_poi(&self, alternate_id: &str) -> PoiMap {
        self.extra_poi.get(alternate_id).cloned().unwrap_or_default()
    }
}

impl SourceInfoPort for LookupTables {
    fn scene_override(&self, id: &str) -> Option<SourceScene> {
        self.scene_overrides.get(id).copied()
    }

    fn merge_info(&self, id: &str) -> Option<MergeUrls> {
        self.merge_info.get(id).cloned()
    }

    fn merge_poi(&self, id: &str) -> Option<String> {
        self.merge_poi.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_empty_tables() {
        let tables = LookupTables::from_json("{}").unwrap();
        assert_eq!(tables, LookupTables::default());
        assert_eq!(tables.community_name("X"), None);
        assert!(tables.community_poi("X").is_empty());
        assert_eq!(tables.localized_name("KEY"), "KEY");
    }

    #[test]
    fn test_scene_override_parses_scene_names() {
        let tables =
            LookupTables::from_json(r#"{"sceneOverrides": {"A": "Space", "B": "Beach"}}"#).unwrap();
        assert_eq!(tables.scene_override("A"), Some(SourceScene::Space));
        assert_eq!(tables.scene_override("B"), Some(SourceScene::Beach));
        assert_eq!(tables.scene_override("C"), None);
    }

    #[test]
    fn test_invalid_scene_is_rejected() {
        let result = LookupTables::from_json(r#"{"sceneOverrides": {"A": "Desert"}}"#);
        assert!(matches!(result, Err(DomainError::ConfigFail(_))));
    }

    #[test]
    fn test_merge_poi_resolves_through_extra_poi() {
        let tables = LookupTables::from_json(
            r#"{"mergePoi": {"OLD": "NEW"}, "extraPoi": {"NEW": {"30": "Bridge"}}}"#,
        )
        .unwrap();
        let alternate = tables.merge_poi("OLD").unwrap();
        assert_eq!(tables.extra_poi(&alternate).get("30").map(String::as_str), Some("Bridge"));
    }
}
