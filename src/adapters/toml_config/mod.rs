// TOML config adapter - Configuration management using TOML files

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::output::OutputFormat;
use crate::ports::*;
use crate::utils::path::default_cache_root;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// On-disk layout: an `[aerial]` key/value table and `[[source]]` entries
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    aerial: toml::Table,
    #[serde(default, rename = "source")]
    sources: Vec<Source>,
}

/// TOML configuration adapter
#[derive(Debug, Clone)]
pub struct TomlConfigAdapter {
    config: HashMap<String, String>,
    sources: Vec<Source>,
    config_file_path: Option<PathBuf>,
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter holding the defaults
    pub fn new() -> Self {
        let mut adapter = Self {
            config: HashMap::new(),
            sources: Vec::new(),
            config_file_path: None,
        };
        adapter.load_default_config();
        adapter
    }

    /// Load default configuration values
    fn load_default_config(&mut self) {
        let cache_root = default_cache_root();
        self.set_config(config_keys::LOG_LEVEL, "info");
        self.set_config(config_keys::OUTPUT_FORMAT, "text");
        self.set_config(config_keys::CACHE_ROOT, &cache_root.to_string_lossy());
        self.set_config(config_keys::LOOKUPS_PATH, "");
        self.set_config(config_keys::SUPPLEMENT_PATH, "");
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config_home).join("aerial").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("aerial")
                .join("config.toml")
        } else {
            PathBuf::from("aerial.toml")
        }
    }

    /// Override a single value
    pub fn set_config(&mut self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Merge a TOML document over the current values
    pub fn merge_toml_str(&mut self, toml_content: &str) -> Result<(), DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;

        for (key, value) in parsed.aerial {
            let value = match value {
                toml::Value::String(s) => s,
                other => other.to_string(),
            };
            self.config.insert(key, value);
        }

        if !parsed.sources.is_empty() {
            self.sources = parsed.sources;
        }

        Ok(())
    }

    /// Load and merge a configuration file
    pub fn load_config(&mut self, file_path: &Path) -> Result<(), DomainError> {
        if !file_path.exists() {
            return Err(DomainError::FsFail(format!(
                "Config file does not exist: {}",
                file_path.display()
            )));
        }

        let content = std::fs::read_to_string(file_path)
            .map_err(|e| DomainError::FsFail(format!("Failed to read config file: {}", e)))?;

        self.merge_toml_str(&content)?;
        self.config_file_path = Some(file_path.to_path_buf());
        tracing::debug!(path = %file_path.display(), sources = self.sources.len(), "Loaded config file");

        Ok(())
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for TomlConfigAdapter {
    fn get_config(&self, key: &str) -> Option<String> {
        self.config.get(key).cloned()
    }

    fn sources(&self) -> Vec<Source> {
        self.sources.clone()
    }

    fn validate_config(&self) -> Result<(), DomainError> {
        if let Some(log_level) = self.config.get(config_keys::LOG_LEVEL) {
            LogLevel::parse(log_level)?;
        }

        if let Some(format) = self.config.get(config_keys::OUTPUT_FORMAT) {
            OutputFormat::parse(format)?;
        }

        let cache_root = self.get_config_or_default(config_keys::CACHE_ROOT, "");
        if cache_root.trim().is_empty() {
            return Err(DomainError::ConfigFail(
                "cache_root cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(DomainError::ConfigFail(
                    "Source name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(DomainError::ConfigFail(format!(
                    "Duplicate source name: {}",
                    source.name
                )));
            }
        }

        Ok(())
    }

    fn config_file_path(&self) -> Option<String> {
        self.config_file_path
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
    }
}
