// Memory store adapter - Manifests held in memory

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

/// Byte store backed by a map, for standalone documents and tests
#[derive(Debug, Default)]
pub struct MemoryStoreAdapter {
    manifests: RwLock<HashMap<String, Vec<u8>>>,
    supplement: Option<Vec<u8>>,
    dates: HashMap<String, String>,
}

impl MemoryStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a manifest for a source
    pub fn with_manifest(mut self, source_name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(manifests) = self.manifests.get_mut() {
            manifests.insert(source_name.to_string(), bytes.into());
        }
        self
    }

    /// Provide the supplementary asset document
    pub fn with_supplement(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.supplement = Some(bytes.into());
        self
    }

    /// Record a `yyyy-MM-dd` date for a source
    pub fn with_date(mut self, source_name: &str, date: &str) -> Self {
        self.dates.insert(source_name.to_string(), date.to_string());
        self
    }

    fn manifests(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Vec<u8>>>, DomainError> {
        self.manifests
            .read()
            .map_err(|_| DomainError::InternalError("Manifest store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ManifestStorePort for MemoryStoreAdapter {
    async fn read_manifest(&self, source_name: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.manifests()?.get(source_name).cloned())
    }

    async fn read_supplement(&self) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.supplement.clone())
    }

    async fn is_cached(&self, source_name: &str) -> bool {
        self.manifests()
            .map(|manifests| manifests.contains_key(source_name))
            .unwrap_or(false)
    }

    async fn last_updated(&self, source: &Source) -> String {
        if !self.is_cached(&source.name).await {
            return String::new();
        }
        self.dates.get(&source.name).cloned().unwrap_or_default()
    }

    async fn disk_usage(&self, source_name: &str) -> Result<u64, DomainError> {
        Ok(self
            .manifests()?
            .get(source_name)
            .map(|bytes| bytes.len() as u64)
            .unwrap_or(0))
    }

    async fn wipe(&self, source_name: &str) -> Result<(), DomainError> {
        self.manifests
            .write()
            .map_err(|_| DomainError::InternalError("Manifest store lock poisoned".to_string()))?
            .remove(source_name);
        Ok(())
    }
}
