// Filesystem cache adapter - Cached manifests under a cache root directory

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::path::{manifest_path, source_dir};
use crate::utils::time::format_optional_date;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads `<cache_root>/<source name>/entries.json`
pub struct FsCacheAdapter {
    cache_root: PathBuf,
    supplement_path: PathBuf,
}

impl FsCacheAdapter {
    /// Create new cache adapter
    pub fn new(cache_root: impl Into<PathBuf>, supplement_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            supplement_path: supplement_path.into(),
        }
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Read a file, `None` if it does not exist
    async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, DomainError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::FsFail(format!(
                "{} could not be opened: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl ManifestStorePort for FsCacheAdapter {
    async fn read_manifest(&self, source_name: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Self::read_optional(&manifest_path(&self.cache_root, source_name)).await
    }

    async fn read_supplement(&self) -> Result<Option<Vec<u8>>, DomainError> {
        Self::read_optional(&self.supplement_path).await
    }

    async fn is_cached(&self, source_name: &str) -> bool {
        tokio::fs::try_exists(manifest_path(&self.cache_root, source_name))
            .await
            .unwrap_or(false)
    }

    async fn last_updated(&self, source: &Source) -> String {
        let path = manifest_path(&self.cache_root, &source.name);
        let Ok(metadata) = tokio::fs::metadata(&path).await else {
            return String::new();
        };

        // non-cachable local sources report their last write
        let date = if !source.is_cachable && source.source_type == SourceType::Local {
            metadata.modified().ok()
        } else {
            metadata.created().or_else(|_| metadata.modified()).ok()
        };

        format_optional_date(date)
    }

    async fn disk_usage(&self, source_name: &str) -> Result<u64, DomainError> {
        let dir = source_dir(&self.cache_root, source_name);

        tokio::task::spawn_blocking(move || {
            WalkDir::new(&dir)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| entry.metadata().ok())
                .map(|metadata| metadata.len())
                .sum::<u64>()
        })
        .await
        .map_err(|e| DomainError::InternalError(format!("Disk usage scan failed: {}", e)))
    }

    async fn wipe(&self, source_name: &str) -> Result<(), DomainError> {
        if source_name.trim().is_empty() || source_name.contains(['/', '\\']) || source_name == ".." {
            return Err(DomainError::BadArgs(format!(
                "'{}' does not name a cache directory",
                source_name
            )));
        }

        let dir = source_dir(&self.cache_root, source_name);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::FsFail(format!(
                "{} could not be removed: {}",
                dir.display(),
                e
            ))),
        }
    }
}
