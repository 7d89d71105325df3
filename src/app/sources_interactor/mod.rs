// Sources interactor - Reports the cache state of configured sources

use std::sync::Arc;

use serde::Serialize;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::format_file_size;

/// Cache state of one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStatus {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub schema: ManifestSchema,
    pub enabled: bool,
    pub cached: bool,
    /// `yyyy-MM-dd`, empty when unknown
    pub last_updated: String,
    pub disk_usage: u64,
}

impl SourceStatus {
    pub fn disk_usage_display(&self) -> String {
        format_file_size(self.disk_usage)
    }
}

/// Interactor for source listing
pub struct SourcesInteractor {
    store_port: Arc<dyn ManifestStorePort>,
    log_port: Arc<dyn LogPort>,
}

impl SourcesInteractor {
    pub fn new(store_port: Arc<dyn ManifestStorePort>, log_port: Arc<dyn LogPort>) -> Self {
        Self {
            store_port,
            log_port,
        }
    }

    /// Status of a single source
    pub async fn status(&self, source: &Source) -> SourceStatus {
        let cached = self.store_port.is_cached(&source.name).await;
        let last_updated = if cached {
            self.store_port.last_updated(source).await
        } else {
            String::new()
        };
        let disk_usage = match self.store_port.disk_usage(&source.name).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.log_port
                    .warn(&format!("{}: disk usage unavailable: {}", source.name, e));
                0
            }
        };

        SourceStatus {
            name: source.name.clone(),
            description: source.description.clone(),
            source_type: source.source_type,
            schema: source.schema(),
            enabled: source.enabled,
            cached,
            last_updated,
            disk_usage,
        }
    }

    /// Remove the cached files of a source
    pub async fn wipe(&self, source: &Source) -> Result<(), DomainError> {
        self.store_port.wipe(&source.name).await?;
        self.log_port.info(&format!("{}: cache wiped", source.name));
        Ok(())
    }

    /// Status of every source, in configured order
    pub async fn list(&self, sources: &[Source]) -> Vec<SourceStatus> {
        let mut statuses = Vec::with_capacity(sources.len());
        for source in sources {
            statuses.push(self.status(source).await);
        }
        self.log_port
            .debug(&format!("Listed {} sources", statuses.len()));
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStoreAdapter, TracingLogAdapter};

    #[tokio::test]
    async fn test_status_reports_cache_state() {
        let store = MemoryStoreAdapter::new()
            .with_manifest("tvOS 12", r#"{"assets": []}"#)
            .with_date("tvOS 12", "2020-03-01");
        let interactor = SourcesInteractor::new(Arc::new(store), Arc::new(TracingLogAdapter::default()));

        let sources = vec![
            Source::new("tvOS 12", "https://a/", SourceType::TvOS12),
            Source::new("tvOS 10", "https://b/", SourceType::TvOS10),
        ];
        let statuses = interactor.list(&sources).await;

        assert!(statuses[0].cached);
        assert_eq!(statuses[0].last_updated, "2020-03-01");
        assert_eq!(statuses[0].disk_usage, 14);
        assert!(!statuses[1].cached);
        assert_eq!(statuses[1].last_updated, "");
        assert_eq!(statuses[1].schema, ManifestSchema::TvOS10);
    }

    #[tokio::test]
    async fn test_wipe_clears_cache_state() {
        let store = MemoryStoreAdapter::new()
            .with_manifest("tvOS 12", r#"{"assets": []}"#)
            .with_date("tvOS 12", "2020-03-01");
        let interactor = SourcesInteractor::new(Arc::new(store), Arc::new(TracingLogAdapter::default()));
        let source = Source::new("tvOS 12", "https://a/", SourceType::TvOS12);

        interactor.wipe(&source).await.unwrap();
        let status = interactor.status(&source).await;

        assert!(!status.cached);
        assert_eq!(status.last_updated, "");
        assert_eq!(status.disk_usage, 0);
        interactor.wipe(&source).await.unwrap();
    }
}
