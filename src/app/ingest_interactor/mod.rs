// Ingest interactor - Orchestrates manifest ingestion for configured sources

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::VideoCatalog;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::manifest::schema::VideoAsset;
use crate::manifest::{self, unified, EnrichmentContext, IngestStats};
use crate::ports::*;

/// How ingestion of one source ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    /// Document decoded; the catalog holds its videos
    Done,
    /// No manifest bytes were available
    NotCached,
    /// The document did not match its schema
    ParseFailure(String),
    /// The store or the decode task failed
    Failed(String),
}

impl fmt::Display for IngestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestStatus::Done => write!(f, "done"),
            IngestStatus::NotCached => write!(f, "not cached"),
            IngestStatus::ParseFailure(msg) => write!(f, "parse failure ({})", msg),
            IngestStatus::Failed(msg) => write!(f, "failed ({})", msg),
        }
    }
}

/// Result of ingesting one source
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub source: String,
    pub status: IngestStatus,
    pub stats: IngestStats,
    pub catalog: VideoCatalog,
}

impl IngestReport {
    fn empty(source: &Source, status: IngestStatus) -> Self {
        Self {
            source: source.name.clone(),
            status,
            stats: IngestStats::default(),
            catalog: VideoCatalog::new(),
        }
    }

    /// Serializable view without the videos
    pub fn summary(&self) -> IngestSummary {
        IngestSummary {
            source: self.source.clone(),
            status: self.status.clone(),
            videos: self.catalog.len(),
            stats: self.stats.clone(),
        }
    }
}

/// Per-source outcome as rendered to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestSummary {
    pub source: String,
    pub status: IngestStatus,
    pub videos: usize,
    pub stats: IngestStats,
}

/// Catalog built from several sources
#[derive(Debug, Clone, Default)]
pub struct CombinedCatalog {
    pub catalog: VideoCatalog,
    pub summaries: Vec<IngestSummary>,
    /// Videos merged because an earlier source already listed them
    pub cross_source_merges: usize,
}

/// Interactor for the ingestion use case
#[derive(Clone)]
pub struct IngestInteractor {
    store_port: Arc<dyn ManifestStorePort>,
    naming_port: Arc<dyn NamingPort>,
    source_info_port: Arc<dyn SourceInfoPort>,
    log_port: Arc<dyn LogPort>,
}

impl IngestInteractor {
    /// Create new ingest interactor with injected ports
    pub fn new(
        store_port: Arc<dyn ManifestStorePort>,
        naming_port: Arc<dyn NamingPort>,
        source_info_port: Arc<dyn SourceInfoPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            store_port,
            naming_port,
            source_info_port,
            log_port,
        }
    }

    fn context(&self) -> EnrichmentContext<'_> {
        EnrichmentContext::new(self.naming_port.as_ref(), self.source_info_port.as_ref())
    }

    /// Deduplicated canonical videos of a source, empty on any failure
    pub async fn get_videos(&self, source: &Source) -> Vec<Video> {
        self.ingest(source).await.catalog.into_videos()
    }

    /// Load, decode and merge one source
    pub async fn ingest(&self, source: &Source) -> IngestReport {
        self.ingest_from_store(source, source.needs_supplement()).await
    }

    /// Like [`ingest`](Self::ingest), but never reads the supplementary document
    pub async fn ingest_main_document(&self, source: &Source) -> IngestReport {
        self.ingest_from_store(source, false).await
    }

    async fn ingest_from_store(&self, source: &Source, with_supplement: bool) -> IngestReport {
        let bytes = match self.store_port.read_manifest(&source.name).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                self.log_port
                    .debug(&DomainError::NotCached(source.name.clone()).to_string());
                return IngestReport::empty(source, IngestStatus::NotCached);
            }
            Err(e) => {
                self.log_port.error(&format!("{}: {}", source.name, e));
                return IngestReport::empty(source, IngestStatus::Failed(e.to_string()));
            }
        };

        let supplement = if with_supplement {
            self.load_supplement(source).await
        } else {
            None
        };

        let interactor = self.clone();
        let owned = source.clone();
        let decoded = tokio::task::spawn_blocking(move || {
            interactor.ingest_bytes(&owned, &bytes, supplement.as_deref())
        })
        .await;

        match decoded {
            Ok(report) => report,
            Err(e) => {
                let message = format!("Decode task failed: {}", e);
                self.log_port.error(&format!("{}: {}", source.name, message));
                IngestReport::empty(source, IngestStatus::Failed(message))
            }
        }
    }

    /// Decode already loaded bytes, plus an optional supplementary document
    pub fn ingest_bytes(
        &self,
        source: &Source,
        bytes: &[u8],
        supplement: Option<&[u8]>,
    ) -> IngestReport {
        let ctx = self.context();
        let mut catalog = VideoCatalog::new();

        let mut stats = match manifest::ingest_document(source, bytes, &ctx, &mut catalog) {
            Ok(stats) => stats,
            Err(e) => {
                self.log_port.error(&e.to_string());
                return IngestReport::empty(source, IngestStatus::ParseFailure(e.to_string()));
            }
        };

        for reason in &stats.skipped {
            self.log_port.error(&format!("{}: {}", source.name, reason));
        }

        if let Some(supplement) = supplement {
            match unified::ingest(source, supplement, &ctx, &mut catalog) {
                Ok(extra) => {
                    self.log_port.debug(&format!(
                        "{}: supplement added {} and merged {} videos",
                        source.name, extra.appended, extra.merged
                    ));
                    stats.absorb(extra);
                }
                Err(e) => self
                    .log_port
                    .error(&format!("{}: supplement ignored: {}", source.name, e)),
            }
        }

        self.log_port.info(&format!(
            "{}: {} videos ({} decoded, {} merged)",
            source.name,
            catalog.len(),
            stats.decoded,
            stats.merged
        ));

        IngestReport {
            source: source.name.clone(),
            status: IngestStatus::Done,
            stats,
            catalog,
        }
    }

    async fn load_supplement(&self, source: &Source) -> Option<Vec<u8>> {
        match self.store_port.read_supplement().await {
            Ok(Some(bytes)) => Some(bytes),
            Ok(None) => {
                self.log_port.error(&format!(
                    "{}: supplementary asset document is missing",
                    source.name
                ));
                None
            }
            Err(e) => {
                self.log_port
                    .error(&format!("{}: supplement unreadable: {}", source.name, e));
                None
            }
        }
    }

    /// Ingest every enabled source concurrently and fold the results in source order
    pub async fn ingest_all(&self, sources: &[Source]) -> CombinedCatalog {
        let handles: Vec<_> = sources
            .iter()
            .filter(|source| source.enabled)
            .cloned()
            .map(|source| {
                let interactor = self.clone();
                let name = source.name.clone();
                let handle = tokio::spawn(async move { interactor.ingest(&source).await });
                (name, handle)
            })
            .collect();

        let mut combined = CombinedCatalog::default();
        for (name, handle) in handles {
            let report = match handle.await {
                Ok(report) => report,
                Err(e) => {
                    let message = format!("Ingest task failed: {}", e);
                    self.log_port.error(&format!("{}: {}", name, message));
                    IngestReport {
                        source: name,
                        status: IngestStatus::Failed(message),
                        stats: IngestStats::default(),
                        catalog: VideoCatalog::new(),
                    }
                }
            };

            combined.summaries.push(report.summary());
            combined.cross_source_merges += combined.catalog.absorb(report.catalog);
        }

        self.log_port.info(&format!(
            "Catalog holds {} videos from {} sources",
            combined.catalog.len(),
            combined.summaries.len()
        ));
        combined
    }

    async fn read_cached(&self, source: &Source) -> Result<Vec<u8>, DomainError> {
        self.store_port
            .read_manifest(&source.name)
            .await?
            .ok_or_else(|| DomainError::NotCached(source.name.clone()))
    }

    /// Canonical videos of a cached unified document, without duplicate resolution
    pub async fn unprocessed_videos(&self, source: &Source) -> Result<Vec<Video>, DomainError> {
        let bytes = self.read_cached(source).await?;
        unified::read_videos(source, &bytes, &self.context())
    }

    /// Raw asset records of a cached unified document
    pub async fn unprocessed_assets(&self, source: &Source) -> Result<Vec<VideoAsset>, DomainError> {
        let bytes = self.read_cached(source).await?;
        Ok(unified::decode(source, &bytes)?.assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{LookupTables, MemoryStoreAdapter, TracingLogAdapter};

    const TVOS12: &str = r#"{"assets": [
        {"id": "A", "accessibilityLabel": "Hawaii", "url-1080-H264": "http://a/1.mov"},
        {"id": "A", "accessibilityLabel": "Hawaii", "url-4K-HDR": "http://a/1-hdr.mov"},
        {"id": "B", "accessibilityLabel": "China", "url-1080-SDR": "http://b/1.mov"}
    ]}"#;

    fn interactor(store: MemoryStoreAdapter) -> IngestInteractor {
        let lookups = Arc::new(LookupTables::default());
        IngestInteractor::new(
            Arc::new(store),
            Arc::clone(&lookups) as Arc<dyn NamingPort>,
            lookups as Arc<dyn SourceInfoPort>,
            Arc::new(TracingLogAdapter::default()),
        )
    }

    fn tvos12() -> Source {
        Source::new("tvOS 12", "https://sylvan.apple.com/", SourceType::TvOS12)
    }

    #[tokio::test]
    async fn test_ingest_merges_duplicates() {
        let store = MemoryStoreAdapter::new().with_manifest("tvOS 12", TVOS12);
        let report = interactor(store).ingest(&tvos12()).await;

        assert_eq!(report.status, IngestStatus::Done);
        assert_eq!(report.catalog.len(), 2);
        assert_eq!(report.stats.merged, 1);

        let a = report.catalog.find_by_id("A").unwrap();
        assert_eq!(a.url(VideoFormat::V1080pH264), "http://a/1.mov");
        assert_eq!(a.url(VideoFormat::V4KHDR), "http://a/1-hdr.mov");
    }

    #[tokio::test]
    async fn test_main_document_skips_supplement() {
        let tvos13 = Source::new("tvOS 13", "https://sylvan.apple.com/", SourceType::TvOS12);
        let store = MemoryStoreAdapter::new()
            .with_manifest("tvOS 13", TVOS12)
            .with_supplement(r#"{"assets": [{"id": "S1", "accessibilityLabel": "Greenland"}]}"#);
        let interactor = interactor(store);

        assert_eq!(interactor.ingest(&tvos13).await.catalog.len(), 3);
        let report = interactor.ingest_main_document(&tvos13).await;
        assert_eq!(report.status, IngestStatus::Done);
        assert_eq!(report.catalog.len(), 2);
        assert!(report.catalog.find_by_id("S1").is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(IngestStatus::Done.to_string(), "done");
        assert_eq!(IngestStatus::NotCached.to_string(), "not cached");
        assert_eq!(
            IngestStatus::ParseFailure("tvOS 12: bad".to_string()).to_string(),
            "parse failure (tvOS 12: bad)"
        );
    }

    #[tokio::test]
    async fn test_not_cached_is_empty() {
        let interactor = interactor(MemoryStoreAdapter::new());
        let report = interactor.ingest(&tvos12()).await;

        assert_eq!(report.status, IngestStatus::NotCached);
        assert!(report.catalog.is_empty());
        assert!(interactor.get_videos(&tvos12()).await.is_empty());
    }

    #[tokio::test]
    async fn test_parse_failure_is_empty() {
        let store = MemoryStoreAdapter::new().with_manifest("tvOS 12", "not json");
        let report = interactor(store).ingest(&tvos12()).await;

        assert!(matches!(report.status, IngestStatus::ParseFailure(_)));
        assert!(report.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_unprocessed_keeps_duplicates() {
        let store = MemoryStoreAdapter::new().with_manifest("tvOS 12", TVOS12);
        let interactor = interactor(store);

        let videos = interactor.unprocessed_videos(&tvos12()).await.unwrap();
        assert_eq!(videos.len(), 3);

        let assets = interactor.unprocessed_assets(&tvos12()).await.unwrap();
        assert_eq!(assets.len(), 3);
        assert_eq!(assets[2].id, "B");

        let missing = Source::new("tvOS 11", "https://x/", SourceType::TvOS11);
        assert!(interactor
            .unprocessed_videos(&missing)
            .await
            .unwrap_err()
            .is_not_cached());
    }
}
