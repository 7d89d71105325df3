use std::sync::Arc;

use crate::adapters::{FsCacheAdapter, LookupTables, TracingLogAdapter};
use crate::app::{ingest_interactor::IngestInteractor, sources_interactor::SourcesInteractor};
use crate::domain::errors::DomainError;
use crate::ports::{config_keys, ConfigPort, LogLevel, LogPort, ManifestStorePort, NamingPort, SourceInfoPort};
use crate::utils::path::{expand_home, SUPPLEMENT_FILE_NAME};

pub trait AppContainer: Send + Sync {
    fn ingest_interactor(&self) -> Arc<IngestInteractor>;
    fn sources_interactor(&self) -> Arc<SourcesInteractor>;
}

pub struct DefaultAppContainer {
    ingest_interactor: Arc<IngestInteractor>,
    sources_interactor: Arc<SourcesInteractor>,
}

impl DefaultAppContainer {
    /// Wire the filesystem cache and lookup tables named by the configuration
    pub fn new(config: &dyn ConfigPort) -> Result<Self, DomainError> {
        let cache_root = expand_home(&config.get_config_or_default(config_keys::CACHE_ROOT, ""));

        let supplement_path = match config.get_config(config_keys::SUPPLEMENT_PATH) {
            Some(path) if !path.is_empty() => expand_home(&path),
            _ => cache_root.join(SUPPLEMENT_FILE_NAME),
        };

        let store_port = Arc::new(FsCacheAdapter::new(cache_root, supplement_path));
        Ok(Self::with_ports(
            store_port,
            Self::lookups(config)?,
            Self::log_port(config)?,
        ))
    }

    /// Lookup tables named by `lookups_path`, empty when unset
    pub fn lookups(config: &dyn ConfigPort) -> Result<Arc<LookupTables>, DomainError> {
        let lookups = match config.get_config(config_keys::LOOKUPS_PATH) {
            Some(path) if !path.is_empty() => LookupTables::load(&expand_home(&path))?,
            _ => LookupTables::default(),
        };
        Ok(Arc::new(lookups))
    }

    /// Wire an arbitrary store, used for standalone documents
    pub fn with_ports(
        store_port: Arc<dyn ManifestStorePort>,
        lookups: Arc<LookupTables>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        let ingest_interactor = Arc::new(IngestInteractor::new(
            Arc::clone(&store_port),
            Arc::clone(&lookups) as Arc<dyn NamingPort>,
            lookups as Arc<dyn SourceInfoPort>,
            Arc::clone(&log_port),
        ));

        let sources_interactor = Arc::new(SourcesInteractor::new(store_port, log_port));

        Self {
            ingest_interactor,
            sources_interactor,
        }
    }

    /// Log adapter at the configured level
    pub fn log_port(config: &dyn ConfigPort) -> Result<Arc<dyn LogPort>, DomainError> {
        let level = LogLevel::parse(&config.get_config_or_default(config_keys::LOG_LEVEL, "info"))?;
        Ok(Arc::new(TracingLogAdapter::new(level)))
    }
}

impl AppContainer for DefaultAppContainer {
    fn ingest_interactor(&self) -> Arc<IngestInteractor> {
        Arc::clone(&self.ingest_interactor)
    }

    fn sources_interactor(&self) -> Arc<SourcesInteractor> {
        Arc::clone(&self.sources_interactor)
    }
}
