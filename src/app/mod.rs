// Application layer - Use case interactors

pub mod container;
pub mod ingest_interactor;
pub mod sources_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use ingest_interactor::{CombinedCatalog, IngestInteractor, IngestReport, IngestStatus, IngestSummary};
pub use sources_interactor::{SourceStatus, SourcesInteractor};
