// Adapters - External system implementations

pub mod fs_cache;
pub mod lookup_tables;
pub mod memory_store;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use fs_cache::FsCacheAdapter;
pub use lookup_tables::LookupTables;
pub use memory_store::MemoryStoreAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
