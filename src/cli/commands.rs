//! Command implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::adapters::{MemoryStoreAdapter, TomlConfigAdapter};
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::IngestStatus;
use crate::cli::args::{DecodeArgs, IngestArgs, SourcesArgs};
use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::error::{AerialError, AerialResult};
use crate::output::OutputWriter;
use crate::ports::ConfigPort;

/// Configured sources restricted to `names`, all of them when `names` is empty.
///
/// Explicitly named sources are ingested even when disabled.
pub fn select_sources(all: Vec<Source>, names: &[String]) -> AerialResult<Vec<Source>> {
    if names.is_empty() {
        return Ok(all);
    }

    names
        .iter()
        .map(|name| {
            all.iter()
                .find(|source| &source.name == name)
                .cloned()
                .map(|mut source| {
                    source.enabled = true;
                    source
                })
                .ok_or_else(|| AerialError::UnknownSource { name: name.clone() })
        })
        .collect()
}

/// Execute the ingest command
pub async fn ingest(
    args: IngestArgs,
    config: &TomlConfigAdapter,
    container: &dyn AppContainer,
    writer: OutputWriter,
) -> Result<String> {
    let sources = select_sources(config.sources(), &args.sources)?;
    info!("Ingesting {} sources", sources.len());

    let interactor = container.ingest_interactor();

    if args.unprocessed {
        let mut videos = Vec::new();
        let mut assets = Vec::new();
        for source in &sources {
            let result = if args.raw {
                interactor
                    .unprocessed_assets(source)
                    .await
                    .map(|mut found| assets.append(&mut found))
            } else {
                interactor
                    .unprocessed_videos(source)
                    .await
                    .map(|mut found| videos.append(&mut found))
            };

            match result {
                Ok(()) => {}
                Err(DomainError::NotCached(name)) => warn!("{} is not cached", name),
                Err(e) => error!("{}: {}", source.name, e),
            }
        }

        let rendered = if args.raw {
            writer.render_assets(&assets)?
        } else {
            writer.render_videos(&videos)?
        };
        return Ok(rendered);
    }

    let combined = interactor.ingest_all(&sources).await;
    if combined.cross_source_merges > 0 {
        info!(
            "{} videos were listed by more than one source",
            combined.cross_source_merges
        );
    }

    Ok(writer.render_ingest(&combined.summaries, combined.catalog.videos())?)
}

/// Execute the sources command
pub async fn sources(
    args: SourcesArgs,
    config: &TomlConfigAdapter,
    container: &dyn AppContainer,
    writer: OutputWriter,
) -> Result<String> {
    let sources = config.sources();
    if sources.is_empty() {
        warn!("No sources configured");
    }

    let interactor = container.sources_interactor();
    let to_wipe = if args.wipe.is_empty() {
        Vec::new()
    } else {
        select_sources(sources.clone(), &args.wipe)?
    };
    for source in to_wipe {
        interactor
            .wipe(&source)
            .await
            .with_context(|| format!("Failed to wipe {}", source.name))?;
    }

    let statuses = interactor.list(&sources).await;
    Ok(writer.render_sources(&statuses)?)
}

/// Execute the decode command
pub async fn decode(
    args: DecodeArgs,
    config: &TomlConfigAdapter,
    writer: OutputWriter,
) -> Result<String> {
    let schema = ManifestSchema::parse(&args.schema)?;
    let bytes = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("Failed to read manifest {}", args.input))?;

    info!("Decoding {} as {}", args.input, schema);

    let source = Source::new(args.name.as_str(), args.base_url.as_str(), SourceType::Local)
        .with_schema(schema);
    let mut store = MemoryStoreAdapter::new().with_manifest(&source.name, bytes);
    if let Some(path) = &args.supplement {
        if !source.needs_supplement() {
            warn!("{} takes no supplement, ignoring {}", source.name, path);
        }
        let supplement = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read supplement {}", path))?;
        store = store.with_supplement(supplement);
    }

    let container = DefaultAppContainer::with_ports(
        Arc::new(store),
        DefaultAppContainer::lookups(config)?,
        DefaultAppContainer::log_port(config)?,
    );

    let interactor = container.ingest_interactor();
    let report = if args.supplement.is_some() {
        interactor.ingest(&source).await
    } else {
        interactor.ingest_main_document(&source).await
    };
    if let IngestStatus::ParseFailure(message) = &report.status {
        return Err(anyhow::anyhow!("{}", message));
    }

    Ok(writer.render_ingest(&[report.summary()], report.catalog.videos())?)
}
