//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::error::AerialError;
use crate::ports::{config_keys, ConfigPort};
use crate::utils::path::expand_home;

/// Environment variables and the keys they override
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("AERIAL_CACHE_ROOT", config_keys::CACHE_ROOT),
    ("AERIAL_LOOKUPS_PATH", config_keys::LOOKUPS_PATH),
    ("AERIAL_SUPPLEMENT_PATH", config_keys::SUPPLEMENT_PATH),
    ("AERIAL_LOG_LEVEL", config_keys::LOG_LEVEL),
    ("AERIAL_OUTPUT_FORMAT", config_keys::OUTPUT_FORMAT),
];

/// Build the configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<TomlConfigAdapter> {
    // Defaults come from TomlConfigAdapter::new()
    let mut config = TomlConfigAdapter::new();

    load_config_file(&mut config, cli.config.as_deref())?;
    apply_environment_overrides(&mut config, |name| std::env::var(name).ok());
    apply_cli_overrides(&mut config, cli);

    config.validate_config().map_err(|e| AerialError::ConfigError {
        path: config.config_file_path().unwrap_or_else(|| "<defaults>".to_string()),
        message: e.to_string(),
    })?;

    debug!(sources = config.sources().len(), "Configuration hierarchy initialized");
    Ok(config)
}

/// Load the explicit config file, or the default one when it exists
fn load_config_file(config: &mut TomlConfigAdapter, explicit: Option<&str>) -> Result<()> {
    let path: PathBuf = match explicit {
        Some(path) => expand_home(path),
        None => {
            let path = TomlConfigAdapter::default_config_path();
            if !path.exists() {
                debug!("No config file at {}", path.display());
                return Ok(());
            }
            path
        }
    };

    info!("Loading configuration from: {}", path.display());
    config
        .load_config(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Apply `AERIAL_*` variables returned by `lookup`
pub fn apply_environment_overrides<F>(config: &mut TomlConfigAdapter, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_overrides = 0;
    for (env_var, config_key) in ENV_MAPPINGS {
        if let Some(value) = lookup(env_var) {
            debug!("Environment override: {} = {}", env_var, value);
            config.set_config(config_key, &value);
            env_overrides += 1;
        }
    }
    env_overrides
}

/// Apply global and per-command CLI overrides
pub fn apply_cli_overrides(config: &mut TomlConfigAdapter, cli: &Cli) -> usize {
    let overrides = [
        (config_keys::CACHE_ROOT, cli.cache_root.as_deref()),
        (config_keys::LOG_LEVEL, cli.log_level.as_deref()),
        (config_keys::OUTPUT_FORMAT, cli.command.format()),
    ];

    let mut cli_overrides = 0;
    for (key, value) in overrides {
        if let Some(value) = value {
            debug!("CLI override: {} = {}", key, value);
            config.set_config(key, value);
            cli_overrides += 1;
        }
    }
    cli_overrides
}
