//! Cache path resolution

use std::path::{Path, PathBuf};

/// File holding a source's cached manifest inside its cache directory
pub const MANIFEST_FILE_NAME: &str = "entries.json";

/// Default name of the supplementary asset document inside the cache root
pub const SUPPLEMENT_FILE_NAME: &str = "missingvideos.json";

/// Default cache root for the platform
pub fn default_cache_root() -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);

    if cfg!(target_os = "macos") {
        if let Some(home) = home {
            return home.join("Library").join("Application Support").join("Aerial");
        }
    }

    if let Some(cache) = std::env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(cache).join("aerial");
    }

    match home {
        Some(home) => home.join(".cache").join("aerial"),
        None => PathBuf::from("aerial_cache"),
    }
}

/// Directory holding everything cached for a source
pub fn source_dir(cache_root: &Path, source_name: &str) -> PathBuf {
    cache_root.join(source_name)
}

/// Cached manifest of a source
pub fn manifest_path(cache_root: &Path, source_name: &str) -> PathBuf {
    source_dir(cache_root, source_name).join(MANIFEST_FILE_NAME)
}

/// Expand a leading `~/` against the home directory
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}
