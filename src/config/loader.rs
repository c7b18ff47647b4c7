use std::fs;
use std::path::{Path, PathBuf};

use super::core::{StylemapConfig, ThresholdsConfig};
use crate::core::{Error, Result};
use crate::registry::DimensionId;

pub const CONFIG_FILE_NAME: &str = ".stylemap.toml";

/// Pure function to parse and validate config from TOML string
///
/// Invalid thresholds fall back to defaults and unknown severity override
/// keys are dropped, both with a warning.
pub fn parse_and_validate_config(contents: &str) -> Result<StylemapConfig> {
    let mut config = toml::from_str::<StylemapConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Err(e) = config.thresholds.validate() {
        tracing::warn!("Invalid thresholds: {}. Using defaults.", e);
        config.thresholds = ThresholdsConfig::default();
    }

    config.severity.overrides.retain(|key, _| {
        let known = key.parse::<DimensionId>().is_ok();
        if !known {
            tracing::warn!("Ignoring severity override for unknown dimension '{}'", key);
        }
        known
    });

    Ok(config)
}

/// Load a configuration file the user pointed at explicitly.
pub fn load_config_from(path: &Path) -> Result<StylemapConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<StylemapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_near(start: PathBuf) -> StylemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            StylemapConfig::default()
        })
}

pub fn load_config() -> StylemapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_near(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            StylemapConfig::default()
        }
    }
}

/// Default configuration rendered as TOML, as written by `stylemap init`.
pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&StylemapConfig::default())
        .map_err(|e| Error::Configuration(format!("Failed to render default config: {e}")))
}
