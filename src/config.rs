//! Configuration loading
//!
//! Reads `~/.config/lawgg-suggest/config.toml`. A missing file yields the
//! defaults; a file that exists but cannot be read or parsed is an error.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    ApiConfig, AutocompleteConfig, Config, DEFAULT_LOCAL_BASE_URL, DEFAULT_MAX_VISIBLE,
    DEFAULT_PRODUCTION_BASE_URL, DEFAULT_TIMEOUT_MS, FieldConfig, default_fields,
    is_loopback_host,
};

use crate::error::SuggestError;

const CONFIG_DIR: &str = "lawgg-suggest";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config, SuggestError> {
    match path {
        Some(explicit) => load_config_from_path(explicit),
        None => match config_path() {
            Some(default_path) if default_path.exists() => load_config_from_path(&default_path),
            _ => Ok(Config::default()),
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SuggestError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config_toml(&contents)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config_toml(content: &str) -> Result<Config, SuggestError> {
    let config: Config =
        toml::from_str(content).map_err(|e| SuggestError::Config(e.to_string()))?;

    if config.fields.is_empty() {
        return Err(SuggestError::Config(
            "at least one [[fields]] entry is required".to_string(),
        ));
    }
    if let Some(dup) = config
        .fields
        .iter()
        .enumerate()
        .find(|(i, f)| config.fields[..*i].iter().any(|other| other.id == f.id))
    {
        return Err(SuggestError::Config(format!(
            "duplicate field id '{}'",
            dup.1.id
        )));
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
