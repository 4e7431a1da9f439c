//! Storage Layer
//!
//! Locates the configuration directory and loads the user configuration.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{self, AppConfig};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file present, built-in defaults
    Defaults,
    /// The user configuration could not be read, built-in defaults
    Fallback(String),
}

impl ConfigSource {
    /// Report the outcome once logging is up
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded configuration from {:?}", path),
            ConfigSource::Defaults => info!("Using default configuration"),
            ConfigSource::Fallback(reason) => warn!("Ignoring user configuration: {}", reason),
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "scanmetadata", "ScanMetadata")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Get the configuration directory, creating it if needed
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = project_dirs()?.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Path of the default configuration file, creating its directory
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Path of the default configuration file, without touching the filesystem
pub fn user_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or defaults when the file does not exist.
///
/// A file that exists but fails to load is an error.
pub fn load_or_default(path: &Path) -> Result<(AppConfig, ConfigSource)> {
    if path.exists() {
        let config = config::load_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }
    Ok((AppConfig::default(), ConfigSource::Defaults))
}

/// Load configuration from the platform config directory.
///
/// Never fails: a missing directory or a broken file falls back to defaults.
pub fn load_user_config() -> (AppConfig, ConfigSource) {
    load_user_config_from(user_config_path())
}

fn load_user_config_from(path: Result<PathBuf>) -> (AppConfig, ConfigSource) {
    match path.and_then(|path| load_or_default(&path)) {
        Ok(loaded) => loaded,
        Err(e) => (AppConfig::default(), ConfigSource::Fallback(format!("{:#}", e))),
    }
}
