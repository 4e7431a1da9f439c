//! Application Configuration
//!
//! User settings stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::AnalysisOptions;
use crate::error::ScanError;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Recognition and analysis settings
    pub recognition: RecognitionConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Recognition settings passed on to the analysis layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Requested recognition languages, primary first (e.g. "en-US")
    pub languages: Vec<String>,
    /// Detect tables from row clusters
    pub enable_table_detection: bool,
    /// Detect list lines
    pub enable_list_detection: bool,
    /// Detect emails, phone numbers and URLs
    pub enable_data_detection: bool,
    /// Check that page images decode before analysis
    pub verify_images: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en-US".to_string()],
            enable_table_detection: true,
            enable_list_detection: true,
            enable_data_detection: true,
            verify_images: true,
        }
    }
}

impl RecognitionConfig {
    /// Reject settings the analysis layer cannot use
    pub fn validate(&self) -> std::result::Result<(), ScanError> {
        if let Some(bad) = self.languages.iter().find(|l| l.trim().is_empty()) {
            return Err(ScanError::Config(format!(
                "empty language tag in languages list: {:?}",
                bad
            )));
        }
        Ok(())
    }
}

impl From<&RecognitionConfig> for AnalysisOptions {
    fn from(config: &RecognitionConfig) -> Self {
        Self {
            detect_tables: config.enable_table_detection,
            detect_lists: config.enable_list_detection,
            detect_data: config.enable_data_detection,
            languages: config.languages.clone(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON response
    pub pretty: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    config.recognition.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
