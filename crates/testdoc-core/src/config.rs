//! Configuration management for testdoc

use crate::error::{Result, TestDocError};
use crate::export::RenderOptions;
use crate::types::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TestDocError::Toml(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| TestDocError::Toml(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.export.format()?;
        Ok(())
    }
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is requested
    pub default_format: String,
    /// Default for the include-history flag
    pub include_history: bool,
    /// Default for the include-comments flag
    pub include_comments: bool,
    /// Directory for exported files when writing to disk
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Parsed default format
    pub fn format(&self) -> Result<ExportFormat> {
        self.default_format.parse().map_err(|_| {
            TestDocError::Config(format!("unknown default_format '{}'", self.default_format))
        })
    }

    /// Default render options
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_history: self.include_history,
            include_comments: self.include_comments,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Markdown.to_string(),
            include_history: false,
            include_comments: false,
            output_dir: None,
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root of the entity store; platform data dir when unset
    pub data_dir: Option<PathBuf>,
}
