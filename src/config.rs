//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::catalog::{Catalog, ColorCatalog};
use crate::constants::APP_NAME;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "BEADGRID_CONFIG_DIR";

/// Color catalog preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog used for display keys when a command does not name one
    #[serde(default = "default_catalog")]
    pub default: Catalog,
    /// Hex-to-code table file replacing the built-in sample table.
    /// Relative paths are resolved against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<PathBuf>,
}

const fn default_catalog() -> Catalog {
    Catalog::Mard
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default: default_catalog(),
            table: None,
        }
    }
}

/// Output formatting preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON written by the CLI
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

const fn default_pretty_json() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
        }
    }
}

/// Application configuration.
///
/// Missing sections and keys fall back to their defaults, so an empty file
/// is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog preferences
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `BEADGRID_CONFIG_DIR` wins when set. Otherwise:
    /// - Linux: `~/.config/BeadGrid/`
    /// - macOS: `~/Library/Application Support/BeadGrid/`
    /// - Windows: `%APPDATA%\BeadGrid\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Resolved path of the configured catalog table, if any.
    pub fn catalog_table_path(&self) -> Result<Option<PathBuf>> {
        let Some(table) = &self.catalog.table else {
            return Ok(None);
        };
        if table.is_absolute() {
            return Ok(Some(table.clone()));
        }
        Ok(Some(Self::config_dir()?.join(table)))
    }

    /// Loads the configured catalog table, or the built-in sample table when
    /// none is configured.
    pub fn load_catalog_table(&self) -> Result<ColorCatalog> {
        match self.catalog_table_path()? {
            Some(path) => ColorCatalog::from_file(&path),
            None => ColorCatalog::load(),
        }
    }

    /// Validates configuration values.
    ///
    /// Checks that the catalog table loads and that the default catalog has
    /// at least one color in it.
    pub fn validate(&self) -> Result<()> {
        let table = self.load_catalog_table()?;
        if !table.is_empty()
            && !table
                .entries()
                .iter()
                .any(|entry| entry.code(self.catalog.default).is_some())
        {
            anyhow::bail!(
                "Catalog {} has no colors in catalog table {}",
                self.catalog.default,
                table.version()
            );
        }

        Ok(())
    }
}
