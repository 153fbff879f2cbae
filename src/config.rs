//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.request-stats.toml` files.

use crate::models::{SampleField, SparseGroups};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".request-stats.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Which result files and duration lists are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Duration lists that feed the report.
    #[serde(default = "SampleField::defaults")]
    pub fields: Vec<SampleField>,

    /// Extension of result files when a directory is given.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into sub-directories.
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            fields: SampleField::defaults(),
            extension: default_extension(),
            recursive: true,
        }
    }
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_true() -> bool {
    true
}

/// Report generation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Policy for worker counts with fewer than two samples.
    #[serde(default)]
    pub sparse_groups: SparseGroups,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.request-stats.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// Only values given explicitly on the command line override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref fields) = args.fields {
            self.input.fields = fields.clone();
        }

        if let Some(policy) = args.sparse_groups {
            self.report.sparse_groups = policy;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to render default config")
    }
}
