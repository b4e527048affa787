//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use keycraft_core::CharClass;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Word length bounds
    #[serde(default)]
    pub length: LengthConfig,

    /// Character selection
    #[serde(default)]
    pub charset: CharsetConfig,

    /// Output destination
    #[serde(default)]
    pub output: OutputConfig,
}

/// Length-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LengthConfig {
    /// Shortest word length
    pub min: Option<usize>,

    /// Longest word length
    pub max: Option<usize>,
}

/// Character selection configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CharsetConfig {
    /// Built-in classes to include
    #[serde(default)]
    pub classes: Vec<CharClass>,

    /// Extra characters appended after the classes
    pub custom: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    /// File name stem for generated wordlists
    pub base_name: String,

    /// File extension, including the leading dot
    pub extension: String,

    /// Directory new wordlists are created in
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_name: "wordlist".to_string(),
            extension: ".txt".to_string(),
            directory: ".".to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}
