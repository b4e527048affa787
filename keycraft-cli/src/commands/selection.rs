//! Length and character selection shared by generate and estimate

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use keycraft_core::{CharClass, Config};
use std::path::PathBuf;

/// Word length and character set selection
#[derive(Debug, Args, Default)]
pub struct SelectionArgs {
    /// Minimum word length
    #[arg(short = 'm', long = "min", value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum word length
    #[arg(short = 'M', long = "max", value_name = "N")]
    pub max_length: Option<usize>,

    /// Include lowercase letters (a-z)
    #[arg(short, long)]
    pub lowercase: bool,

    /// Include uppercase letters (A-Z)
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include numbers (0-9)
    #[arg(short, long)]
    pub digits: bool,

    /// Include special characters (!@#$%^&*)
    #[arg(short, long)]
    pub special: bool,

    /// Include a character class by name (repeatable)
    #[arg(long = "class", value_name = "NAME")]
    pub classes: Vec<CharClass>,

    /// Custom characters appended after the selected classes
    #[arg(short, long, value_name = "CHARS")]
    pub custom: Option<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SelectionArgs {
    /// Load the configuration file, if one was given
    pub fn load_file(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Classes selected by flags, in any order
    pub fn flag_classes(&self) -> Vec<CharClass> {
        let flags = [
            (self.lowercase, CharClass::Lowercase),
            (self.uppercase, CharClass::Uppercase),
            (self.digits, CharClass::Digits),
            (self.special, CharClass::Special),
        ];

        flags
            .into_iter()
            .filter_map(|(on, class)| on.then_some(class))
            .chain(self.classes.iter().copied())
            .collect()
    }

    /// Merge flags over `file` into a validated core configuration
    ///
    /// Flag lengths and custom characters override the file; classes from
    /// both are combined.
    pub fn resolve(&self, file: &CliConfig) -> Result<Config> {
        let mut builder = Config::builder()
            .classes(file.charset.classes.iter().copied())
            .classes(self.flag_classes());

        if let Some(min) = self.min_length.or(file.length.min) {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length.or(file.length.max) {
            builder = builder.max_length(max);
        }
        if let Some(custom) = self.custom.as_ref().or(file.charset.custom.as_ref()) {
            builder = builder.custom(custom);
        }

        let config = builder.build().map_err(CliError::from)?;
        log::debug!(
            "Resolved lengths {} over {} characters: {}",
            config.range(),
            config.alphabet().len(),
            config.alphabet()
        );
        Ok(config)
    }
}
