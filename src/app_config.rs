use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::timecode::DecimalTimecode;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Minimum length of a merged block, as an SRT timecode
    #[serde(default = "default_block_length")]
    pub block_length: String,

    /// Output directory; defaults to `merged/` next to each input file
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Suffix inserted before `.srt` in output filenames
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log facade filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_block_length() -> String {
    "00:00:30,000".to_string()
}

fn default_output_suffix() -> String {
    "merged".to_string()
}

/// Name of the output directory created next to the input when none is configured
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "merged";

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.block_length()?;

        if self.output_suffix.trim().is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if let Some(dir) = &self.output_dir {
            if dir.trim().is_empty() {
                return Err(anyhow!("Output directory must not be empty when set"));
            }
        }

        Ok(())
    }

    /// Parsed block length
    pub fn block_length(&self) -> Result<DecimalTimecode> {
        DecimalTimecode::from_string(&self.block_length)
            .with_context(|| format!("Invalid block length: '{}'", self.block_length))
    }

    /// Load a JSON config file, or write and return the defaults if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let file = File::open(config_path)
                .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

            Ok(config)
        } else {
            warn!(
                "Config file not found at '{}', creating default config.",
                config_path.display()
            );

            let config = Config::default();
            let config_json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize default config to JSON")?;

            std::fs::write(config_path, config_json).with_context(|| {
                format!(
                    "Failed to write default config to file: {}",
                    config_path.display()
                )
            })?;

            Ok(config)
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            block_length: default_block_length(),
            output_dir: None,
            output_suffix: default_output_suffix(),
            log_level: LogLevel::default(),
        }
    }
}
