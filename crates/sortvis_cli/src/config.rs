//! Sortvis configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sortvis_recorder::PlaybackConfig;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the current directory
pub const CONFIG_FILE: &str = "sortvis.toml";

/// Top-level Sortvis configuration (sortvis.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SortvisConfig {
    #[serde(default)]
    pub playback: PlaybackSection,
}

/// Playback configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct PlaybackSection {
    /// Registry identifier of the algorithm to use
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Number of items to sort
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Playback speed in steps per second
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default)]
    pub visualize_comparisons: bool,
    /// Scramble seed; the wall clock is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_algorithm() -> String {
    "selection".to_string()
}

fn default_item_count() -> usize {
    32
}

fn default_speed() -> u32 {
    4
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            item_count: default_item_count(),
            speed: default_speed(),
            visualize_comparisons: false,
            seed: None,
        }
    }
}

impl PlaybackSection {
    /// Scheduler configuration described by this section
    pub fn to_playback_config(&self) -> PlaybackConfig {
        let config = PlaybackConfig::default()
            .with_item_count(self.item_count)
            .with_speed(self.speed)
            .with_comparisons(self.visualize_comparisons);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl SortvisConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `sortvis.toml` in the
    /// current directory is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("No configuration file found at {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                path.to_path_buf()
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
