//! Configuration loaded from `.egogram.toml`.
//!
//! Every field is optional in the file; a missing file yields the defaults.

use crate::scoring::ScoringThresholds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = ".egogram.toml";

/// Display locale for report labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    Ja,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format when the CLI flag is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EgogramConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub output: OutputConfig,

    /// Non-canonical thresholds, for scoring against older stored results.
    #[serde(default)]
    pub thresholds: Option<ScoringThresholds>,
}

impl EgogramConfig {
    /// Load from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: EgogramConfig = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Load `.egogram.toml` from the working directory, or defaults when it
    /// does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Effective thresholds: configured override or the canonical defaults.
    pub fn thresholds(&self) -> ScoringThresholds {
        self.thresholds.unwrap_or_default()
    }
}
