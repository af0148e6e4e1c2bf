//! Configuration for the lumira tools.
//!
//! Loaded from `~/.config/lumira/config.toml` when present. Every section and
//! field has a default, so a partial (or missing) file is fine.

use crate::calculator::DEFAULT_MAX_INPUT_LEN;
use crate::converter::{Category, DEFAULT_DECIMALS};
use crate::error::{LumiraError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumiraConfig {
    pub calculator: CalculatorConfig,
    pub converter: ConverterConfig,
}

/// Calculator widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum characters accepted while typing a number.
    pub max_input_len: usize,
    /// Prefix printed before each display line in the terminal.
    pub display_prefix: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            display_prefix: String::new(),
        }
    }
}

/// Unit converter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Decimals shown for a conversion result before trailing zeros are
    /// stripped.
    pub decimals: usize,
    /// Category selected when the converter opens.
    pub default_category: Category,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            default_category: Category::Length,
        }
    }
}

impl LumiraConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LumiraError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LumiraError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/lumira/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lumira").join("config.toml"))
    }

    /// Load from `path` if given, else from the default location if a file
    /// exists there, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            info!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
