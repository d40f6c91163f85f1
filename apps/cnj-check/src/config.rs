//! Configuration for cnj-check
//!
//! Loaded from TOML:
//!
//! ```toml
//! [rules]
//! min_year = 1900
//! max_year = 2100
//! require_known_segment = true
//!
//! [batch]
//! column = "numero_processo"
//! ```

use std::path::{Path, PathBuf};

use cnj_identifiers::{ValidationRules, DEFAULT_COLUMN};
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Plausibility rules applied on top of the checksum
    pub rules: ValidationRules,
    /// CSV batch settings
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Column holding the process numbers
    pub column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            column: DEFAULT_COLUMN.to_string(),
        }
    }
}

impl CheckConfig {
    /// `<config dir>/cnj-check/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cnj-check").join("config.toml"))
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Load an explicit file, else the default file if present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
