//! Showcase configuration.
//!
//! Loaded from a TOML file with the following structure (every key is
//! optional):
//!
//! ```toml
//! project_name = "FirstCMake"
//! feature_marker = "C++"
//! wait_for_exit = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::features::DEFAULT_FEATURE_MARKER;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FIRSTCMAKE_CONFIG";

/// Settings for one console session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Name shown in the welcome banner
    pub project_name: String,
    /// Substring used to filter the feature list
    pub feature_marker: String,
    /// Wait for one more line of input before finishing
    pub wait_for_exit: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            project_name: "FirstCMake".to_string(),
            feature_marker: DEFAULT_FEATURE_MARKER.to_string(),
            wait_for_exit: true,
        }
    }
}

impl ShowcaseConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `~/.firstcmake/config.toml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".firstcmake").join("config.toml"))
    }

    /// Load configuration from standard locations
    ///
    /// Checks `$FIRSTCMAKE_CONFIG` first, then `~/.firstcmake/config.toml`.
    /// Returns defaults when neither exists.
    pub fn load_standard() -> crate::Result<Self> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(Self::load(Path::new(&explicit))?);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Ok(Self::load(&path)?),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "project_name must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}
