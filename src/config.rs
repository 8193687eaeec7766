//! Global configuration management
//!
//! Config is stored at `~/.taxperson/config.toml` unless a path is given
//! explicitly. A missing file means defaults.
//!
//! ```toml
//! [validation]
//! policy = "normalize"   # or "strict"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::ValidationPolicy;
use crate::paths;

/// Errors that can occur when loading or saving config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("io error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Global taxperson configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tax code validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Tax code validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// When to uppercase the raw code relative to matching it
    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default path, falling back to defaults
    ///
    /// A malformed file is logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(&path).unwrap_or_else(|err| {
            warn!("ignoring config: {err}");
            Self::default()
        })
    }

    /// Load config from `path`
    ///
    /// Returns defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Override the validation policy
    #[must_use]
    pub const fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validation.policy = policy;
        self
    }

    /// Effective validation policy
    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.validation.policy
    }
}
