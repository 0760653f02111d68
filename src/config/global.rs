//! User-wide configuration for prodman.
//!
//! The configuration lives at `~/.prodman/config.toml` (or
//! `%LOCALAPPDATA%\prodman\config.toml` on Windows). It is optional: when the
//! file is absent every setting takes its default.
//!
//! ```toml
//! # Schema manifests are checked against when --schema is not given
//! schema = "product-manifest"
//!
//! # Read schema assets from this directory instead of the built-in set
//! schema_dir = "/etc/prodman/schemas"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Settings loaded from the prodman configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProdmanConfig {
    /// Default schema name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory of `<name>.yaml` schema assets replacing the embedded ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,
}

impl ProdmanConfig {
    /// Load the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the file
    /// exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_or_default(&path).await
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// An explicitly given path must exist.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(&path).await,
            None => Self::load().await,
        }
    }

    /// Load from `path`, or return defaults if it does not exist.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::load_from(path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the configuration file at `path`.
    ///
    /// Relative `schema_dir` values are resolved against the directory holding
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        if let (Some(dir), Some(parent)) = (&config.schema_dir, path.parent()) {
            if dir.is_relative() {
                config.schema_dir = Some(parent.join(dir));
            }
        }

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Platform-specific default path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or, on Windows, local data) directory
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("prodman")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(CONFIG_DIR_NAME)
        };

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Override settings with values given on the command line.
    #[must_use]
    pub fn with_overrides(mut self, schema: Option<String>, schema_dir: Option<PathBuf>) -> Self {
        if schema.is_some() {
            self.schema = schema;
        }
        if schema_dir.is_some() {
            self.schema_dir = schema_dir;
        }
        self
    }
}
