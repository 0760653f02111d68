//! Command-line interface for prodman.
//!
//! This module defines the command-line interface using the `clap` derive API.
//! Each subcommand lives in its own module and exposes an `execute_with_config`
//! entry point taking the loaded [`ProdmanConfig`].
//!
//! # Commands
//!
//! - `validate` - Validate a product manifest and the bundle it describes
//! - `schemas` - List the available schemas or print one
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging and detailed output
//! - `--quiet` / `-q` - Only errors
//! - `--config` / `-c` - Path to an alternative configuration file
//!
//! # Example
//!
//! ```bash
//! # Validate a bundle from its root directory
//! cd /srv/bundles/edge-bundle
//! prodman validate manifest.yaml
//!
//! # Machine-readable result with a deadline
//! prodman validate manifest.yaml --format json --timeout 30
//!
//! # Inspect the built-in schema
//! prodman schemas --show product-manifest
//! ```

pub mod schemas;
pub mod validate;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::ProdmanConfig;

/// Runtime configuration derived from the global flags.
///
/// Commands receive this instead of reading the process environment, so tests
/// can drive them directly.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` defers to `RUST_LOG`, then to `warn`.
    pub log_level: Option<String>,

    /// Alternative configuration file path.
    pub config_path: Option<PathBuf>,

    /// Show detailed output.
    pub verbose: bool,

    /// Suppress everything except errors.
    pub quiet: bool,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the prodman configuration named by these flags.
    pub async fn load_settings(&self) -> Result<ProdmanConfig> {
        ProdmanConfig::load_with_optional(self.config_path.clone()).await
    }
}

/// prodman validates product manifests before they are handed to the
/// installation pipeline.
#[derive(Parser)]
#[command(
    name = "prodman",
    about = "Product manifest validator",
    version,
    author,
    long_about = "prodman checks a product manifest against its schema and verifies that the \
                  bundle it describes (S3 objects, Nexus definitions, VCS checkout, RPMs) is \
                  present and consistent."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (default: ~/.prodman/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a product manifest and the bundle it references
    Validate(validate::ValidateCommand),

    /// List available schemas or print one
    Schemas(schemas::SchemasCommand),
}

impl Cli {
    /// Execute the parsed command with configuration derived from its flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build the runtime configuration from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }

    /// Execute the parsed command with an explicit runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// command fails.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let settings = config.load_settings().await?;

        match self.command {
            Commands::Validate(cmd) => cmd.execute_with_config(settings, &config).await,
            Commands::Schemas(cmd) => cmd.execute_with_config(settings, &config),
        }
    }
}
