//! Test utilities for prodman
//!
//! This module provides helpers shared by unit tests and the integration test
//! suite: one-time logging setup and a fixture that lays out a product bundle
//! in a temporary directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use prodman::test_utils::BundleFixture;
//! use prodman::validation::validate_file;
//!
//! let bundle = BundleFixture::new()?.with_complete_content()?;
//! validate_file(&bundle.manifest_path())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fixtures;

pub use fixtures::{BundleFixture, REPOSITORIES_HOSTED_THEN_GROUP};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=prodman=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
