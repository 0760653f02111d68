//! Global constants used throughout the prodman codebase.
//!
//! This module contains the delimiter, skip-list and default names that are
//! shared between the validation engine, the configuration layer and the CLI.

/// Line that separates documents in a multi-document YAML file.
pub const DOCUMENT_DELIMITER: &str = "---";

/// Repository formats the hosted/group consistency check ignores.
///
/// Matching is exact and case-sensitive: `"Docker"` is not skipped.
pub const SKIPPED_REPOSITORY_FORMATS: [&str; 2] = ["docker", "helm"];

/// Name of the schema used when neither the CLI nor the config file names one.
pub const DEFAULT_SCHEMA: &str = "product-manifest";

/// File extension of schema assets.
pub const SCHEMA_ASSET_EXTENSION: &str = "yaml";

/// Directory under the home directory holding the prodman configuration.
pub const CONFIG_DIR_NAME: &str = ".prodman";

/// File name of the prodman configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
