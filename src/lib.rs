//! prodman - Product Manifest Validator
//!
//! Validates a product manifest before it is handed to the installation
//! pipeline. A manifest describes a bundle of artifacts (S3 objects, Nexus
//! repository and blob store definitions, a VCS checkout, RPM directories) that
//! must be present on the local filesystem.
//!
//! # Architecture Overview
//!
//! Validation is a two-phase check:
//! - **Structural**: the decoded manifest must conform to a JSON-Schema asset
//! - **Content**: each content category is checked against the filesystem, and
//!   the Nexus repositories file must declare hosted and group repositories
//!   consistently
//!
//! The first failure is returned as a [`core::ProdmanError`]; content failures
//! name the category whose check failed.
//!
//! # Core Modules
//!
//! - [`validation`] - Entry points, the content stage pipeline and repository
//!   reconciliation
//! - [`schema`] - Schema assets and the structural check
//! - [`manifest`] - Typed manifest and repository record models
//! - [`documents`] - Multi-document YAML splitting
//! - [`utils`] - Filesystem predicates and slice helpers
//! - [`core`] - Error types and user-facing error reporting
//! - [`config`] - User configuration (`~/.prodman/config.toml`)
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use prodman::validation::validate_file;
//! use std::path::Path;
//!
//! // Relative paths in the manifest resolve against the working directory
//! validate_file(Path::new("manifest.yaml"))?;
//! # Ok::<(), prodman::core::ProdmanError>(())
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! prodman validate manifest.yaml
//! prodman validate manifest.yaml --format json --timeout 30
//! prodman schemas
//! ```

// Validation engine
pub mod documents;
pub mod manifest;
pub mod schema;
pub mod validation;

// Supporting modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
