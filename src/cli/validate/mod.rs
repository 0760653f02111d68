//! Validate a product manifest.
//!
//! The `validate` command runs the full validation engine on one manifest: the
//! structural schema check followed by the content checks over the bundle on
//! disk. Relative paths in the manifest resolve against the current working
//! directory, so the command is normally run from the bundle root.
//!
//! # Examples
//!
//! ```bash
//! prodman validate manifest.yaml
//! prodman validate manifest.yaml --schema product-manifest --format json
//! prodman validate manifest.yaml --timeout 60
//! ```
//!
//! # Output Formats
//!
//! ## Text Format (Default)
//! ```text
//! ✓ manifest.yaml is valid (schema: product-manifest)
//! ```
//!
//! ## JSON Format
//! ```json
//! {
//!   "valid": false,
//!   "file": "manifest.yaml",
//!   "schema": "product-manifest",
//!   "failed_category": "rpms",
//!   "categories": [],
//!   "hosted_repositories": [],
//!   "errors": ["rpms validation failed: directory is empty or unreadable: rpms/base"]
//! }
//! ```

mod command;
mod executor;
mod results;

pub use command::{OutputFormat, ValidateCommand};
pub use results::ValidationResults;
