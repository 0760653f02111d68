//! Configuration management for prodman
//!
//! prodman reads one optional, user-wide TOML file (`~/.prodman/config.toml`)
//! that selects the schema manifests are validated against and, optionally, a
//! directory to load schema assets from. Command-line flags override both.
//!
//! # Precedence
//!
//! 1. `--schema` on the command line
//! 2. `schema` / `schema_dir` in the configuration file
//! 3. The built-in `product-manifest` schema

mod global;

pub use global::ProdmanConfig;
