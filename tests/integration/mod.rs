//! Integration test suite for prodman
//!
//! End-to-end tests that run the `prodman` binary against product bundles laid
//! out in temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **validate**: The validate command, text and JSON output, failure reporting
//! - **schemas**: Schema listing and printing, configured schema directories

mod common;

mod schemas;
mod validate;
