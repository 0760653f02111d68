//! Core types for prodman
//!
//! This module holds the error taxonomy shared by every layer of the crate.
//! Library entry points return [`ProdmanError`] so callers can match on the
//! failure kind; the CLI converts errors into an [`ErrorContext`] with
//! suggestions through [`user_friendly_error`].
//!
//! # Example
//!
//! ```rust,no_run
//! use prodman::core::{ProdmanError, user_friendly_error};
//!
//! fn check() -> Result<(), ProdmanError> {
//!     Err(ProdmanError::PathNotFound {
//!         path: "images/base.tar".to_string(),
//!     })
//! }
//!
//! if let Err(e) = check() {
//!     user_friendly_error(e.into()).display();
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, ProdmanError, user_friendly_error};

/// Result alias used by the validation engine.
pub type Result<T, E = ProdmanError> = std::result::Result<T, E>;
