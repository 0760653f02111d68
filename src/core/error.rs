//! Error handling for prodman
//!
//! This module provides the error taxonomy of the validation engine and the
//! user-friendly error reporting used by the CLI. The error system follows two
//! principles:
//! 1. **Strongly-typed errors** so callers (CLI, HTTP front-ends) can match on
//!    the failure kind
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Structural**: [`ProdmanError::StructuralValidation`],
//!   [`ProdmanError::SchemaAsset`], [`ProdmanError::SchemaCompile`]
//! - **Content**: [`ProdmanError::PathNotFound`], [`ProdmanError::EmptyDirectory`],
//!   [`ProdmanError::RepoConsistency`], wrapped by [`ProdmanError::ContentStage`]
//! - **Decoding and I/O**: [`ProdmanError::Decode`], [`ProdmanError::FileRead`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use prodman::core::{ProdmanError, user_friendly_error};
//!
//! let error = ProdmanError::PathNotFound {
//!     path: "bundle/s3/objects.tar".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error, details and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::validation::ContentCategory;

/// The main error type for prodman operations.
///
/// Every failure the validation engine can report is a variant of this enum.
/// The content pipeline wraps stage failures in [`ProdmanError::ContentStage`],
/// so the outermost error always names the content category that failed while
/// [`std::error::Error::source`] exposes the underlying cause.
#[derive(Error, Debug)]
pub enum ProdmanError {
    /// The manifest does not conform to the structural schema.
    #[error("manifest does not conform to schema '{schema}': {reason}")]
    StructuralValidation {
        /// Name of the schema the manifest was checked against
        schema: String,
        /// The first conformance violation reported by the schema engine
        reason: String,
    },

    /// A schema asset is missing or is not valid YAML.
    ///
    /// The shipped asset set is fixed, so in production this indicates a
    /// misconfigured `schema_dir` or an unknown `--schema` name.
    #[error("schema asset '{name}' could not be loaded: {reason}")]
    SchemaAsset {
        /// Name of the requested schema asset
        name: String,
        /// Why loading failed
        reason: String,
    },

    /// A schema asset loaded but is not a valid JSON-Schema.
    #[error("schema '{name}' is not a valid JSON-Schema: {reason}")]
    SchemaCompile {
        /// Name of the schema asset
        name: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// A path referenced by the manifest does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound {
        /// The offending path, as written in the manifest
        path: String,
    },

    /// A directory referenced by the manifest is empty or cannot be listed.
    #[error("directory is empty or unreadable: {path}")]
    EmptyDirectory {
        /// The offending directory, as written in the manifest
        path: String,
    },

    /// Hosted and group repository declarations do not reconcile.
    #[error("repository consistency check failed: {reason}")]
    RepoConsistency {
        /// Description of the resolution failure
        reason: String,
    },

    /// A document could not be decoded into the expected shape.
    #[error("failed to decode {what}: {reason}")]
    Decode {
        /// What was being decoded (e.g. "manifest", "repository record #2")
        what: String,
        /// Decoder diagnostic
        reason: String,
    },

    /// A slice index was outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Length of the slice
        len: usize,
    },

    /// A manifest or a file it references could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A content stage failed; wraps the stage's error with its category.
    #[error("{category} validation failed: {source}")]
    ContentStage {
        /// The content category whose stage failed
        category: ContentCategory,
        /// The stage's error
        #[source]
        source: Box<ProdmanError>,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl ProdmanError {
    /// Wrap `self` as the failure of the given content category.
    pub(crate) fn in_stage(self, category: ContentCategory) -> Self {
        Self::ContentStage {
            category,
            source: Box::new(self),
        }
    }

    /// Return the innermost error, looking through [`ProdmanError::ContentStage`].
    #[must_use]
    pub fn root(&self) -> &ProdmanError {
        match self {
            Self::ContentStage {
                source,
                ..
            } => source.root(),
            other => other,
        }
    }
}

/// Error context wrapper that provides user-friendly error information.
///
/// `ErrorContext` wraps a [`ProdmanError`] and adds an optional suggestion for
/// resolution and additional details. When displayed, the error is shown in red,
/// details in yellow and the suggestion in green.
///
/// # Examples
///
/// ```rust,no_run
/// use prodman::core::{ErrorContext, ProdmanError};
///
/// let context = ErrorContext::new(ProdmanError::EmptyDirectory {
///     path: "vcs/checkout".to_string(),
/// })
/// .with_suggestion("Populate the checkout before validating")
/// .with_details("VCS sources must be present locally");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ProdmanError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ProdmanError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions.
///
/// [`ProdmanError`] values get tailored suggestions. Anything else is rendered
/// with its full `anyhow` context chain so no cause is lost.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // A bare ProdmanError already carries its cause in the message
    let error = match error.downcast::<ProdmanError>() {
        Ok(prodman_error) => return create_error_context(prodman_error),
        Err(other) => other,
    };

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ProdmanError::Other {
        message,
    })
}

fn create_error_context(error: ProdmanError) -> ErrorContext {
    let (details, suggestion) = match error.root() {
        ProdmanError::StructuralValidation { .. } => (
            "The manifest was rejected before any content checks ran",
            "Compare the manifest against the schema printed by 'prodman schemas --show <name>'",
        ),
        ProdmanError::SchemaAsset { .. } => (
            "Schema assets are read from the binary or from the configured schema_dir",
            "Run 'prodman schemas' to list available schema names",
        ),
        ProdmanError::SchemaCompile { .. } => (
            "The schema asset is not a valid draft-7 JSON-Schema",
            "Check the schema files under the configured schema_dir",
        ),
        ProdmanError::PathNotFound { .. } => (
            "Relative paths are resolved against the current working directory",
            "Run the validator from the bundle root or fix the path in the manifest",
        ),
        ProdmanError::EmptyDirectory { .. } => (
            "VCS and RPM directories must exist and contain at least one entry",
            "Populate the directory or check its permissions",
        ),
        ProdmanError::RepoConsistency { .. } => (
            "Every hosted repository must be referenced by exactly one later group, and RPM entries may only target hosted repositories",
            "Declare hosted repositories before the group that lists them in the repositories file",
        ),
        ProdmanError::Decode { .. } => (
            "The document does not have the expected YAML shape",
            "Check indentation and field names",
        ),
        ProdmanError::FileRead { .. } => (
            "A manifest or a definition file it references could not be read",
            "Check that the file exists, is a regular file and is readable",
        ),
        _ => return ErrorContext::new(error),
    };

    ErrorContext::new(error).with_details(details).with_suggestion(suggestion)
}
