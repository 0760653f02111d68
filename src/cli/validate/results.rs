//! Validation results structure for JSON output.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::ProdmanError;
use crate::validation::{ContentCategory, ValidationOutcome};

/// Result of one `validate` run, serialized for `--format json`.
#[derive(Debug, Default, Serialize)]
pub struct ValidationResults {
    /// Whether the manifest passed every check
    pub valid: bool,
    /// The manifest file, as given on the command line
    pub file: String,
    /// Schema the manifest was checked against
    pub schema: String,
    /// Content category whose stage failed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_category: Option<ContentCategory>,
    /// Content categories present in the manifest
    pub categories: Vec<String>,
    /// Hosted repositories declared in the repositories file
    pub hosted_repositories: BTreeSet<String>,
    /// Error messages; empty on success
    pub errors: Vec<String>,
}

impl ValidationResults {
    /// Results for a manifest that passed.
    #[must_use]
    pub fn passed(file: String, outcome: ValidationOutcome) -> Self {
        Self {
            valid: true,
            file,
            schema: outcome.schema,
            categories: outcome.categories,
            hosted_repositories: outcome.hosted_repositories,
            ..Default::default()
        }
    }

    /// Results for a manifest that failed with `error`.
    #[must_use]
    pub fn failed(file: String, schema: String, error: &ProdmanError) -> Self {
        let failed_category = match error {
            ProdmanError::ContentStage {
                category,
                ..
            } => Some(*category),
            _ => None,
        };

        Self {
            valid: false,
            file,
            schema,
            failed_category,
            errors: vec![error.to_string()],
            ..Default::default()
        }
    }

    /// Results for a run that did not finish.
    #[must_use]
    pub fn aborted(file: String, schema: String, message: String) -> Self {
        Self {
            valid: false,
            file,
            schema,
            errors: vec![message],
            ..Default::default()
        }
    }
}
