//! Manifest validation engine.
//!
//! Validation runs in two phases:
//!
//! 1. **Structural**: the manifest is checked against a JSON-Schema asset
//!    (see [`crate::schema`]). Any violation stops the run before the
//!    filesystem is touched.
//! 2. **Content**: the typed `content` section is walked category by category
//!    (see [`content`]), checking that referenced paths exist and that the
//!    Nexus repository definitions reconcile.
//!
//! Validation is stateless. Nothing is cached between calls, so running the
//! same manifest twice against an unchanged filesystem gives the same result.
//!
//! # Example
//!
//! ```rust,no_run
//! use prodman::validation::Validator;
//! use std::path::Path;
//!
//! let validator = Validator::default();
//! validator.validate_file(Path::new("bundle/manifest.yaml"))?;
//! # Ok::<(), prodman::core::ProdmanError>(())
//! ```

pub mod content;
pub mod repositories;

pub use content::ValidationState;
pub use repositories::{Reconciler, reconcile_documents, reconcile_file};

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::ProdmanConfig;
use crate::constants::DEFAULT_SCHEMA;
use crate::core::{ProdmanError, Result};
use crate::manifest::{Manifest, decode_document};
use crate::schema::{self, AssetProvider, DirectoryAssets, EmbeddedAssets};
use crate::utils::read_file;

/// Content category checked by one stage of the content pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// `content.s3`
    S3,
    /// `content.nexus_repositories`
    NexusRepositories,
    /// `content.nexus_blob_stores`
    NexusBlobStores,
    /// `content.vcs`
    Vcs,
    /// `content.rpms`
    Rpms,
}

impl ContentCategory {
    /// The manifest key of this category.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::NexusRepositories => "nexus_repositories",
            Self::NexusBlobStores => "nexus_blob_stores",
            Self::Vcs => "vcs",
            Self::Rpms => "rpms",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Summary of a successful validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Schema the manifest was checked against
    pub schema: String,
    /// Content categories present in the manifest, sorted
    pub categories: Vec<String>,
    /// Hosted repository names declared in the repositories file
    pub hosted_repositories: BTreeSet<String>,
}

/// Validates manifests against one schema and a set of schema assets.
///
/// Cloning is cheap; the asset provider is shared.
#[derive(Clone)]
pub struct Validator {
    assets: Arc<dyn AssetProvider>,
    schema: String,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("schema", &self.schema)
            .field("assets", &self.assets.asset_names())
            .finish()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Arc::new(EmbeddedAssets), DEFAULT_SCHEMA)
    }
}

impl Validator {
    /// Create a validator using `assets` and the schema called `schema`.
    pub fn new(assets: Arc<dyn AssetProvider>, schema: impl Into<String>) -> Self {
        Self {
            assets,
            schema: schema.into(),
        }
    }

    /// Build a validator from configuration.
    ///
    /// `schema_dir` replaces the embedded assets when set; `schema` falls back
    /// to the default schema name.
    #[must_use]
    pub fn from_config(config: &ProdmanConfig) -> Self {
        let assets: Arc<dyn AssetProvider> = match &config.schema_dir {
            Some(dir) => Arc::new(DirectoryAssets::new(dir)),
            None => Arc::new(EmbeddedAssets),
        };
        let schema = config.schema.clone().unwrap_or_else(|| DEFAULT_SCHEMA.to_string());
        Self::new(assets, schema)
    }

    /// Return a copy of this validator using a different schema name.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Name of the schema manifests are checked against.
    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The schema asset provider.
    #[must_use]
    pub fn assets(&self) -> &dyn AssetProvider {
        self.assets.as_ref()
    }

    /// Read, decode and validate the manifest file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::FileRead`] or [`ProdmanError::Decode`] if
    /// the file cannot be loaded, otherwise the first validation failure.
    pub fn validate_file(&self, path: &Path) -> Result<()> {
        self.check_file(path).map(|_| ())
    }

    /// Validate an already decoded manifest.
    ///
    /// The structural check runs first; content checks only run when it
    /// passes.
    pub fn validate(&self, manifest: &Value) -> Result<()> {
        self.check(manifest).map(|_| ())
    }

    /// Like [`Validator::validate_file`], returning a summary on success.
    pub fn check_file(&self, path: &Path) -> Result<ValidationOutcome> {
        tracing::debug!("Validating manifest {}", path.display());
        let manifest = load_manifest(path)?;
        self.check(&manifest)
    }

    /// Like [`Validator::validate`], returning a summary on success.
    pub fn check(&self, manifest: &Value) -> Result<ValidationOutcome> {
        schema::validate(manifest, &self.schema, self.assets.as_ref())?;

        let typed = Manifest::from_value(manifest)?;
        let state = content::run(&typed.content)?;

        Ok(ValidationOutcome {
            schema: self.schema.clone(),
            categories: typed.category_names(),
            hosted_repositories: state.hosted_repositories,
        })
    }

    /// Validate the manifest at `path` on the blocking thread pool.
    ///
    /// The returned handle resolves to the validation result; a panic in the
    /// worker is reported as [`ProdmanError::Other`].
    pub fn check_file_in_background(
        &self,
        path: impl Into<PathBuf>,
    ) -> JoinHandle<Result<ValidationOutcome>> {
        let validator = self.clone();
        let path = path.into();
        tokio::spawn(async move {
            tokio::task::spawn_blocking(move || validator.check_file(&path))
                .await
                .map_err(|e| ProdmanError::Other {
                    message: format!("validation task failed: {e}"),
                })?
        })
    }

    /// Background form of [`Validator::validate_file`].
    pub fn validate_file_in_background(&self, path: impl Into<PathBuf>) -> JoinHandle<Result<()>> {
        let handle = self.check_file_in_background(path);
        tokio::spawn(async move {
            handle
                .await
                .map_err(|e| ProdmanError::Other {
                    message: format!("validation task failed: {e}"),
                })?
                .map(|_| ())
        })
    }
}

/// Read and decode a manifest file into its generic form.
pub fn load_manifest(path: &Path) -> Result<Value> {
    let bytes = read_file(path)?;
    decode_document(&bytes, &format!("manifest {}", path.display()))
}

/// Validate the manifest file at `path` with the embedded default schema.
pub fn validate_file(path: &Path) -> Result<()> {
    Validator::default().validate_file(path)
}

/// Validate a decoded manifest with the embedded default schema.
pub fn validate(manifest: &Value) -> Result<()> {
    Validator::default().validate(manifest)
}

/// Validate the manifest file at `path` in the background with the default
/// schema.
pub fn validate_file_in_background(path: impl Into<PathBuf>) -> JoinHandle<Result<()>> {
    Validator::default().validate_file_in_background(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::BundleFixture;
    use serde_json::json;

    #[test]
    fn test_category_display_matches_manifest_keys() {
        assert_eq!(ContentCategory::S3.to_string(), "s3");
        assert_eq!(ContentCategory::NexusRepositories.to_string(), "nexus_repositories");
        assert_eq!(ContentCategory::NexusBlobStores.to_string(), "nexus_blob_stores");
        assert_eq!(ContentCategory::Vcs.to_string(), "vcs");
        assert_eq!(ContentCategory::Rpms.to_string(), "rpms");
        assert_eq!(serde_json::to_value(ContentCategory::Rpms).unwrap(), json!("rpms"));
    }

    #[test]
    fn test_empty_content_is_valid() {
        validate(&json!({ "content": {} })).unwrap();
    }

    #[test]
    fn test_structural_failure_skips_content_checks() {
        // The s3 path is missing too, but the schema rejects `vcs` first
        let manifest = json!({
            "content": {
                "s3": [{ "path": "definitely/not/here.tar" }],
                "vcs": "not-a-mapping"
            }
        });
        let err = validate(&manifest).unwrap_err();
        assert!(matches!(err, ProdmanError::StructuralValidation { .. }));
    }

    #[test]
    fn test_valid_bundle_file() {
        let bundle = BundleFixture::new().unwrap().with_complete_content().unwrap();
        let outcome = Validator::default().check_file(&bundle.manifest_path()).unwrap();

        assert_eq!(outcome.schema, DEFAULT_SCHEMA);
        assert!(outcome.categories.contains(&"rpms".to_string()));
        assert!(outcome.hosted_repositories.contains("cos-A"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let bundle = BundleFixture::new().unwrap().with_complete_content().unwrap();
        let validator = Validator::default();

        let first = validator.check_file(&bundle.manifest_path()).unwrap();
        let second = validator.check_file(&bundle.manifest_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_manifest_file_is_read_error() {
        let err = validate_file(Path::new("no/such/manifest.yaml")).unwrap_err();
        assert!(matches!(err, ProdmanError::FileRead { .. }));
    }

    #[test]
    fn test_unknown_schema_name() {
        let err = Validator::default().with_schema("nope").validate(&json!({ "content": {} })).unwrap_err();
        assert!(matches!(err, ProdmanError::SchemaAsset { .. }));
    }

    #[test]
    fn test_from_config_defaults() {
        let validator = Validator::from_config(&ProdmanConfig::default());
        assert_eq!(validator.schema(), DEFAULT_SCHEMA);
        assert!(validator.assets().asset_names().contains(&DEFAULT_SCHEMA.to_string()));
    }

    #[test]
    fn test_from_config_schema_dir() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("strict.yaml"), "type: object\nrequired: [content, name]\n")
            .unwrap();

        let config = ProdmanConfig {
            schema: Some("strict".to_string()),
            schema_dir: Some(temp.path().to_path_buf()),
        };
        let validator = Validator::from_config(&config);

        let err = validator.validate(&json!({ "content": {} })).unwrap_err();
        assert!(matches!(err, ProdmanError::StructuralValidation { .. }));
        validator.validate(&json!({ "name": "x", "content": {} })).unwrap();
    }

    #[tokio::test]
    async fn test_background_validation() {
        let bundle = BundleFixture::new().unwrap().with_complete_content().unwrap();
        validate_file_in_background(bundle.manifest_path()).await.unwrap().unwrap();

        let err = validate_file_in_background("no/such/manifest.yaml").await.unwrap().unwrap_err();
        assert!(matches!(err, ProdmanError::FileRead { .. }));
    }
}
