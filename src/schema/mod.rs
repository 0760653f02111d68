//! Structural schema validation.
//!
//! A manifest is first checked against a JSON-Schema (draft 7). Schemas are
//! stored as YAML assets and served by an [`AssetProvider`]; they are converted
//! to JSON and compiled on every call, so validation is stateless.
//!
//! # Example
//!
//! ```rust,no_run
//! use prodman::schema::{self, EmbeddedAssets};
//! use serde_json::json;
//!
//! let manifest = json!({ "content": {} });
//! schema::validate(&manifest, "product-manifest", &EmbeddedAssets)?;
//! # Ok::<(), prodman::core::ProdmanError>(())
//! ```

mod assets;

pub use assets::{AssetProvider, DirectoryAssets, EmbeddedAssets};

use jsonschema::Draft;
use serde_json::Value;

use crate::core::{ProdmanError, Result};

/// Validate `manifest` against the schema asset called `schema_name`.
///
/// # Errors
///
/// - [`ProdmanError::SchemaAsset`] if the asset is missing or is not YAML
/// - [`ProdmanError::SchemaCompile`] if the asset is not a valid JSON-Schema
/// - [`ProdmanError::StructuralValidation`] with the first violation otherwise
pub fn validate(manifest: &Value, schema_name: &str, assets: &dyn AssetProvider) -> Result<()> {
    let schema = load_schema(schema_name, assets)?;

    let validator = jsonschema::options().with_draft(Draft::Draft7).build(&schema).map_err(|e| {
        ProdmanError::SchemaCompile {
            name: schema_name.to_string(),
            reason: e.to_string(),
        }
    })?;

    if let Some(violation) = validator.iter_errors(manifest).next() {
        return Err(ProdmanError::StructuralValidation {
            schema: schema_name.to_string(),
            reason: violation.to_string(),
        });
    }

    tracing::debug!("Manifest conforms to schema '{}'", schema_name);
    Ok(())
}

/// Load the schema asset `name` and convert it from YAML to a JSON value.
pub fn load_schema(name: &str, assets: &dyn AssetProvider) -> Result<Value> {
    let bytes = assets.read_asset(name)?;
    serde_yaml::from_slice(&bytes).map_err(|e| ProdmanError::SchemaAsset {
        name: name.to_string(),
        reason: format!("invalid YAML: {e}"),
    })
}
