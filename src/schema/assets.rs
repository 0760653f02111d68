//! Schema asset providers.
//!
//! The structural validator never reads schema files directly. It asks an
//! [`AssetProvider`] for the bytes of a named asset, which lets the binary ship
//! its schemas embedded while tests and deployments can point at a directory.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::constants::SCHEMA_ASSET_EXTENSION;
use crate::core::{ProdmanError, Result};

/// Read-only source of named schema assets.
pub trait AssetProvider: Send + Sync {
    /// Returns the raw bytes of the asset called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::SchemaAsset`] if no such asset exists or it
    /// cannot be read.
    fn read_asset(&self, name: &str) -> Result<Cow<'static, [u8]>>;

    /// Names of all assets this provider can serve, sorted.
    fn asset_names(&self) -> Vec<String>;
}

const EMBEDDED: &[(&str, &[u8])] =
    &[("product-manifest", include_bytes!("../../schemas/product-manifest.yaml"))];

/// Schemas compiled into the binary from the `schemas/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetProvider for EmbeddedAssets {
    fn read_asset(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        EMBEDDED
            .iter()
            .find(|(asset, _)| *asset == name)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
            .ok_or_else(|| not_found(name))
    }

    fn asset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = EMBEDDED.iter().map(|(name, _)| (*name).to_string()).collect();
        names.sort();
        names
    }
}

/// Schemas read from `<root>/<name>.yaml` on every request.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Serve assets from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }
}

impl AssetProvider for DirectoryAssets {
    fn read_asset(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        // Names are plain identifiers; anything path-like is not an asset
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(not_found(name));
        }

        let path = self.root.join(format!("{name}.{SCHEMA_ASSET_EXTENSION}"));
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found(name)),
            Err(e) => Err(ProdmanError::SchemaAsset {
                name: name.to_string(),
                reason: format!("{}: {e}", path.display()),
            }),
        }
    }

    fn asset_names(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            tracing::warn!("Schema directory {} cannot be listed", self.root.display());
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|ext| ext.to_str()) == Some(SCHEMA_ASSET_EXTENSION)
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

fn not_found(name: &str) -> ProdmanError {
    ProdmanError::SchemaAsset {
        name: name.to_string(),
        reason: "not found".to_string(),
    }
}
