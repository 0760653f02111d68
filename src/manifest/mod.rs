//! Product manifest model.
//!
//! A manifest is a YAML document describing an installable product bundle. The
//! engine works on it in two forms:
//!
//! - a generic [`serde_json::Value`], which is what the structural schema check
//!   consumes, and
//! - the typed [`Manifest`], decoded once at the boundary so the content stages
//!   never traverse untyped maps.
//!
//! # Manifest Shape
//!
//! ```yaml
//! name: edge-bundle
//! content:
//!   s3:
//!     - path: s3/objects.tar
//!   nexus_repositories:
//!     yaml_path: nexus/repositories.yaml
//!   nexus_blob_stores:
//!     yaml_path: nexus/blob-stores.yaml
//!   vcs:
//!     path: vcs
//!   rpms:
//!     - path: rpms/base
//!       repository_name: cos-A
//! ```
//!
//! Only the categories above are checked semantically; any other key under
//! `content` (e.g. `images`) is kept in [`Content::other`] and ignored.

pub mod nexus;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::{ProdmanError, Result};

pub use nexus::{GroupAttributes, NexusRepository, RepositoryType};

/// Decoded product manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// The content section, keyed by content category.
    pub content: Content,
}

/// The manifest's `content` section.
///
/// Every category is optional; an absent category is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// S3 objects that must be present locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<Vec<S3Object>>,

    /// Reference to the Nexus repositories definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexus_repositories: Option<YamlFileRef>,

    /// Reference to the Nexus blob stores definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexus_blob_stores: Option<YamlFileRef>,

    /// Version-control checkout directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<VcsSource>,

    /// RPM directories and the hosted repositories they are uploaded to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpms: Option<Vec<RpmPackage>>,

    /// Categories without semantic checks (images, charts, ...).
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// One entry of `content.s3`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Object {
    /// Local path of the object.
    pub path: String,
}

/// A `{yaml_path: ...}` reference to a definition file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YamlFileRef {
    /// Local path of the referenced file.
    pub yaml_path: String,
}

/// The `content.vcs` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VcsSource {
    /// Local checkout directory.
    pub path: String,
}

/// One entry of `content.rpms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpmPackage {
    /// Directory holding the RPM files.
    pub path: String,
    /// Hosted repository the RPMs are published to.
    pub repository_name: String,
}

impl Manifest {
    /// Decode a manifest from its generic form.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::Decode`] if `content` is missing or a category
    /// does not have the expected shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| ProdmanError::Decode {
            what: "manifest".to_string(),
            reason: e.to_string(),
        })
    }

    /// Names of the content categories present in this manifest, sorted.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        let c = &self.content;
        let known = [
            ("s3", c.s3.is_some()),
            ("nexus_repositories", c.nexus_repositories.is_some()),
            ("nexus_blob_stores", c.nexus_blob_stores.is_some()),
            ("vcs", c.vcs.is_some()),
            ("rpms", c.rpms.is_some()),
        ];

        let mut names: Vec<String> = known
            .iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| (*name).to_string())
            .chain(c.other.keys().cloned())
            .collect();
        names.sort();
        names
    }
}

/// Decode YAML bytes into a generic JSON value.
///
/// `what` names the document in the error message.
///
/// # Errors
///
/// Returns [`ProdmanError::Decode`] if the bytes are not valid YAML or use
/// constructs JSON cannot represent (e.g. non-string mapping keys).
pub fn decode_document(bytes: &[u8], what: &str) -> Result<Value> {
    serde_yaml::from_slice(bytes).map_err(|e| ProdmanError::Decode {
        what: what.to_string(),
        reason: e.to_string(),
    })
}
