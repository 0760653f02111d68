//! Nexus repository definition records.
//!
//! The file referenced by `content.nexus_repositories.yaml_path` is a
//! multi-document YAML file with one repository per document:
//!
//! ```yaml
//! format: raw
//! type: hosted
//! name: cos-A
//! ---
//! format: raw
//! type: group
//! name: cos
//! group:
//!   memberNames:
//!     - cos-A
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::SKIPPED_REPOSITORY_FORMATS;
use crate::core::{ProdmanError, Result};

/// Repository type as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryType {
    /// Stores artifacts.
    Hosted,
    /// Aggregates hosted repositories by name.
    Group,
    /// Any other type (e.g. `proxy`); not part of the consistency check.
    #[serde(other)]
    Other,
}

/// One repository record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NexusRepository {
    /// Repository format (`raw`, `yum`, `docker`, ...).
    pub format: String,
    /// Repository type.
    #[serde(rename = "type")]
    pub repo_type: RepositoryType,
    /// Repository name.
    pub name: String,
    /// Group attributes, present for group repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupAttributes>,
}

/// The `group` block of a group repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAttributes {
    /// Names of the member repositories, in declaration order.
    #[serde(rename = "memberNames", default)]
    pub member_names: Vec<String>,
}

impl NexusRepository {
    /// Decode one YAML document; `index` is its 1-based position in the file.
    ///
    /// A document without content (only comments, or an explicit `null`)
    /// holds no record and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::Decode`] naming the record position.
    pub fn from_document(document: &[u8], index: usize) -> Result<Option<Self>> {
        let decode_error = |e: serde_yaml::Error| ProdmanError::Decode {
            what: format!("repository record #{index}"),
            reason: e.to_string(),
        };

        let value: serde_yaml::Value = serde_yaml::from_slice(document).map_err(decode_error)?;
        if value.is_null() {
            return Ok(None);
        }

        serde_yaml::from_value(value).map(Some).map_err(decode_error)
    }

    /// Whether this record's format is excluded from the consistency check.
    #[must_use]
    pub fn is_skipped_format(&self) -> bool {
        SKIPPED_REPOSITORY_FORMATS.contains(&self.format.as_str())
    }

    /// Member names of a group repository; empty for other types.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        match &self.group {
            Some(group) => &group.member_names,
            None => &[],
        }
    }
}
