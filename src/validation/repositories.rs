//! Hosted/group repository reconciliation.
//!
//! Records are applied strictly in file order. A hosted repository becomes
//! *pending* when declared and is consumed by the first later group that lists
//! it. A group member that is not pending (never declared, declared after the
//! group, or already consumed by another group) fails immediately. Hosted
//! repositories still pending at the end are orphans.
//!
//! Records whose format is `docker` or `helm` are ignored entirely, as are
//! records of any type other than hosted or group.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::{ProdmanError, Result};
use crate::documents::split_documents;
use crate::manifest::{NexusRepository, RepositoryType};
use crate::utils::{read_file, remove_at, string_found_in_array};

/// Order-sensitive accumulator for repository records.
#[derive(Debug, Default)]
pub struct Reconciler {
    hosted: BTreeSet<String>,
    pending: Vec<String>,
}

impl Reconciler {
    /// Create an empty reconciler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the next record in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::RepoConsistency`] if a group member does not
    /// resolve to a pending hosted repository.
    pub fn apply(&mut self, repo: &NexusRepository) -> Result<()> {
        if repo.is_skipped_format() {
            tracing::debug!("Skipping {} repository '{}'", repo.format, repo.name);
            return Ok(());
        }

        match repo.repo_type {
            RepositoryType::Hosted => {
                self.hosted.insert(repo.name.clone());
                self.pending.push(repo.name.clone());
            }
            RepositoryType::Group => {
                for member in repo.member_names() {
                    let Some(index) = string_found_in_array(&self.pending, member) else {
                        return Err(ProdmanError::RepoConsistency {
                            reason: format!(
                                "group '{}' lists '{}', which is not a hosted repository declared before it",
                                repo.name, member
                            ),
                        });
                    };
                    self.pending = remove_at(&self.pending, index)?;
                }
            }
            RepositoryType::Other => {
                tracing::debug!("Ignoring repository '{}' of unchecked type", repo.name);
            }
        }

        Ok(())
    }

    /// Finish the file, returning every hosted repository name seen.
    ///
    /// # Errors
    ///
    /// Returns [`ProdmanError::RepoConsistency`] listing hosted repositories
    /// that no group referenced.
    pub fn finish(self) -> Result<BTreeSet<String>> {
        if !self.pending.is_empty() {
            return Err(ProdmanError::RepoConsistency {
                reason: format!(
                    "hosted repositories not referenced by any group: {}",
                    self.pending.join(", ")
                ),
            });
        }

        Ok(self.hosted)
    }
}

/// Reconcile the raw contents of a repositories file.
///
/// # Errors
///
/// Returns [`ProdmanError::Decode`] for a malformed record and
/// [`ProdmanError::RepoConsistency`] for a resolution failure, whichever is met
/// first in file order.
pub fn reconcile_documents(input: &[u8]) -> Result<BTreeSet<String>> {
    let mut reconciler = Reconciler::new();

    for (i, document) in split_documents(input).into_iter().enumerate() {
        match NexusRepository::from_document(document, i + 1)? {
            Some(repo) => reconciler.apply(&repo)?,
            None => tracing::debug!("Repository document #{} has no content", i + 1),
        }
    }

    reconciler.finish()
}

/// Read and reconcile the repositories file at `path`.
pub fn reconcile_file(path: &Path) -> Result<BTreeSet<String>> {
    let bytes = read_file(path)?;
    reconcile_documents(&bytes)
}
