//! Content validation pipeline.
//!
//! The pipeline runs a fixed sequence of stages over the typed [`Content`]
//! section. Each stage is a plain function that receives the accumulated
//! [`ValidationState`] and returns the updated state, so stages can be tested
//! in isolation by constructing the state they expect.
//!
//! Stage order: S3, Nexus repositories (declaration), Nexus repositories (file
//! consistency), Nexus blob stores, VCS, RPMs. The first failing stage stops
//! the run and its error is wrapped with the stage's [`ContentCategory`].

use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::ContentCategory;
use super::repositories::reconcile_file;
use crate::core::{ProdmanError, Result};
use crate::manifest::{Content, Manifest};
use crate::utils::{is_empty_directory, path_exists};

/// State threaded through the content stages of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    /// Repositories file recorded by the declaration stage.
    pub repositories_file: Option<PathBuf>,
    /// Every hosted repository name declared in the repositories file.
    pub hosted_repositories: BTreeSet<String>,
}

/// Signature shared by all content stages.
pub type Stage = fn(ValidationState, &Content) -> Result<ValidationState>;

/// The pipeline, in execution order.
pub const STAGES: [(ContentCategory, Stage); 6] = [
    (ContentCategory::S3, check_s3),
    (ContentCategory::NexusRepositories, record_repositories_file),
    (ContentCategory::NexusRepositories, check_repositories_file),
    (ContentCategory::NexusBlobStores, check_blob_stores),
    (ContentCategory::Vcs, check_vcs),
    (ContentCategory::Rpms, check_rpms),
];

/// Decode the content section of `manifest` and run every stage.
///
/// # Errors
///
/// Returns [`ProdmanError::Decode`] if the content does not decode, otherwise
/// the first stage failure wrapped in [`ProdmanError::ContentStage`].
pub fn validate(manifest: &Value) -> Result<()> {
    let manifest = Manifest::from_value(manifest)?;
    run(&manifest.content).map(|_| ())
}

/// Run every stage over `content`, returning the final state.
pub fn run(content: &Content) -> Result<ValidationState> {
    STAGES.iter().try_fold(ValidationState::default(), |state, (category, stage)| {
        stage(state, content).map_err(|e| {
            tracing::debug!("Content stage '{}' failed: {}", category, e);
            e.in_stage(*category)
        })
    })
}

/// Every S3 object must exist.
pub fn check_s3(state: ValidationState, content: &Content) -> Result<ValidationState> {
    for object in content.s3.iter().flatten() {
        require_path(&object.path)?;
    }
    Ok(state)
}

/// The repositories file must exist; it is recorded for the next stage.
pub fn record_repositories_file(
    mut state: ValidationState,
    content: &Content,
) -> Result<ValidationState> {
    if let Some(reference) = &content.nexus_repositories {
        require_path(&reference.yaml_path)?;
        state.repositories_file = Some(PathBuf::from(&reference.yaml_path));
    }
    Ok(state)
}

/// Hosted and group declarations in the recorded file must reconcile.
pub fn check_repositories_file(
    mut state: ValidationState,
    _content: &Content,
) -> Result<ValidationState> {
    let Some(path) = state.repositories_file.as_deref() else {
        return Ok(state);
    };

    let hosted = reconcile_file(path)?;
    tracing::debug!("{} declares {} hosted repositories", path.display(), hosted.len());
    state.hosted_repositories.extend(hosted);
    Ok(state)
}

/// The blob stores file must exist.
pub fn check_blob_stores(state: ValidationState, content: &Content) -> Result<ValidationState> {
    if let Some(reference) = &content.nexus_blob_stores {
        require_path(&reference.yaml_path)?;
    }
    Ok(state)
}

/// The VCS directory must exist and have at least one entry.
pub fn check_vcs(state: ValidationState, content: &Content) -> Result<ValidationState> {
    if let Some(vcs) = &content.vcs {
        require_path(&vcs.path)?;
        require_non_empty_dir(&vcs.path)?;
    }
    Ok(state)
}

/// Every RPM directory must be non-empty and target a hosted repository.
///
/// Group repository names are not accepted, even when the group exists.
pub fn check_rpms(state: ValidationState, content: &Content) -> Result<ValidationState> {
    for rpm in content.rpms.iter().flatten() {
        require_non_empty_dir(&rpm.path)?;

        if !state.hosted_repositories.contains(&rpm.repository_name) {
            return Err(ProdmanError::RepoConsistency {
                reason: format!(
                    "RPMs at '{}' target '{}', which is not a hosted repository",
                    rpm.path, rpm.repository_name
                ),
            });
        }
    }
    Ok(state)
}

fn require_path(path: &str) -> Result<()> {
    if path_exists(Path::new(path)) {
        Ok(())
    } else {
        Err(ProdmanError::PathNotFound {
            path: path.to_string(),
        })
    }
}

fn require_non_empty_dir(path: &str) -> Result<()> {
    if is_empty_directory(Path::new(path)) {
        Err(ProdmanError::EmptyDirectory {
            path: path.to_string(),
        })
    } else {
        Ok(())
    }
}
