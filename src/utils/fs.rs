//! File system predicates used by the content validation stages.
//!
//! These helpers answer yes/no questions about paths named in a manifest. They
//! never fail: the underlying OS error is swallowed and folded into the answer,
//! which keeps the stage code a sequence of simple checks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use prodman::utils::fs::{is_empty_directory, path_exists};
//! use std::path::Path;
//!
//! if path_exists(Path::new("bundle/vcs")) && !is_empty_directory(Path::new("bundle/vcs")) {
//!     println!("VCS checkout present");
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::core::{ProdmanError, Result};

/// Returns `true` if a filesystem stat on `path` succeeds.
///
/// Files and directories are treated alike. Any error (missing path, permission
/// denied on a parent, broken symlink) reports `false`.
#[must_use]
pub fn path_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns `true` if `path` is a directory without entries.
///
/// The directory is opened and a single entry is read. If the directory cannot
/// be opened at all (missing, not a directory, unreadable) this also returns
/// `true`, so an existing but unreadable directory is indistinguishable from an
/// empty one. The directory handle is dropped on every return path.
#[must_use]
pub fn is_empty_directory(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) => {
            tracing::debug!("Treating {} as empty: {}", path.display(), e);
            true
        }
    }
}

/// Reads a whole file into memory, mapping failures to [`ProdmanError::FileRead`].
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ProdmanError::FileRead {
        path: path.display().to_string(),
        source,
    })
}
