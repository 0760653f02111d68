//! Product bundle fixtures.
//!
//! Manifest paths are written as absolute paths into the temporary directory,
//! so fixtures validate regardless of the test's working directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Repositories file declaring `cos-A` and a group `cos` that lists it.
pub const REPOSITORIES_HOSTED_THEN_GROUP: &str = "\
format: yum
type: hosted
name: cos-A
---
format: docker
type: hosted
name: images
---
format: yum
type: group
name: cos
group:
  memberNames:
    - cos-A
";

/// A product bundle in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
#[derive(Debug)]
pub struct BundleFixture {
    temp_dir: TempDir,
}

impl BundleFixture {
    /// Create an empty bundle directory.
    ///
    /// Also initializes test logging, so `RUST_LOG` applies to any test that
    /// builds a bundle.
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new().context("Failed to create bundle directory")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Bundle root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the bundle.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Path of the bundle's `manifest.yaml`.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.path("manifest.yaml")
    }

    /// Write a file inside the bundle, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Create a directory inside the bundle.
    pub fn create_dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        fs::create_dir_all(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(path)
    }

    /// Write `manifest.yaml`, replacing `{root}` with the bundle root.
    pub fn write_manifest(&self, template: &str) -> Result<PathBuf> {
        let root = self.root().display().to_string();
        self.write_file("manifest.yaml", &template.replace("{root}", &root))
    }

    /// Populate every checked content category and a manifest referencing them.
    pub fn with_complete_content(self) -> Result<Self> {
        self.write_file("s3/objects.tar", "objects")?;
        self.write_file("nexus/repositories.yaml", REPOSITORIES_HOSTED_THEN_GROUP)?;
        self.write_file("nexus/blob-stores.yaml", "name: default\ntype: file\n")?;
        self.write_file("vcs/README.md", "# checkout\n")?;
        self.write_file("rpms/base/base-1.0-1.x86_64.rpm", "rpm")?;

        self.write_manifest(
            r#"name: edge-bundle
version: "1.4.0"
content:
  s3:
    - path: '{root}/s3/objects.tar'
  nexus_repositories:
    yaml_path: '{root}/nexus/repositories.yaml'
  nexus_blob_stores:
    yaml_path: '{root}/nexus/blob-stores.yaml'
  vcs:
    path: '{root}/vcs'
  rpms:
    - path: '{root}/rpms/base'
      repository_name: cos-A
  images:
    - name: registry.example.com/edge/app:1.4.0
"#,
        )?;
        Ok(self)
    }
}
