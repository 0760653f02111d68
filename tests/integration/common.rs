//! Shared helpers for the integration tests.

use assert_cmd::Command;
use prodman::test_utils::BundleFixture;
use std::path::PathBuf;

/// A `prodman` command running inside `bundle` with an isolated home directory.
///
/// The home directory is the bundle root, so no user configuration is read
/// unless a test writes one there.
pub fn prodman(bundle: &BundleFixture) -> Command {
    let mut cmd = Command::cargo_bin("prodman").unwrap();
    cmd.current_dir(bundle.root())
        .env("HOME", bundle.root())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a prodman config file into the bundle and return its path.
pub fn write_config(bundle: &BundleFixture, contents: &str) -> PathBuf {
    bundle.write_file("prodman.toml", contents).unwrap()
}
