use predicates::prelude::*;
use prodman::test_utils::BundleFixture;
use serde_json::Value;

use crate::common::{prodman, write_config};

fn complete_bundle() -> BundleFixture {
    BundleFixture::new().unwrap().with_complete_content().unwrap()
}

fn json_output(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is a JSON document")
}

/// Test validating a complete bundle
#[test]
fn test_validate_valid_bundle() {
    let bundle = complete_bundle();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("is valid (schema: product-manifest)"));
}

#[test]
fn test_validate_verbose_lists_categories() {
    let bundle = complete_bundle();

    prodman(&bundle)
        .args(["--verbose", "validate"])
        .arg(bundle.manifest_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nexus_repositories"))
        .stdout(predicate::str::contains("hosted repositories: cos-A"));
}

#[test]
fn test_validate_quiet_prints_nothing_on_success() {
    let bundle = complete_bundle();

    prodman(&bundle)
        .args(["--quiet", "validate"])
        .arg(bundle.manifest_path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_json_success() {
    let bundle = complete_bundle();

    let output = prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_output(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["schema"], "product-manifest");
    // The docker record is not part of the hosted set
    assert_eq!(json["hosted_repositories"], serde_json::json!(["cos-A"]));
    assert_eq!(json["errors"], serde_json::json!([]));
}

#[test]
fn test_missing_s3_object_names_path() {
    let bundle = complete_bundle();
    std::fs::remove_file(bundle.path("s3/objects.tar")).unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("s3 validation failed"))
        .stderr(predicate::str::contains("objects.tar"));
}

#[test]
fn test_json_failure_reports_category() {
    let bundle = complete_bundle();
    std::fs::remove_file(bundle.path("rpms/base/base-1.0-1.x86_64.rpm")).unwrap();

    let output = prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = json_output(&output);
    assert_eq!(json["valid"], false);
    assert_eq!(json["failed_category"], "rpms");
    assert!(json["errors"][0].as_str().unwrap().contains("directory is empty or unreadable"));
}

#[test]
fn test_structural_failure() {
    let bundle = BundleFixture::new().unwrap();
    bundle.write_manifest("name: no-content\n").unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not conform to schema 'product-manifest'"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_empty_content_is_valid() {
    let bundle = BundleFixture::new().unwrap();
    bundle.write_manifest("content: {}\n").unwrap();

    prodman(&bundle).arg("validate").arg(bundle.manifest_path()).assert().success();
}

#[test]
fn test_relative_paths_resolve_against_working_directory() {
    let bundle = complete_bundle();
    bundle
        .write_manifest(
            "content:\n  vcs:\n    path: vcs\n  s3:\n    - path: s3/objects.tar\n",
        )
        .unwrap();

    prodman(&bundle).args(["validate", "manifest.yaml"]).assert().success();

    let elsewhere = BundleFixture::new().unwrap();
    prodman(&elsewhere)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("path does not exist: s3/objects.tar"));
}

#[test]
fn test_orphan_hosted_repository_fails() {
    let bundle = complete_bundle();
    bundle
        .write_file(
            "nexus/repositories.yaml",
            "format: raw\ntype: hosted\nname: cos-A\n---\nformat: raw\ntype: hosted\nname: extra\n---\nformat: raw\ntype: group\nname: cos\ngroup:\n  memberNames: [cos-A]\n",
        )
        .unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nexus_repositories validation failed"))
        .stderr(predicate::str::contains("not referenced by any group: extra"));
}

#[test]
fn test_group_before_hosted_fails() {
    let bundle = complete_bundle();
    bundle
        .write_file(
            "nexus/repositories.yaml",
            "format: raw\ntype: group\nname: cos\ngroup:\n  memberNames: [cos-A]\n---\nformat: raw\ntype: hosted\nname: cos-A\n",
        )
        .unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("group 'cos' lists 'cos-A'"));
}

#[test]
fn test_rpm_targeting_group_fails() {
    let bundle = complete_bundle();
    let manifest = std::fs::read_to_string(bundle.manifest_path()).unwrap();
    std::fs::write(bundle.manifest_path(), manifest.replace("repository_name: cos-A", "repository_name: cos"))
        .unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("rpms validation failed"))
        .stderr(predicate::str::contains("'cos', which is not a hosted repository"));
}

#[test]
fn test_empty_vcs_directory_fails() {
    let bundle = complete_bundle();
    std::fs::remove_file(bundle.path("vcs/README.md")).unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("vcs validation failed"));
}

#[test]
fn test_freshly_created_vcs_directory_fails() {
    let bundle = BundleFixture::new().unwrap();
    bundle.create_dir("vcs-empty").unwrap();
    bundle.write_manifest("content:\n  vcs:\n    path: '{root}/vcs-empty'\n").unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("vcs validation failed"))
        .stderr(predicate::str::contains("directory is empty or unreadable"));
}

#[test]
fn test_unreadable_repositories_file_is_not_reported_as_manifest() {
    let bundle = BundleFixture::new().unwrap();
    bundle.create_dir("nexus/repositories.yaml").unwrap();
    bundle
        .write_manifest("content:\n  nexus_repositories:\n    yaml_path: '{root}/nexus/repositories.yaml'\n")
        .unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nexus_repositories validation failed"))
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("The manifest file could not be opened").not());
}

#[test]
fn test_missing_manifest_file() {
    let bundle = BundleFixture::new().unwrap();

    prodman(&bundle)
        .args(["validate", "absent.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read absent.yaml"));
}

#[test]
fn test_unknown_schema_suggests_listing() {
    let bundle = complete_bundle();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .args(["--schema", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema asset 'nope'"))
        .stderr(predicate::str::contains("prodman schemas"));
}

#[test]
fn test_schema_from_config_directory() {
    let bundle = complete_bundle();
    bundle
        .write_file("schemas/strict.yaml", "type: object\nrequired: [content, owner]\n")
        .unwrap();
    let config = write_config(&bundle, "schema = \"strict\"\nschema_dir = \"schemas\"\n");

    prodman(&bundle)
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema 'strict'"));
}

#[test]
fn test_config_in_home_directory_is_used() {
    let bundle = complete_bundle();
    bundle.write_file(".prodman/config.toml", "schema = \"missing-schema\"\n").unwrap();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing-schema"));
}

#[test]
fn test_invalid_config_fails() {
    let bundle = complete_bundle();
    let config = write_config(&bundle, "schema = [\n");

    prodman(&bundle)
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(bundle.manifest_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_validate_with_timeout() {
    let bundle = complete_bundle();

    prodman(&bundle)
        .arg("validate")
        .arg(bundle.manifest_path())
        .args(["--timeout", "60"])
        .assert()
        .success();
}
