use predicates::prelude::*;
use prodman::test_utils::BundleFixture;

use crate::common::{prodman, write_config};

#[test]
fn test_lists_embedded_schema_as_default() {
    let bundle = BundleFixture::new().unwrap();

    prodman(&bundle)
        .arg("schemas")
        .assert()
        .success()
        .stdout(predicate::str::contains("product-manifest (default)"));
}

#[test]
fn test_show_prints_schema() {
    let bundle = BundleFixture::new().unwrap();

    prodman(&bundle)
        .args(["schemas", "--show", "product-manifest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draft-07"))
        .stdout(predicate::str::contains("repository_name"));
}

#[test]
fn test_show_unknown_schema_fails() {
    let bundle = BundleFixture::new().unwrap();

    prodman(&bundle)
        .args(["schemas", "--show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema asset 'missing'"));
}

#[test]
fn test_lists_configured_schema_directory() {
    let bundle = BundleFixture::new().unwrap();
    bundle.write_file("schemas/alpha.yaml", "type: object\n").unwrap();
    bundle.write_file("schemas/beta.yaml", "type: object\n").unwrap();
    bundle.write_file("schemas/notes.txt", "not a schema").unwrap();
    let config = write_config(&bundle, "schema = \"beta\"\nschema_dir = \"schemas\"\n");

    prodman(&bundle)
        .arg("--config")
        .arg(&config)
        .arg("schemas")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta (default)"))
        .stdout(predicate::str::contains("notes").not())
        .stdout(predicate::str::contains("product-manifest").not());
}
