//! Integration tests for the wext binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn extension_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"name": "cli-ext", "version": "0.3.0", "description": "cli test"}"#,
    )
    .unwrap();
    fs::write(dir.path().join("background.js"), "// bg\n").unwrap();
    dir
}

fn wext() -> Command {
    Command::cargo_bin("wext").unwrap()
}

#[test]
fn unknown_vendor_fails_with_registry_hint() {
    wext()
        .args(["build", "netscape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown vendor 'netscape'"))
        .stderr(predicate::str::contains("chrome, firefox, opera, edge"));
}

#[test]
fn build_emits_a_plan_for_a_valid_tree() {
    let dir = extension_tree();
    let out = wext()
        .args(["build", "firefox", "--src"])
        .arg(dir.path())
        .args(["--target", "build/[vendor]"])
        .assert()
        .success();

    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plan["mode"], "production");
    assert!(
        plan["output"]["path"]
            .as_str()
            .unwrap()
            .ends_with("build/firefox")
    );
}

#[test]
fn dev_plan_contains_dev_naming_and_no_minify() {
    let dir = extension_tree();
    let out = wext()
        .args(["dev", "chrome", "--src"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let steps: Vec<&str> = plan["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["step"].as_str().unwrap())
        .collect();
    assert!(steps.contains(&"dev-naming"));
    assert!(!steps.contains(&"minify"));
}

#[test]
fn pack_appends_a_package_step_with_the_artifact_name() {
    let dir = extension_tree();
    let out = wext()
        .args(["build", "firefox", "--pack", "--src"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let last = plan["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["step"], "package");
    assert_eq!(last["filename"], "cli-ext.v0.3.0.firefox.xpi");
}

#[test]
fn out_flag_writes_the_plan_to_a_file() {
    let dir = extension_tree();
    let plan_path = dir.path().join("plan.json");

    wext()
        .args(["build", "chrome", "--src"])
        .arg(dir.path())
        .arg("--out")
        .arg(&plan_path)
        .assert()
        .success();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&plan_path).unwrap()).unwrap();
    assert_eq!(plan["mode"], "production");
}

#[test]
fn missing_manifest_is_a_metadata_error() {
    let dir = TempDir::new().unwrap();
    wext()
        .args(["dev", "chrome", "--src"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read extension metadata"));
}
