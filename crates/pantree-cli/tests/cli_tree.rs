use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn pantree_cmd() -> Command {
    Command::cargo_bin("pantree").unwrap()
}

fn write_meta(dir: &Path, distribution: &str, requires: &[&str]) {
    let dist_dir = dir.join(distribution);
    fs::create_dir(&dist_dir).unwrap();
    let entries = requires
        .iter()
        .map(|module| format!("\"{module}\": \"0\""))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        dist_dir.join("META.json"),
        format!("{{\"prereqs\": {{\"runtime\": {{\"requires\": {{{entries}}}}}}}}}"),
    )
    .unwrap();
}

fn write_metadata(dir: &Path) {
    fs::write(
        dir.join("module-distro-map.json"),
        r#"{"module1": "distrib1", "module2": "distrib2", "module3": "distrib3"}"#,
    )
    .unwrap();
    fs::write(dir.join("core-modules.json"), r#"["strict", "warnings"]"#).unwrap();
    write_meta(dir, "distrib1", &["module2", "module3", "perl"]);
    write_meta(dir, "distrib2", &["module3"]);
    write_meta(dir, "distrib3", &["perl", "strict"]);
}

#[test]
fn test_tree_renders_connectors() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path());
    pantree_cmd()
        .args(["tree", "distrib1", "--path", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("distrib1\n├── distrib2\n│   └── distrib3\n└── distrib3\n");
}

#[test]
fn test_tree_depth_limits_output() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path());
    pantree_cmd()
        .args([
            "tree",
            "distrib1",
            "--depth",
            "1",
            "--path",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("distrib1\n├── distrib2\n└── distrib3\n");
}

#[test]
fn test_tree_multiple_roots_keep_request_order() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path());
    pantree_cmd()
        .args([
            "tree",
            "distrib3",
            "distrib1",
            "--path",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("distrib3\ndistrib1\n├── distrib2\n│   └── distrib3\n└── distrib3\n");
}

#[test]
fn test_tree_requires_at_least_one_name() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path());
    pantree_cmd()
        .args(["tree", "--path", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
