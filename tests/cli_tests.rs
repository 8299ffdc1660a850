//! End-to-end tests for the `reagent` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn reagent_cmd() -> Command {
    Command::cargo_bin("reagent").unwrap()
}

const REPO_JSON: &str = r#"[
  {
    "file_path": "f.py",
    "method_trees": [
      {
        "value": "Block",
        "origin": {"file_path": "f.py", "line": 1, "column": 0},
        "children": [
          {"value": "Assign:x", "origin": {"file_path": "f.py", "line": 2, "column": 0}},
          {"value": "Return:x", "origin": {"file_path": "f.py", "line": 3, "column": 0}}
        ]
      },
      {
        "value": "Block",
        "origin": {"file_path": "f.py", "line": 10, "column": 0},
        "children": [
          {"value": "Assign:x", "origin": {"file_path": "f.py", "line": 11, "column": 0}},
          {"value": "Return:x", "origin": {"file_path": "f.py", "line": 12, "column": 0}}
        ]
      }
    ]
  }
]"#;

#[test]
fn cli_help_command() {
    let mut cmd = reagent_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("clone detection"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn cli_version_command() {
    let mut cmd = reagent_cmd();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn analyze_oxygen_writes_clones_to_requested_output() {
    let dir = tempdir().unwrap();
    let repo_path = dir.path().join("repo.json");
    std::fs::write(&repo_path, REPO_JSON).unwrap();
    let out_path = dir.path().join("clones.json");

    let mut cmd = reagent_cmd();
    cmd.args([
        "analyze",
        "--algorithm",
        "oxygen",
        repo_path.to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
    ])
    .env("IODINE_MIN_NODES", "3");

    cmd.assert().success();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("\"algorithm\": \"oxygen\""));
    assert!(contents.contains("\"match_weight\""));
}

#[test]
fn analyze_missing_file_fails_with_nonzero_exit() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let mut cmd = reagent_cmd();
    cmd.args(["analyze", "--algorithm", "oxygen", missing.to_str().unwrap()]);

    cmd.assert().failure();
}
