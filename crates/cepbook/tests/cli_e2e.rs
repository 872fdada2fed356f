#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cepbook_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("cepbook"));
    cmd.env("CEPBOOK_DATA", data_dir.as_os_str())
        .env_remove("RUST_LOG");
    cmd
}

fn seed(data_dir: &Path) {
    let addresses = r#"[
  {
    "id": "3b0c7f5e-5d0a-4a43-9a53-6f3f5a1c2d01",
    "cep": "80010000",
    "street": "Rua XV de Novembro",
    "neighborhood": "Centro",
    "city": "Curitiba",
    "state_code": "PR",
    "created_at": "2026-01-03T10:00:00Z"
  },
  {
    "id": "3b0c7f5e-5d0a-4a43-9a53-6f3f5a1c2d02",
    "cep": "20040002",
    "street": "Rua da Assembleia",
    "neighborhood": "Centro",
    "city": "Rio de Janeiro",
    "state_code": "RJ",
    "created_at": "2026-01-02T10:00:00Z"
  },
  {
    "id": "3b0c7f5e-5d0a-4a43-9a53-6f3f5a1c2d03",
    "cep": "01001000",
    "street": "Praça da Sé",
    "neighborhood": "Sé",
    "city": "São Paulo",
    "state_code": "SP",
    "created_at": "2026-01-01T10:00:00Z"
  }
]"#;
    fs::write(data_dir.join("addresses.json"), addresses).unwrap();
}

#[test]
fn test_empty_list_greets_and_says_so() {
    let temp = TempDir::new().unwrap();

    cepbook_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome"))
        .stdout(predicate::str::contains("No addresses found."));
}

#[test]
fn test_greeting_uses_configured_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cepbook.toml"), "user_name = \"Ana\"\n").unwrap();

    cepbook_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"));
}

#[test]
fn test_list_filters_but_keeps_indexes() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    cepbook_cmd(temp.path())
        .args(["list", "sao paulo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3."))
        .stdout(predicate::str::contains("Praça da Sé"))
        .stdout(predicate::str::contains("Curitiba").not());
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    let output = cepbook_cmd(temp.path())
        .args(["list", "--json", "RJ"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], 2);
    assert_eq!(rows[0]["address"]["city"], "Rio de Janeiro");
}

#[test]
fn test_view_shows_all_fields() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    cepbook_cmd(temp.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rua XV de Novembro"))
        .stdout(predicate::str::contains("3b0c7f5e-5d0a-4a43-9a53-6f3f5a1c2d01"));
}

#[test]
fn test_delete_by_index_then_by_unknown_uuid() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    cepbook_cmd(temp.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rua da Assembleia"));

    cepbook_cmd(temp.path())
        .args(["delete", "3b0c7f5e-5d0a-4a43-9a53-6f3f5a1c2d02"])
        .assert()
        .success();

    cepbook_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rio de Janeiro").not())
        .stdout(predicate::str::contains("Curitiba"))
        .stdout(predicate::str::contains("São Paulo"));
}

#[test]
fn test_delete_unknown_index_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    cepbook_cmd(temp.path())
        .args(["delete", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    cepbook_cmd(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("This would delete 3 address(es)"));
    assert!(temp.path().join("addresses.json").exists());

    cepbook_cmd(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success();
    assert!(!temp.path().join("addresses.json").exists());
}

#[test]
fn test_add_rejects_wrong_length_without_lookup() {
    let temp = TempDir::new().unwrap();

    cepbook_cmd(temp.path())
        .args(["add", "0100100"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    assert!(!temp.path().join("addresses.json").exists());
}

#[test]
fn test_add_with_unreachable_service_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("cepbook.toml"),
        "lookup_url = \"http://127.0.0.1:9\"\nlookup_timeout_secs = 2\n",
    )
    .unwrap();

    cepbook_cmd(temp.path())
        .args(["add", "01001000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    assert!(!temp.path().join("addresses.json").exists());
}

#[test]
fn test_corrupt_data_does_not_crash() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("addresses.json"), "{{{ garbage").unwrap();

    cepbook_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No addresses found."))
        .stderr(predicate::str::contains("ignored"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    seed(flag_dir.path());

    cepbook_cmd(env_dir.path())
        .args(["list", "--data-dir"])
        .arg(flag_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Curitiba"));
}
