use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(db_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("doc-reminders").unwrap();
    let url = format!("sqlite://{}", db_dir.path().join("cli.db").display());
    cmd.env("DATABASE_URL", url).env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("doc-reminders").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder log API for review documents"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("doc-reminders").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_user_add_then_list() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["user", "add", "testuser1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"testuser1\""));
    cli(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("testuser1"));
}

#[test]
fn test_duplicate_user_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["user", "add", "testuser1"]).assert().success();
    cli(&dir)
        .args(["user", "add", "testuser1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}

#[test]
fn test_blank_document_title_rejected() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["document", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_document_add_then_list() {
    let dir = TempDir::new().unwrap();
    cli(&dir).args(["document", "add", "Test Document 1"]).assert().success();
    cli(&dir)
        .args(["document", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Document 1"));
}

#[test]
fn test_reminders_list_empty() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["reminders", "list", "--document-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_unknown_scheme_rejected() {
    let mut cmd = Command::cargo_bin("doc-reminders").unwrap();
    cmd.env("DATABASE_URL", "mysql://localhost/reminders")
        .args(["user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported database URL scheme"));
}

#[test]
fn test_database_url_env_binding() {
    let mut cmd = Command::cargo_bin("doc-reminders").unwrap();
    cmd.env_remove("DATABASE_URL")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[env: DATABASE_URL"));
}
