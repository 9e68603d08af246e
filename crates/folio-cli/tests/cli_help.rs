use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("folio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("commands"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--no-intro"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("folio")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_commands_lists_shell_commands() {
    cargo_bin_cmd!("folio")
        .arg("commands")
        .assert()
        .success()
        .stdout(predicate::str::contains("exp (projects)"))
        .stdout(predicate::str::contains("exit (quit)"))
        .stdout(predicate::str::contains("help"))
        .stdout(predicate::str::contains("pwd").not());
}

#[test]
fn test_chat_requires_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
