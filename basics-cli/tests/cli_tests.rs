// End-to-end tests of the `basics` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn basics() -> Command {
    let mut cmd = Command::cargo_bin("basics").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_two_lines() {
    basics()
        .assert()
        .success()
        .stdout("The number is: 10\nInside myClass\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = basics().output().unwrap();
    for _ in 0..3 {
        let again = basics().output().unwrap();
        assert!(again.status.success());
        assert_eq!(again.stdout, first.stdout);
    }
}

#[test]
fn test_logging_goes_to_stderr() {
    basics()
        .env("RUST_LOG", "basics=debug")
        .assert()
        .success()
        .stdout("The number is: 10\nInside myClass\n")
        .stderr(predicate::str::contains("derived values computed"));
}

#[test]
fn test_help_displays() {
    basics()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print a number and a greeting"));
}

#[test]
fn test_rejects_arguments() {
    basics()
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
