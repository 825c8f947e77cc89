use assert_cmd::Command;
use predicates::prelude::*;

fn dirpick() -> Command {
    Command::cargo_bin("dirpick").unwrap()
}

#[test]
fn test_help_lists_options() {
    dirpick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--select"))
        .stdout(predicate::str::contains("--files-only"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn test_version() {
    dirpick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_unknown_select_mode() {
    dirpick()
        .args(["--select", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_rejects_unknown_theme() {
    dirpick()
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}
