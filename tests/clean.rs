use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("scour").expect("binary exists")
}

#[test]
fn clean_removes_trash_and_spares_the_rest() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/.DS_Store").write_str("0123456789").unwrap();
    temp.child("a/.git/build").write_str("not trash here").unwrap();
    temp.child("b/node_irrelevant.txt").write_str(&"x".repeat(50)).unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path()).arg(temp.path());

    cmd.assert().success().stdout(predicate::str::contains("Removed 1 item(s)"));

    temp.child("a/.DS_Store").assert(predicates::path::missing());
    temp.child("a/.git/build").assert(predicates::path::exists());
    temp.child("b/node_irrelevant.txt").assert(predicates::path::exists());
}

#[test]
fn clean_accepts_a_single_file_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("Thumbs.db");
    file.write_str("1234").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path()).arg(file.path());

    cmd.assert().success().stdout(predicate::str::contains("Removed 1 item(s)"));
    file.assert(predicates::path::missing());
}

#[test]
fn clean_sweeps_multiple_paths_in_one_run() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("first/__pycache__/a.pyc").write_str("cache").unwrap();
    temp.child("second/old.bak").write_str("backup").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .arg(temp.child("first").path())
        .arg(temp.child("second").path());

    cmd.assert().success().stdout(predicate::str::contains("Removed 2 item(s)"));

    temp.child("first/__pycache__").assert(predicates::path::missing());
    temp.child("second/old.bak").assert(predicates::path::missing());
}

#[test]
fn no_arguments_prints_help() {
    let mut cmd = command();
    cmd.assert().success().stdout(predicate::str::contains("Usage"));
}

#[test]
fn completions_emit_a_script() {
    let mut cmd = command();
    cmd.arg("--completions").arg("bash");

    cmd.assert().success().stdout(predicate::str::contains("scour"));
}

#[test]
fn unresolvable_path_is_a_hard_error() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path()).arg(temp.path().join("no/such/root"));

    cmd.assert().failure().stderr(predicate::str::contains("Error:"));
}
