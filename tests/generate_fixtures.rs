use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

use testchars::Profile;

#[test]
fn generate_creates_every_full_name() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let target = tmp.child("testchars");

    let mut cmd = cargo_bin_cmd!("testchars");
    cmd.arg("generate")
        .arg("--dir")
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 11 files under"));

    target.assert(predicate::path::is_dir());
    for name in Profile::Full.corpus().names() {
        let md = fs::metadata(target.path().join(name)).expect("fixture exists");
        assert!(md.is_file());
        assert_eq!(md.len(), 0, "{:?} is not empty", name);
    }
    target
        .child("+Plus File.txt")
        .assert(predicate::path::is_file());
}

#[test]
fn basic_profile_with_parallel_pool() {
    let tmp = assert_fs::TempDir::new().unwrap();

    cargo_bin_cmd!("testchars")
        .args(["generate", "--profile", "basic", "--parallel", "--dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 5 files"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 5);
    tmp.child(";Semi Colon File.txt")
        .assert(predicate::path::missing());
}

#[test]
fn file_as_target_fails_with_diagnostic() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let squatter = tmp.child("occupied");
    squatter.write_str("not a dir").unwrap();

    cargo_bin_cmd!("testchars")
        .arg("generate")
        .arg("--dir")
        .arg(squatter.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"))
        .stderr(predicate::str::contains("occupied"));

    squatter.assert("not a dir");
}

#[test]
fn list_prints_each_entry_and_touches_nothing() {
    let out = cargo_bin_cmd!("testchars")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CR File 2\\r.txt"))
        .stdout(predicate::str::contains("shell-meta"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 11);
}

#[test]
fn settings_file_supplies_dir_and_extra_names() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let target = tmp.child("from-settings");
    let config = tmp.child("testchars.toml");
    config
        .write_str(&format!(
            "dir = {:?}\nprofile = \"basic\"\nextra_names = [\"-rf\", \"$HOME\"]\n",
            target.path().to_str().unwrap()
        ))
        .unwrap();

    cargo_bin_cmd!("testchars")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 7 files"));

    target.child("-rf").assert(predicate::path::is_file());
    target.child("$HOME").assert(predicate::path::is_file());
}

#[test]
fn bad_settings_file_exits_non_zero() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let config = tmp.child("bad.toml");
    config.write_str("no_such_key = 1\n").unwrap();

    cargo_bin_cmd!("testchars")
        .arg("--config")
        .arg(config.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings file"));
}
