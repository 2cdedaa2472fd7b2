use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use testchars::corpus::profile::{ascii_name, long_name, ASCII_NAME_PREFIX, ASCII_NAME_SUFFIX};
use testchars::{ascii_range, generate, GenerateOptions, Profile};

fn listing(dir: &Path) -> BTreeSet<OsString> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect()
}

// Fresh target: directory is created with its parents and holds the
// `+Plus File.txt` fixture as an empty file.
#[test]
fn missing_target_is_created() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let target = tmp.path().join("nested").join("testchars");

    generate(&target, &Profile::Full.corpus(), GenerateOptions::default())?;

    assert!(target.is_dir());
    let plus = target.join("+Plus File.txt");
    assert_eq!(fs::metadata(&plus)?.len(), 0);
    Ok(())
}

// Running twice leaves the same set of files, truncates fixtures and keeps
// unrelated files.
#[test]
fn second_run_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let corpus = Profile::Full.corpus();

    generate(tmp.path(), &corpus, GenerateOptions::default())?;
    let first = listing(tmp.path());

    let unrelated = tmp.path().join("keep.me");
    fs::write(&unrelated, b"payload")?;
    fs::write(tmp.path().join(":Colon File.txt"), b"scribbled on")?;

    generate(tmp.path(), &corpus, GenerateOptions::default())?;

    let mut second = listing(tmp.path());
    assert!(second.remove(&OsString::from("keep.me")));
    assert_eq!(first, second);
    assert_eq!(fs::read(&unrelated)?, b"payload");
    assert_eq!(fs::metadata(tmp.path().join(":Colon File.txt"))?.len(), 0);
    Ok(())
}

#[test]
fn ascii_fixture_name_on_disk() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    generate(tmp.path(), &Profile::Full.corpus(), GenerateOptions::default())?;

    let name = ascii_name();
    assert!(tmp.path().join(&name).is_file());
    let middle = name
        .strip_prefix(ASCII_NAME_PREFIX)
        .and_then(|s| s.strip_suffix(ASCII_NAME_SUFFIX))
        .unwrap();
    assert_eq!(middle, ascii_range());
    assert!(!name.contains('/'));
    Ok(())
}

#[test]
fn long_fixture_name_on_disk() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    generate(tmp.path(), &Profile::Basic.corpus(), GenerateOptions { parallel: true })?;

    let expected = long_name();
    assert_eq!(expected.len(), 16 + 100 + 15);
    let found = listing(tmp.path())
        .into_iter()
        .find(|n| n.to_string_lossy().starts_with("Super Long File "))
        .expect("long fixture present");
    assert_eq!(found, OsString::from(expected));
    Ok(())
}

#[cfg(unix)]
#[test]
fn control_character_names_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    generate(tmp.path(), &Profile::Full.corpus(), GenerateOptions::default())?;

    let names = listing(tmp.path());
    assert!(names.contains(&OsString::from("\r File.txt")));
    assert!(names.contains(&OsString::from("CR File 2\r.txt")));
    assert!(names.contains(&OsString::from("Combining    |\u{0423}\u{0306}|...")));
    Ok(())
}
