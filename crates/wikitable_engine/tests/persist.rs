use std::fs;

use wikitable_engine::{OutputDir, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("tables").join("nested");
    assert!(!new_dir.exists());
    let out = OutputDir::create(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(out.path(), new_dir.as_path());
}

#[test]
fn write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let out = OutputDir::create(temp.path()).unwrap();

    let first = out.write("Quakes-1.csv", b"a,b\n").unwrap();
    assert_eq!(first.file_name().unwrap(), "Quakes-1.csv");
    assert_eq!(fs::read_to_string(&first).unwrap(), "a,b\n");

    let second = out.write("Quakes-1.csv", b"c\n").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "c\n");
}

#[test]
fn file_in_place_of_dir_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = OutputDir::create(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::OutputDir { .. }));
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn no_partial_file_when_directory_vanishes() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("gone");
    let out = OutputDir::create(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    let err = out.write("t-1.csv", b"data").unwrap_err();
    assert!(matches!(err, PersistError::Write { .. }));
    assert!(!dir.join("t-1.csv").exists());
}
