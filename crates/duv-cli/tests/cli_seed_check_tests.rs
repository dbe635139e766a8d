//! CLI seed check integration tests
//!
//! Runs the built `duv` binary against the seed fixtures of duv-store.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use duv_store::seed::compute_seed_digest;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../duv-store/tests/fixtures")
        .join(name)
}

fn duv(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_duv"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_seed_check_valid_file() {
    // GIVEN the full seed fixture
    let path = fixture("seed_full.json");
    let digest = compute_seed_digest(&fs::read(&path).unwrap());

    // WHEN checking it
    let output = duv(&["seed", "check", path.to_str().unwrap()]);

    // THEN it succeeds and reports counts and digest
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 people, 2 ships, 2 declarations"), "{}", stdout);
    assert!(stdout.contains(&digest));
}

#[test]
fn test_seed_check_invalid_file_exits_1() {
    let path = fixture("seed_conflicting_ship.json");

    let output = duv(&["seed", "check", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "{}", stderr);
    assert!(stderr.contains("conflicting records"), "{}", stderr);
}

#[test]
fn test_seed_check_directory_in_name_order() {
    // GIVEN a directory with two valid seeds and one non-json file
    let temp_dir = TempDir::new().unwrap();
    fs::copy(fixture("seed_minimal.json"), temp_dir.path().join("b.json")).unwrap();
    fs::copy(fixture("seed_full.json"), temp_dir.path().join("a.json")).unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

    // WHEN checking the directory
    let output = duv(&["seed", "check", temp_dir.path().to_str().unwrap()]);

    // THEN both seeds are checked, a.json first
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find("a.json").unwrap();
    let b = stdout.find("b.json").unwrap();
    assert!(a < b);
    assert_eq!(stdout.matches("✓ Valid").count(), 2);
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn test_seed_check_empty_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = duv(&["seed", "check", temp_dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no .json seed files"));
}

#[test]
fn test_seed_check_missing_file_fails() {
    let output = duv(&["seed", "check", "/nonexistent/seed.json"]);
    assert_eq!(output.status.code(), Some(1));
}
