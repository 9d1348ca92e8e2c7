//! Integration tests for the check command
//!
//! NOTE: These tests change the current directory and use the serial_test attribute
//! to ensure they run sequentially and don't interfere with each other.

mod common;

use common::write_file;
use cornerstones::cli::{CheckOptions, run_check, scan};
use cornerstones::config::Config;
use cornerstones::engine::Outcome;
use cornerstones::types::Principle;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Run `f` with the current directory set to a fresh temporary directory
fn with_temp_dir<F>(f: F)
where
    F: FnOnce(&Path),
{
    let temp_dir = TempDir::new().unwrap();
    let previous_dir = std::env::current_dir().unwrap();

    std::env::set_current_dir(temp_dir.path()).unwrap();
    f(temp_dir.path());
    std::env::set_current_dir(&previous_dir).unwrap();
}

/// A small project with one error and two warnings
fn setup_project(root: &Path) {
    write_file(root, "src/clean.ts", "export const answer = 42;\n");
    write_file(root, "src/paths.ts", "const dir = \"/usr/local/data\";\n");
    write_file(root, "src/work.ts", "// TODO: tidy\n// run migrations manually\n");
}

#[test]
#[serial]
fn test_check_fails_on_errors() {
    with_temp_dir(|root| {
        setup_project(root);
        assert_eq!(run_check(&CheckOptions::for_path(".")), 1);
    });
}

#[test]
#[serial]
fn test_check_discovers_config_in_current_dir() {
    with_temp_dir(|root| {
        setup_project(root);
        write_file(root, "cornerstones.toml", "[rules]\nconfigurability = false\n");
        assert_eq!(run_check(&CheckOptions::for_path(".")), 0);
    });
}

#[test]
#[serial]
fn test_check_invalid_config_fails() {
    with_temp_dir(|root| {
        write_file(root, "src/clean.ts", "export const answer = 42;\n");
        write_file(root, "cornerstones.toml", "[cornerstones]\nversion = \"2\"\n");
        assert_eq!(run_check(&CheckOptions::for_path(".")), 1);
    });
}

#[test]
#[serial]
fn test_check_explicit_config_overrides_discovery() {
    with_temp_dir(|root| {
        setup_project(root);
        write_file(root, "cornerstones.toml", "[rules]\nconfigurability = false\n");
        write_file(root, "strict.toml", "[rules]\nautomation = true\n");

        let options = CheckOptions {
            config: Some(PathBuf::from("strict.toml")),
            ..CheckOptions::for_path(".")
        };
        assert_eq!(run_check(&options), 1);
    });
}

#[test]
#[serial]
fn test_check_missing_explicit_config_fails() {
    with_temp_dir(|root| {
        write_file(root, "src/clean.ts", "export const answer = 42;\n");
        let options = CheckOptions {
            config: Some(PathBuf::from("absent.toml")),
            ..CheckOptions::for_path(".")
        };
        assert_eq!(run_check(&options), 1);
    });
}

#[test]
fn test_check_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let options = CheckOptions::for_path(temp_dir.path().join("missing"));
    assert_eq!(run_check(&options), 1);
}

#[test]
fn test_scan_groups_by_principle() {
    let temp_dir = TempDir::new().unwrap();
    setup_project(temp_dir.path());

    let result = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    assert_eq!(result.error_count, 1);
    assert_eq!(result.warning_count, 2);
    assert_eq!(result.outcome(), Outcome::Failed);

    let principles: Vec<Principle> = result.groups.iter().map(|g| g.principle).collect();
    assert_eq!(principles, vec![Principle::Configurability, Principle::Automation]);
    assert_eq!(result.groups[1].violations.len(), 2);
}

#[test]
fn test_scan_warnings_only_passes() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "main.go", "// TODO: split this file\n");

    let result = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    assert_eq!(result.outcome(), Outcome::WarningsOnly);
    assert_eq!(result.outcome().exit_code(), 0);
}

#[test]
fn test_scan_empty_tree_is_clean() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "dist/bundle.js", "const dir = \"/usr/local/data\";\n");

    let result = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    assert_eq!(result.total(), 0);
    assert_eq!(result.outcome(), Outcome::Clean);
}

#[test]
fn test_scan_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    setup_project(temp_dir.path());

    let first = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    let second = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    assert_eq!(first, second);
}

#[test]
fn test_scan_checks_files_with_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = b"// Copyright \xa9 1998 Legacy Corp\n".to_vec();
    bytes.extend_from_slice(b"const dir = \"/usr/local/data\";\n");
    std::fs::write(temp_dir.path().join("legacy.js"), bytes).unwrap();

    let result = assert_ok!(scan(temp_dir.path(), &Config::default(), false));
    assert_eq!(result.error_count, 1);
    assert_eq!(result.outcome(), Outcome::Failed);
}
