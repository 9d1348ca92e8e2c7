#![forbid(unsafe_code)]

//! Execution engine for running rules across files
//!
//! Files are analyzed in parallel with rayon, but results are collected
//! through an indexed parallel iterator, so the run's violations come back in
//! the same order a sequential pass over `files` would produce.

use crate::rules::{ExecutionContext, RuleRegistry, Violation};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of executing all rules against all files
///
/// `violations` is the run-scoped accumulator handed to the reporter.
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// All violations found across all files and rules, in processing order
    pub violations: Vec<Violation>,
    /// Number of files read and checked
    pub files_checked: usize,
    /// Number of files skipped because they could not be read
    pub files_skipped: usize,
    /// Number of rules executed per file
    pub rules_executed: usize,
}

/// Execution engine that runs every registered rule against each file
pub struct ExecutionEngine {
    registry: RuleRegistry,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine with the provided rule registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Execute all rules against the discovered files
    ///
    /// Files that cannot be read are logged in input order once the parallel
    /// pass is done, then skipped.
    pub fn execute(&self, files: Vec<PathBuf>) -> ExecutionResult {
        let per_file: Vec<io::Result<Vec<Violation>>> =
            files.par_iter().map(|file| self.execute_file(file)).collect();

        let mut result = ExecutionResult {
            rules_executed: self.registry.len(),
            ..ExecutionResult::default()
        };

        for (file, outcome) in files.iter().zip(per_file) {
            match outcome {
                Ok(violations) => {
                    result.files_checked += 1;
                    result.violations.extend(violations);
                }
                Err(e) => {
                    eprintln!("Warning: Failed to read file {}: {}", file.display(), e);
                    result.files_skipped += 1;
                }
            }
        }

        result
    }

    /// Read one file and run every rule against it
    ///
    /// Invalid UTF-8 is decoded lossily so the rest of the file is still
    /// checked; only I/O failures are returned.
    pub fn execute_file(&self, path: &Path) -> io::Result<Vec<Violation>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.check_content(path, &content))
    }

    /// Run every rule, in registration order, against already-loaded content
    pub fn check_content(&self, path: &Path, content: &str) -> Vec<Violation> {
        let ctx = ExecutionContext {
            file_path: path,
            content,
        };

        self.registry
            .iter_rules()
            .flat_map(|rule| rule.execute(&ctx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Principle;
    use tempfile::TempDir;

    fn engine() -> ExecutionEngine {
        ExecutionEngine::new(RuleRegistry::builtin().unwrap())
    }

    #[test]
    fn test_clean_content_has_no_violations() {
        let violations = engine().check_content(
            Path::new("src/sum.ts"),
            "export function sum(xs: number[]) {\n  return xs.reduce((a, b) => a + b, 0);\n}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_rule_order_within_file() {
        // Automation first in the file, Configurability first in the registry
        let content = "// TODO: tidy\nconst dir = \"/srv/data/app\";\n";
        let violations = engine().check_content(Path::new("src/a.ts"), content);
        let principles: Vec<_> = violations.iter().map(|v| v.principle).collect();
        assert_eq!(
            principles,
            vec![Principle::Configurability, Principle::Automation]
        );
    }

    #[test]
    fn test_execute_preserves_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut files = Vec::new();
        for i in 0..20 {
            let path = temp_dir.path().join(format!("f{:02}.ts", i));
            fs::write(&path, "// TODO: later\n").unwrap();
            files.push(path);
        }

        let result = engine().execute(files.clone());
        assert_eq!(result.files_checked, 20);
        assert_eq!(result.rules_executed, 5);
        let reported: Vec<_> = result.violations.iter().map(|v| v.file.clone()).collect();
        assert_eq!(reported, files);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.ts");
        fs::write(&good, "// TODO: later\n").unwrap();
        let missing = temp_dir.path().join("missing.ts");

        let result = engine().execute(vec![missing, good]);
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.files_skipped, 1);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_still_checked() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legacy.js");
        let mut bytes = b"// Copyright \xa9 Legacy Corp\n".to_vec();
        bytes.extend_from_slice(b"const dir = \"/usr/local/data\";\n");
        fs::write(&path, bytes).unwrap();

        let violations = engine().execute_file(&path).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].principle, Principle::Configurability);
        assert_eq!(violations[0].line, 2);
    }

    #[test]
    fn test_execute_file_reports_io_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = engine().execute_file(&temp_dir.path().join("missing.ts"));
        assert!(result.is_err());
    }

    #[test]
    fn test_check_content_is_deterministic() {
        let content = "const url = \"https://api.service.io\";\nswitch (x) {\n}\n";
        let engine = engine();
        let first = engine.check_content(Path::new("src/a.ts"), content);
        let second = engine.check_content(Path::new("src/a.ts"), content);
        assert_eq!(first, second);
    }
}
