#![forbid(unsafe_code)]

//! Core Rule trait and related types for defining and executing rules

use crate::types::{Principle, Severity};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Execution context provided to rules when they execute
///
/// This contains all the information a rule needs to analyze a file.
#[derive(Debug)]
pub struct ExecutionContext<'a> {
    /// Path to the file being analyzed, as given by the caller
    pub file_path: &'a Path,

    /// Full text content of the file
    pub content: &'a str,
}

impl ExecutionContext<'_> {
    /// Returns the file path as text for substring-based exemptions
    pub fn path_str(&self) -> Cow<'_, str> {
        self.file_path.to_string_lossy()
    }

    /// Returns true if the file path contains `needle` anywhere
    pub fn path_contains(&self, needle: &str) -> bool {
        self.path_str().contains(needle)
    }

    /// Returns true for paths flagged as throwaway prototype code
    pub fn is_prototype(&self) -> bool {
        self.path_contains("prototype")
    }
}

/// A single finding produced by a rule against one file and line
///
/// Violations are created once and only ever appended to the run's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Principle the violated rule enforces
    pub principle: Principle,

    /// Whether this finding blocks acceptance
    pub severity: Severity,

    /// File path where the violation was found
    pub file: PathBuf,

    /// Line number of the triggering token (1-indexed)
    pub line: u32,

    /// Human-readable description of what was found
    pub message: String,

    /// Short remediation hint
    pub suggestion: String,
}

impl Violation {
    /// Creates a violation for the file in `ctx`
    pub fn new(
        ctx: &ExecutionContext,
        principle: Principle,
        severity: Severity,
        line: u32,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            principle,
            severity,
            file: ctx.file_path.to_path_buf(),
            line,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Trait that all rules must implement
///
/// Rules are pure: the same path and content always yield the same violations,
/// and no state is carried between files. The trait is `Send + Sync` to enable
/// parallel execution across files.
pub trait Rule: Send + Sync {
    /// Returns the principle this rule enforces
    fn principle(&self) -> Principle;

    /// Returns a human-readable description of what this rule checks
    fn description(&self) -> &str;

    /// Executes the rule against the provided context
    ///
    /// Returns a vector of all violations found in the file.
    /// Returns an empty vector if no violations are found.
    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation>;
}
