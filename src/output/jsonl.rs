#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All violation records, grouped by principle as in the human report
//! 2. One summary record

use crate::engine::aggregator::AggregationResult;
use crate::types::{Principle, Severity};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the aggregation result as JSONL
    pub fn format(&self, root: &Path, result: &AggregationResult) -> String {
        let mut output = String::new();

        for group in &result.groups {
            for violation in &group.violations {
                let record = ViolationRecord {
                    record_type: "violation",
                    principle: violation.principle,
                    severity: violation.severity,
                    file: violation.file.clone(),
                    line: violation.line,
                    message: violation.message.clone(),
                    suggestion: violation.suggestion.clone(),
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let summary = SummaryRecord {
            record_type: "summary",
            root: root.to_path_buf(),
            errors: result.error_count as u64,
            warnings: result.warning_count as u64,
            total: result.total() as u64,
            outcome: result.outcome().as_str(),
            passed: result.passed(),
        };
        if let Ok(json) = serde_json::to_string(&summary) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, root: &Path, result: &AggregationResult) {
        print!("{}", self.format(root, result));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Violation record for JSONL output
#[derive(Debug, Serialize)]
struct ViolationRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    principle: Principle,
    severity: Severity,
    file: PathBuf,
    line: u32,
    message: String,
    suggestion: String,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    root: PathBuf,
    errors: u64,
    warnings: u64,
    total: u64,
    outcome: &'static str,
    passed: bool,
}
