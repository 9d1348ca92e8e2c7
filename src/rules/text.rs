//! Line and lookahead-window helpers shared by the builtin rules

use crate::error::RuleError;
use regex::{Regex, RegexBuilder};

/// Splits content on `\n`, keeping a trailing empty line if the content ends
/// with a newline so line numbers stay stable.
pub(crate) fn lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Joins `len` lines starting at `start` (inclusive), clamped to the end.
pub(crate) fn window(lines: &[&str], start: usize, len: usize) -> String {
    let end = start.saturating_add(len).min(lines.len());
    lines[start.min(end)..end].join("\n")
}

/// Converts a 0-based index into a 1-based line number
pub(crate) fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Returns true when the line carries a `//` or `*` comment marker
pub(crate) fn has_comment_marker(line: &str) -> bool {
    line.contains("//") || line.contains('*')
}

/// Compiles a builtin pattern, mapping failures into `RuleError`
pub(crate) fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern)
        .map_err(|e| RuleError::InvalidRegex(format!("Failed to compile '{}': {}", pattern, e)))
}

/// Compiles a case-insensitive builtin pattern
pub(crate) fn compile_ci(pattern: &str) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| RuleError::InvalidRegex(format!("Failed to compile '{}': {}", pattern, e)))
}
