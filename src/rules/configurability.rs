#![forbid(unsafe_code)]

//! Configurability: no hardcoded paths, URLs, secrets or magic numbers

use super::text::{self, compile, compile_ci};
use crate::error::RuleError;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Principle, Severity};
use regex::Regex;

/// Quoted literals shorter than this (quotes included) are unlikely to be real paths
const MIN_PATH_LITERAL_LEN: usize = 6;

/// Numbers up to this value are treated as ordinary
const MAGIC_NUMBER_THRESHOLD: u64 = 100;

const SECRET_SUGGESTION: &str =
    "Read the value from an environment variable (std::env::var) instead of hardcoding it";

/// Flags values that belong in configuration rather than in code
pub struct ConfigurabilityRule {
    absolute_path: Regex,
    url: Regex,
    secrets: Vec<Regex>,
    magic_number: Regex,
}

impl ConfigurabilityRule {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            absolute_path: compile(r#"["'](/[A-Za-z0-9_./-]+)["']"#)?,
            url: compile(r#"https?://[^\s"']+"#)?,
            secrets: vec![
                compile_ci(r#"(?:api[-_]?key|\bkey)\s*=\s*["'][^"']+["']"#)?,
                compile_ci(r#"token\s*=\s*["'][^"']+["']"#)?,
                compile_ci(r#"secret\s*=\s*["'][^"']+["']"#)?,
            ],
            magic_number: compile(r"\d{3,}")?,
        })
    }

    fn check_absolute_paths(&self, ctx: &ExecutionContext, line: &str, line_no: u32) -> Vec<Violation> {
        self.absolute_path
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|literal| {
                !literal.contains("://")
                    && !literal.contains("\\x")
                    && literal.len() >= MIN_PATH_LITERAL_LEN
            })
            .map(|literal| {
                Violation::new(
                    ctx,
                    Principle::Configurability,
                    Severity::Error,
                    line_no,
                    format!("Hardcoded absolute path: {}", literal),
                    "Load the path from configuration with an environment variable fallback, or use a relative path",
                )
            })
            .collect()
    }

    fn check_magic_numbers(&self, ctx: &ExecutionContext, line: &str, line_no: u32) -> Option<Violation> {
        if text::has_comment_marker(line) {
            return None;
        }

        let numbers: Vec<&str> = self.magic_number.find_iter(line).map(|m| m.as_str()).collect();
        // Digit runs too long for u64 are certainly above the threshold
        let any_magic = numbers
            .iter()
            .any(|n| n.parse::<u64>().map_or(true, |v| v > MAGIC_NUMBER_THRESHOLD));

        any_magic.then(|| {
            Violation::new(
                ctx,
                Principle::Configurability,
                Severity::Warning,
                line_no,
                format!("Possible magic number: {}", numbers.join(", ")),
                "Extract to a named constant with an explanation",
            )
        })
    }
}

fn is_markdown(ctx: &ExecutionContext) -> bool {
    ctx.file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

impl Rule for ConfigurabilityRule {
    fn principle(&self) -> Principle {
        Principle::Configurability
    }

    fn description(&self) -> &str {
        "No hardcoded paths, URLs, secrets or magic numbers"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        let path_exempt = ctx.path_contains("test") || ctx.is_prototype();
        let markdown = is_markdown(ctx);
        let mut violations = Vec::new();

        for (index, line) in text::lines(ctx.content).into_iter().enumerate() {
            let line_no = text::line_number(index);

            if !path_exempt {
                violations.extend(self.check_absolute_paths(ctx, line, line_no));
            }

            if !markdown && !line.contains("example.com") && self.url.is_match(line) {
                violations.push(Violation::new(
                    ctx,
                    Principle::Configurability,
                    Severity::Warning,
                    line_no,
                    format!("Hardcoded URL in code: {}", line.trim()),
                    "Move URLs to the configuration file",
                ));
            }

            for pattern in &self.secrets {
                if pattern.is_match(line) {
                    violations.push(Violation::new(
                        ctx,
                        Principle::Configurability,
                        Severity::Error,
                        line_no,
                        "Potential hardcoded API key or secret",
                        SECRET_SUGGESTION,
                    ));
                }
            }

            violations.extend(self.check_magic_numbers(ctx, line, line_no));
        }

        violations
    }
}
