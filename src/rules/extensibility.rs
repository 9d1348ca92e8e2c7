#![forbid(unsafe_code)]

//! Extensibility: hardcoded provider names and oversized switches

use super::text;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Principle, Severity};

/// Provider identifiers that should go through an abstraction
const PROVIDER_NAMES: &[&str] = &["claude", "gemini", "openai", "anthropic"];

/// Lines scanned for case labels, starting at the switch line
const SWITCH_WINDOW: usize = 50;

/// Switches with more case labels than this are flagged
const MAX_SWITCH_CASES: usize = 5;

/// Flags code that has to be edited to add a new variant
#[derive(Debug, Default)]
pub struct ExtensibilityRule;

impl ExtensibilityRule {
    pub fn new() -> Self {
        Self
    }

    fn check_provider_names(&self, ctx: &ExecutionContext, line: &str, line_no: u32) -> Vec<Violation> {
        if line.contains("//") {
            return Vec::new();
        }

        let lower = line.to_lowercase();
        PROVIDER_NAMES
            .iter()
            .filter(|provider| {
                lower.contains(&format!("\"{}\"", provider)) || lower.contains(&format!("'{}'", provider))
            })
            .map(|provider| {
                Violation::new(
                    ctx,
                    Principle::Extensibility,
                    Severity::Warning,
                    line_no,
                    format!("Hardcoded provider name: '{}'", provider),
                    "Use a provider abstraction instead of comparing names",
                )
            })
            .collect()
    }

    /// Fixed lookahead window, not block-scoped: cases of a following switch
    /// inside the window count too.
    fn count_cases(lines: &[&str], start: usize) -> usize {
        lines
            .iter()
            .skip(start)
            .take(SWITCH_WINDOW)
            .filter(|line| line.contains("case "))
            .count()
    }
}

impl Rule for ExtensibilityRule {
    fn principle(&self) -> Principle {
        Principle::Extensibility
    }

    fn description(&self) -> &str {
        "New variants are added without editing literal comparisons"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        // Both checks exempt prototype code
        if ctx.is_prototype() {
            return Vec::new();
        }

        let lines = text::lines(ctx.content);
        let mut violations = Vec::new();

        for (index, &line) in lines.iter().enumerate() {
            let line_no = text::line_number(index);

            violations.extend(self.check_provider_names(ctx, line, line_no));

            if line.contains("switch") {
                let cases = Self::count_cases(&lines, index);
                if cases > MAX_SWITCH_CASES {
                    violations.push(Violation::new(
                        ctx,
                        Principle::Extensibility,
                        Severity::Warning,
                        line_no,
                        format!("Large switch statement with {} cases", cases),
                        "Consider a strategy pattern or a map of handlers",
                    ));
                }
            }
        }

        violations
    }
}
