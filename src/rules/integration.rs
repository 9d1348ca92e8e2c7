#![forbid(unsafe_code)]

//! Integration: external calls need error handling and timeouts

use super::text;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Principle, Severity};

/// Substrings that mark a subprocess invocation
const SUBPROCESS_MARKERS: &[&str] = &[
    "Deno.Command",
    "exec(",
    "execSync(",
    "spawn(",
    "spawnSync(",
    "exec.Command(",
    "Command::new(",
];

const SUBPROCESS_WINDOW: usize = 10;
const FETCH_WINDOW: usize = 5;

/// Flags calls to external tools and services that can fail or hang silently
#[derive(Debug, Default)]
pub struct IntegrationRule;

impl IntegrationRule {
    pub fn new() -> Self {
        Self
    }

    fn is_subprocess_call(line: &str) -> bool {
        SUBPROCESS_MARKERS.iter().any(|marker| line.contains(marker))
    }

    fn check_subprocess(&self, ctx: &ExecutionContext, window: &str, line_no: u32) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !window.contains("try") && !window.contains("catch") {
            violations.push(Violation::new(
                ctx,
                Principle::Integration,
                Severity::Error,
                line_no,
                "Subprocess call without try/catch error handling",
                "Wrap external calls in error handling with graceful degradation",
            ));
        }

        if !ctx.is_prototype() && !window.to_lowercase().contains("timeout") {
            violations.push(Violation::new(
                ctx,
                Principle::Integration,
                Severity::Warning,
                line_no,
                "Subprocess call without timeout",
                "Add a timeout to avoid hanging on unresponsive external tools",
            ));
        }

        violations
    }
}

impl Rule for IntegrationRule {
    fn principle(&self) -> Principle {
        Principle::Integration
    }

    fn description(&self) -> &str {
        "External tools and services are called with error handling and timeouts"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        let lines = text::lines(ctx.content);
        let mut violations = Vec::new();

        for (index, &line) in lines.iter().enumerate() {
            let line_no = text::line_number(index);

            if Self::is_subprocess_call(line) {
                let window = text::window(&lines, index, SUBPROCESS_WINDOW);
                violations.extend(self.check_subprocess(ctx, &window, line_no));
            }

            if line.contains("fetch(") && !line.contains("//") {
                let window = text::window(&lines, index, FETCH_WINDOW);
                if !window.contains("catch") {
                    violations.push(Violation::new(
                        ctx,
                        Principle::Integration,
                        Severity::Warning,
                        line_no,
                        "Network call without error handling",
                        "Handle network errors gracefully (timeout, retry, fallback)",
                    ));
                }
            }
        }

        violations
    }
}
