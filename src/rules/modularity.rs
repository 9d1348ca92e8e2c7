#![forbid(unsafe_code)]

//! Modularity: long functions and wide grouped imports

use super::text::{self, compile};
use crate::error::RuleError;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Principle, Severity};
use regex::Regex;

/// Functions longer than this many lines are flagged
const MAX_FUNCTION_LINES: u32 = 100;

/// Grouped imports with more named items than this are flagged
const MAX_GROUPED_IMPORTS: usize = 10;

/// Function being tracked by brace depth
struct OpenFunction<'a> {
    name: &'a str,
    start_line: u32,
    depth: i64,
}

/// Flags functions that do too much and modules that pull in too much
pub struct ModularityRule {
    function_def: Regex,
    grouped_imports: Vec<Regex>,
}

impl ModularityRule {
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            function_def: compile(r"\b(?:function|func)\s+(\w+)")?,
            grouped_imports: vec![
                compile(r"import\s+\{([^}]+)\}")?,
                compile(r"use\s+[\w:]+::\{([^}]+)\}")?,
            ],
        })
    }

    /// Naive brace counting: one function is tracked at a time, so a nested
    /// definition is folded into its enclosing function.
    fn check_function_lengths(&self, ctx: &ExecutionContext, lines: &[&str]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut open: Option<OpenFunction> = None;

        for (index, &line) in lines.iter().enumerate() {
            let line_no = text::line_number(index);

            if open.is_none()
                && let Some(caps) = self.function_def.captures(line)
                && let Some(name) = caps.get(1)
            {
                open = Some(OpenFunction {
                    name: name.as_str(),
                    start_line: line_no,
                    depth: 0,
                });
            }

            let Some(function) = open.as_mut() else {
                continue;
            };

            function.depth += line.matches('{').count() as i64;
            function.depth -= line.matches('}').count() as i64;

            if function.depth == 0 && line.contains('}') {
                let length = line_no - function.start_line + 1;
                if length > MAX_FUNCTION_LINES {
                    violations.push(Violation::new(
                        ctx,
                        Principle::Modularity,
                        Severity::Warning,
                        function.start_line,
                        format!("Function '{}' is {} lines long", function.name, length),
                        "Break into smaller, single-purpose functions",
                    ));
                }
                open = None;
            }
        }

        violations
    }

    fn count_grouped_imports(&self, line: &str) -> Option<usize> {
        self.grouped_imports.iter().find_map(|pattern| {
            pattern.captures(line).and_then(|caps| caps.get(1)).map(|items| {
                items
                    .as_str()
                    .split(',')
                    .filter(|item| !item.trim().is_empty())
                    .count()
            })
        })
    }
}

impl Rule for ModularityRule {
    fn principle(&self) -> Principle {
        Principle::Modularity
    }

    fn description(&self) -> &str {
        "Functions stay short and modules import from few places"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        let lines = text::lines(ctx.content);
        let mut violations = self.check_function_lengths(ctx, &lines);

        if ctx.is_prototype() {
            return violations;
        }

        for (index, line) in lines.iter().enumerate() {
            if let Some(count) = self.count_grouped_imports(line)
                && count > MAX_GROUPED_IMPORTS
            {
                violations.push(Violation::new(
                    ctx,
                    Principle::Modularity,
                    Severity::Warning,
                    text::line_number(index),
                    format!("Importing {} items from single module", count),
                    "Consider whether this file has too many responsibilities",
                ));
            }
        }

        violations
    }
}
