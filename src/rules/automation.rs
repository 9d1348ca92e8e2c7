#![forbid(unsafe_code)]

//! Automation: untracked TODOs and documented manual steps

use super::text;
use crate::rules::{ExecutionContext, Rule, Violation};
use crate::types::{Principle, Severity};

/// Flags work that depends on someone remembering to do it
#[derive(Debug, Default)]
pub struct AutomationRule;

impl AutomationRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AutomationRule {
    fn principle(&self) -> Principle {
        Principle::Automation
    }

    fn description(&self) -> &str {
        "TODOs are tracked and manual steps are automated"
    }

    fn execute(&self, ctx: &ExecutionContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, line) in text::lines(ctx.content).into_iter().enumerate() {
            let line_no = text::line_number(index);

            if line.contains("TODO") && !line.contains('#') && !line.contains("http") {
                violations.push(Violation::new(
                    ctx,
                    Principle::Automation,
                    Severity::Warning,
                    line_no,
                    "TODO without issue reference",
                    "Open an issue and reference it: // TODO(#123): ...",
                ));
            }

            // "manual" also covers "manually"
            if line.contains("manual") && text::has_comment_marker(line) {
                violations.push(Violation::new(
                    ctx,
                    Principle::Automation,
                    Severity::Warning,
                    line_no,
                    "Comment mentions manual step",
                    "Consider whether this step can be automated",
                ));
            }
        }

        violations
    }
}
