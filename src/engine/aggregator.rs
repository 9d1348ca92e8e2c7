#![forbid(unsafe_code)]

//! Violation aggregation and outcome decision
//!
//! Groups the run's violations by principle and counts them by severity.
//! Errors fail the run; warnings alone never do.

use crate::rules::Violation;
use crate::types::{Principle, Severity};

/// Exit code for a clean or warnings-only run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a run with errors or a fatal setup failure
pub const EXIT_FAILURE: i32 = 1;

/// Final state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No violations at all
    Clean,
    /// Only warning-severity violations
    WarningsOnly,
    /// At least one error-severity violation
    Failed,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Clean | Outcome::WarningsOnly => EXIT_SUCCESS,
            Outcome::Failed => EXIT_FAILURE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Clean => "clean",
            Outcome::WarningsOnly => "warnings",
            Outcome::Failed => "failed",
        }
    }
}

/// All violations of one principle, in the order they were produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipleGroup {
    pub principle: Principle,
    pub violations: Vec<Violation>,
}

/// Result of aggregating a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
    /// Groups for principles with at least one violation, in order of first appearance
    pub groups: Vec<PrincipleGroup>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl AggregationResult {
    pub fn total(&self) -> usize {
        self.error_count + self.warning_count
    }

    pub fn outcome(&self) -> Outcome {
        if self.error_count > 0 {
            Outcome::Failed
        } else if self.warning_count > 0 {
            Outcome::WarningsOnly
        } else {
            Outcome::Clean
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome() != Outcome::Failed
    }
}

/// Groups and counts the violations of a completed run
#[derive(Debug, Default)]
pub struct ViolationAggregator;

impl ViolationAggregator {
    pub fn new() -> Self {
        ViolationAggregator
    }

    /// Consume the run's violations; call once, after every file is processed
    pub fn aggregate(&self, violations: Vec<Violation>) -> AggregationResult {
        let mut groups: Vec<PrincipleGroup> = Vec::new();
        let mut error_count = 0;
        let mut warning_count = 0;

        for violation in violations {
            match violation.severity {
                Severity::Error => error_count += 1,
                Severity::Warning => warning_count += 1,
            }

            match groups.iter_mut().find(|g| g.principle == violation.principle) {
                Some(group) => group.violations.push(violation),
                None => groups.push(PrincipleGroup {
                    principle: violation.principle,
                    violations: vec![violation],
                }),
            }
        }

        AggregationResult {
            groups,
            error_count,
            warning_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn violation(principle: Principle, severity: Severity, file: &str, line: u32) -> Violation {
        Violation {
            principle,
            severity,
            file: PathBuf::from(file),
            line,
            message: "message".to_string(),
            suggestion: "suggestion".to_string(),
        }
    }

    #[test]
    fn test_empty_run_is_clean() {
        let result = ViolationAggregator::new().aggregate(vec![]);
        assert!(result.groups.is_empty());
        assert_eq!(result.total(), 0);
        assert_eq!(result.outcome(), Outcome::Clean);
        assert_eq!(result.outcome().exit_code(), EXIT_SUCCESS);
    }

    #[test]
    fn test_warnings_only_passes() {
        let result = ViolationAggregator::new().aggregate(vec![violation(
            Principle::Automation,
            Severity::Warning,
            "a.ts",
            1,
        )]);
        assert_eq!(result.outcome(), Outcome::WarningsOnly);
        assert_eq!(result.outcome().exit_code(), EXIT_SUCCESS);
        assert!(result.passed());
    }

    #[test]
    fn test_errors_dominate() {
        let result = ViolationAggregator::new().aggregate(vec![
            violation(Principle::Configurability, Severity::Error, "a.ts", 1),
            violation(Principle::Automation, Severity::Warning, "b.ts", 2),
        ]);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.outcome(), Outcome::Failed);
        assert_eq!(result.outcome().exit_code(), EXIT_FAILURE);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[1].principle, Principle::Automation);
    }

    #[test]
    fn test_groups_keep_first_appearance_and_inner_order() {
        let result = ViolationAggregator::new().aggregate(vec![
            violation(Principle::Integration, Severity::Warning, "a.ts", 3),
            violation(Principle::Modularity, Severity::Warning, "a.ts", 1),
            violation(Principle::Integration, Severity::Error, "b.ts", 7),
        ]);

        let order: Vec<_> = result.groups.iter().map(|g| g.principle).collect();
        assert_eq!(order, vec![Principle::Integration, Principle::Modularity]);

        let lines: Vec<_> = result.groups[0].violations.iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![3, 7]);
    }
}
