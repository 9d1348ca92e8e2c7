#![forbid(unsafe_code)]

//! Human-readable report formatter
//!
//! The report always ends with one of three banners, so the last line tells
//! the reader whether the run was clean, advisory, or failed.

use crate::config::ColorChoice;
use crate::engine::aggregator::{AggregationResult, Outcome};
use crate::rules::Violation;
use crate::types::Severity;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, NoColor, StandardStream, WriteColor};

const HEAVY_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const GROUP_RULE_WIDTH: usize = 50;

pub const CLEAN_BANNER: &str = "✓ No violations found. Five Cornerstones validated.";
pub const WARNINGS_BANNER: &str = "⚠ Warnings found. Consider addressing them.";
pub const FAILED_BANNER: &str = "✗ Validation failed. Fix errors before committing.";

/// Maps the configured color choice onto termcolor, disabling color when
/// stdout is not a terminal in auto mode
pub fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Human-readable formatter for a completed run
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the report without color
    pub fn format(&self, root: &Path, result: &AggregationResult) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, root, result)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Write the report to stdout
    pub fn write_to_stdout(
        &self,
        root: &Path,
        result: &AggregationResult,
        color: ColorChoice,
    ) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color_choice(color));
        self.write(&mut stdout, root, result)?;
        stdout.flush()
    }

    /// Write the full report: header, groups, summary, banner
    pub fn write(
        &self,
        out: &mut dyn WriteColor,
        root: &Path,
        result: &AggregationResult,
    ) -> io::Result<()> {
        writeln!(out, "Five Cornerstones Validator")?;
        writeln!(out, "{}", HEAVY_RULE)?;
        writeln!(out)?;
        writeln!(out, "Scanning: {}", root.display())?;
        writeln!(out)?;
        writeln!(out, "{}", HEAVY_RULE)?;
        writeln!(out, "Validation Results")?;

        for group in &result.groups {
            writeln!(out)?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(
                out,
                "{} ({} issues)",
                group.principle,
                group.violations.len()
            )?;
            out.reset()?;
            writeln!(out)?;
            writeln!(out, "{}", "─".repeat(GROUP_RULE_WIDTH))?;

            for violation in &group.violations {
                self.write_violation(out, violation)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", HEAVY_RULE)?;
        writeln!(out)?;
        writeln!(out, "Summary:")?;
        writeln!(out, "   Errors:   {}", result.error_count)?;
        writeln!(out, "   Warnings: {}", result.warning_count)?;
        writeln!(out, "   Total:    {}", result.total())?;
        writeln!(out)?;

        let (banner, color) = match result.outcome() {
            Outcome::Clean => (CLEAN_BANNER, Color::Green),
            Outcome::WarningsOnly => (WARNINGS_BANNER, Color::Yellow),
            Outcome::Failed => (FAILED_BANNER, Color::Red),
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", banner)?;
        out.reset()?;
        writeln!(out)
    }

    fn write_violation(&self, out: &mut dyn WriteColor, violation: &Violation) -> io::Result<()> {
        let (icon, color) = match violation.severity {
            Severity::Error => ("✗", Color::Red),
            Severity::Warning => ("⚠", Color::Yellow),
        };

        writeln!(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", icon)?;
        out.reset()?;
        writeln!(out, " {}:{}", violation.file.display(), violation.line)?;
        writeln!(out, "   {}", violation.message)?;
        writeln!(out, "   Suggestion: {}", violation.suggestion)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregator::ViolationAggregator;
    use crate::types::Principle;
    use std::path::PathBuf;

    fn violation(principle: Principle, severity: Severity, line: u32) -> Violation {
        Violation {
            principle,
            severity,
            file: PathBuf::from("src/app.ts"),
            line,
            message: format!("{} finding", principle),
            suggestion: "Fix it".to_string(),
        }
    }

    fn render(violations: Vec<Violation>) -> String {
        let result = ViolationAggregator::new().aggregate(violations);
        HumanFormatter::new().format(Path::new("./src"), &result).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let output = render(vec![]);
        assert!(output.starts_with("Five Cornerstones Validator\n"));
        assert!(output.contains("Scanning: ./src\n"));
        assert!(output.contains("   Total:    0\n"));
        assert_eq!(output.lines().last(), Some(CLEAN_BANNER));
    }

    #[test]
    fn test_warning_report() {
        let output = render(vec![violation(Principle::Automation, Severity::Warning, 4)]);
        assert!(output.contains("Automation (1 issues)\n"));
        assert!(output.contains("⚠ src/app.ts:4\n"));
        assert!(output.contains("   Automation finding\n"));
        assert!(output.contains("   Suggestion: Fix it\n"));
        assert_eq!(output.lines().last(), Some(WARNINGS_BANNER));
    }

    #[test]
    fn test_failed_report_lists_every_group() {
        let output = render(vec![
            violation(Principle::Configurability, Severity::Error, 1),
            violation(Principle::Integration, Severity::Warning, 2),
        ]);
        assert!(output.contains("✗ src/app.ts:1\n"));
        assert!(output.contains("Integration (1 issues)\n"));
        assert!(output.contains("   Errors:   1\n"));
        assert!(output.contains("   Warnings: 1\n"));
        assert!(output.contains("   Total:    2\n"));
        assert_eq!(output.lines().last(), Some(FAILED_BANNER));
    }

    #[test]
    fn test_groups_without_violations_are_omitted() {
        let output = render(vec![violation(Principle::Modularity, Severity::Warning, 9)]);
        assert!(!output.contains("Configurability"));
        assert!(!output.contains("Extensibility"));
    }

    #[test]
    fn test_color_choice_mapping() {
        assert_eq!(color_choice(ColorChoice::Always), termcolor::ColorChoice::Always);
        assert_eq!(color_choice(ColorChoice::Never), termcolor::ColorChoice::Never);
    }
}
