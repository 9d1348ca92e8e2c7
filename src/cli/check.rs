//! Check command implementation
//!
//! This module implements the one thing the `cornerstones` binary does:
//! - Loads configuration (explicit file, ./cornerstones.toml, or defaults)
//! - Resolves the root path; a missing root is fatal and prints no report
//! - Discovers files, or takes the root itself when it is a single file
//! - Executes every enabled rule against every file
//! - Aggregates violations and prints the report
//! - Returns the exit code for the outcome

use crate::cli::args::Cli;
use crate::cli::common::{EXIT_FAILURE, discover_files, load_config};
use crate::config::{ColorChoice, Config, OutputFormat};
use crate::engine::aggregator::{AggregationResult, ViolationAggregator};
use crate::engine::executor::ExecutionEngine;
use crate::engine::file_walker::WalkOptions;
use crate::error::CornerstonesError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for one check run, usually built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Directory or file to scan
    pub path: PathBuf,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Color override
    pub color: Option<ColorChoice>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Progress and skip diagnostics on stderr
    pub verbose: bool,
}

impl CheckOptions {
    /// Options for scanning `path` with everything else defaulted
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            color: None,
            config: None,
            verbose: false,
        }
    }
}

impl From<Cli> for CheckOptions {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            format: cli.format,
            color: cli.color,
            config: cli.config,
            verbose: cli.verbose,
        }
    }
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No violations, or warnings only
/// - 1: At least one error violation, or a fatal setup failure
pub fn run_check(options: &CheckOptions) -> i32 {
    match run_check_inner(options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn run_check_inner(options: &CheckOptions) -> Result<i32, CornerstonesError> {
    let config = load_config(options.config.as_deref())?;
    let result = scan(&options.path, &config, options.verbose)?;

    let format = options.format.unwrap_or(config.output.format);
    match format {
        OutputFormat::Human => {
            let color = options.color.unwrap_or(config.output.color);
            HumanFormatter::new().write_to_stdout(&options.path, &result, color)?;
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&options.path, &result),
    }

    Ok(result.outcome().exit_code())
}

/// Scan `root` with `config` and aggregate the run
///
/// This is the whole analysis without any output, so the same tree always
/// yields the same result.
///
/// # Errors
///
/// Returns `CornerstonesError::Root` if `root` cannot be statted, and
/// propagates rule or walker setup failures.
pub fn scan(root: &Path, config: &Config, verbose: bool) -> Result<AggregationResult, CornerstonesError> {
    let metadata = fs::metadata(root).map_err(|source| CornerstonesError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let registry = RuleRegistry::build_from_config(&config.rules)?;
    if registry.is_empty() {
        eprintln!("Warning: No rules are enabled. Nothing to check.");
    }

    let files = if metadata.is_dir() {
        let options = WalkOptions::from_config(&config.cornerstones, verbose);
        discover_files(root, &options)?
    } else if metadata.is_file() {
        vec![root.to_path_buf()]
    } else {
        Vec::new()
    };

    if verbose {
        eprintln!(
            "Checking {} files with {} rules...",
            files.len(),
            registry.len()
        );
        for rule in registry.iter_rules() {
            eprintln!("  {}: {}", rule.principle().key(), rule.description());
        }
    }

    let engine = ExecutionEngine::new(registry);
    let execution_result = engine.execute(files);

    if verbose {
        eprintln!(
            "Ran {} rules on {} files ({} unreadable)",
            execution_result.rules_executed,
            execution_result.files_checked,
            execution_result.files_skipped
        );
    }

    Ok(ViolationAggregator::new().aggregate(execution_result.violations))
}
