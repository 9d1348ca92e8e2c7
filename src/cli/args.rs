//! CLI argument parsing using clap

use crate::config::{ColorChoice, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Cornerstones CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "cornerstones")]
#[command(about = "Scan a source tree for violations of the five cornerstone principles")]
#[command(version)]
pub struct Cli {
    /// Directory or single file to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format (overrides the configuration file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output coloring (overrides the configuration file)
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Configuration file (defaults to ./cornerstones.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report progress and skipped files on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
