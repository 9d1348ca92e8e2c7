//! Cornerstones CLI entry point

use clap::Parser;
use cornerstones::cli::{Cli, CheckOptions, run_check};
use std::process;

fn main() {
    let cli = Cli::parse();
    let exit_code = run_check(&CheckOptions::from(cli));
    process::exit(exit_code);
}
