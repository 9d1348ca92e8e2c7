//! Helper functions for loading configuration and discovering files

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::engine::file_walker::{FileWalker, FileWalkerError, WalkOptions, WalkResult};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

pub use crate::engine::aggregator::{EXIT_FAILURE, EXIT_SUCCESS};

/// Load configuration
///
/// An explicit path must exist. Without one, `cornerstones.toml` in the
/// current directory is used when present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.is_file() {
        Config::load(default_path)
    } else {
        Ok(Config::default())
    }
}

/// Discover files under `root` using FileWalker
///
/// Entries that fail during the walk are logged and skipped.
///
/// # Errors
///
/// Returns `FileWalkerError` if the walker cannot be built.
pub(crate) fn discover_files(
    root: &Path,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, FileWalkerError> {
    let walker = FileWalker::new(root, options)?;
    let mut files = Vec::new();

    for result in walker.walk_with_skip_info() {
        match result {
            Ok(WalkResult::File(path)) => files.push(path),
            Ok(WalkResult::Skipped { path, reason }) => {
                eprintln!("Skipping {}: {}", path.display(), reason.as_str());
            }
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    Ok(files)
}
