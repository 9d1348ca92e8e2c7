//! File discovery and traversal
//!
//! This module provides a lazy, depth-first walk over a source tree. Hidden
//! entries and dependency/output directories are pruned before descent, and
//! only files with a scanned extension are yielded.

use crate::config::CornerstonesMeta;
use crate::config::cornerstones_toml::default_extensions;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory names that are never descended into
pub const PRUNED_NAMES: &[&str] = &["node_modules", "dist", "build"];

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Returns true for entry names the walker prunes entirely
pub fn is_pruned(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || PRUNED_NAMES.contains(&name.as_ref())
}

/// Options controlling which files the walker yields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Extensions to yield, without the leading dot
    pub extensions: Vec<String>,
    /// Extra glob exclusions, matched against the path relative to the root
    pub exclude: Vec<String>,
    /// Respect .gitignore files
    pub gitignore: bool,
    /// Report skipped files
    pub verbose: bool,
}

impl WalkOptions {
    /// Builds walk options from the `[cornerstones]` configuration section
    pub fn from_config(meta: &CornerstonesMeta, verbose: bool) -> Self {
        Self {
            extensions: meta.extensions.clone(),
            exclude: meta.exclude.clone(),
            gitignore: meta.gitignore,
            verbose,
        }
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
            verbose: false,
        }
    }
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File matched an exclude pattern
    ExcludedByPattern,
    /// File extension is not scanned
    UnsupportedExtension,
    /// Entry is not a regular file (e.g., directory, symlink)
    NotAFile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExcludedByPattern => "excluded by pattern",
            SkipReason::UnsupportedExtension => "unsupported extension",
            SkipReason::NotAFile => "not a file",
        }
    }
}

/// Result of file walking - either a file to scan or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be scanned
    File(PathBuf),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Item yielded by [`FileWalker::walk_with_skip_info`]
pub type WalkItem = Result<WalkResult, FileWalkerError>;

/// Iterator source over candidate files
///
/// Each call to [`FileWalker::walk`] consumes the walker; walking again means
/// building a new one.
pub struct FileWalker {
    root: PathBuf,
    walker: ignore::Walk,
    exclude_set: Option<GlobSet>,
    extensions: Vec<String>,
    verbose: bool,
}

impl FileWalker {
    /// Creates a new FileWalker rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns `FileWalkerError::InvalidGlob` if an exclude pattern is invalid.
    pub fn new(root: &Path, options: &WalkOptions) -> Result<Self, FileWalkerError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(options.gitignore)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            // The root itself is never pruned, even when it is "." or hidden
            .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry.file_name()));

        let exclude_set = if options.exclude.is_empty() {
            None
        } else {
            Some(Self::build_globset(&options.exclude)?)
        };

        Ok(Self {
            root: root.to_path_buf(),
            walker: builder.build(),
            exclude_set,
            extensions: options.extensions.clone(),
            verbose: options.verbose,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[String]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the directory tree and returns an iterator over matching files
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(path)) => Some(Ok(path)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the directory tree and returns an iterator with skip information
    ///
    /// Skipped entries are only reported in verbose mode.
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = WalkItem> {
        let root = self.root;
        let exclude_set = self.exclude_set;
        let extensions = self.extensions;
        let verbose = self.verbose;

        let skipped = move |path: &Path, reason: SkipReason| -> Option<WalkItem> {
            verbose.then(|| {
                Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason,
                })
            })
        };

        self.walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };
            let path = entry.path();

            match entry.file_type() {
                Some(ft) if ft.is_file() => {}
                Some(ft) if ft.is_dir() => return None,
                _ => return skipped(path, SkipReason::NotAFile),
            }

            if let Some(ref exclude_set) = exclude_set {
                let relative = path.strip_prefix(&root).unwrap_or(path);
                if exclude_set.is_match(relative) {
                    return skipped(path, SkipReason::ExcludedByPattern);
                }
            }

            let scanned = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext));
            if !scanned {
                return skipped(path, SkipReason::UnsupportedExtension);
            }

            Some(Ok(WalkResult::File(path.to_path_buf())))
        })
    }
}

impl std::fmt::Debug for FileWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWalker")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .field("exclude", &"<GlobSet>")
            .field("verbose", &self.verbose)
            .finish()
    }
}
