#![forbid(unsafe_code)]

//! Cornerstones: a rule checker for the five cornerstone principles
//!
//! Scans a source tree with line-based heuristics for Configurability,
//! Modularity, Extensibility, Integration and Automation problems. Errors fail
//! the run; warnings are reported but never block it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, CornerstonesError, RuleError};

// Re-export core domain types for convenient access
pub use rules::{Rule, Violation};
pub use types::{Principle, Severity};
