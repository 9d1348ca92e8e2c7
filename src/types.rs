#![forbid(unsafe_code)]

//! Core domain types for Cornerstones
//!
//! This module defines the closed enumerations shared by every rule and by the
//! reporter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five principles a rule can enforce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Configurability,
    Modularity,
    Extensibility,
    Integration,
    Automation,
}

impl Principle {
    /// Returns all principles in registration order
    pub fn all() -> [Principle; 5] {
        [
            Principle::Configurability,
            Principle::Modularity,
            Principle::Extensibility,
            Principle::Integration,
            Principle::Automation,
        ]
    }

    /// Returns the display name of the principle
    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::Configurability => "Configurability",
            Principle::Modularity => "Modularity",
            Principle::Extensibility => "Extensibility",
            Principle::Integration => "Integration",
            Principle::Automation => "Automation",
        }
    }

    /// Returns the lowercase key used for the principle's `[rules]` entry
    pub fn key(&self) -> &'static str {
        match self {
            Principle::Configurability => "configurability",
            Principle::Modularity => "modularity",
            Principle::Extensibility => "extensibility",
            Principle::Integration => "integration",
            Principle::Automation => "automation",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violation severity levels
///
/// Errors block acceptance; warnings are advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
