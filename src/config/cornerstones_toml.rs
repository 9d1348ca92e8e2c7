//! Parsing and validation for cornerstones.toml configuration files

use crate::error::ConfigError;
use crate::types::Principle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration struct for cornerstones.toml
///
/// Every section is optional; an empty file is the default configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub cornerstones: CornerstonesMeta,

    /// Per-principle enable switches
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cornerstones.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.cornerstones.version
            )));
        }

        if self.cornerstones.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "No extensions configured. Add at least one extension to scan.".to_string(),
            ));
        }

        if let Some(bad) = self
            .cornerstones
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "Invalid extension '{}'. Use the bare extension, for example \"ts\"",
                bad
            )));
        }

        for pattern in &self.cornerstones.exclude {
            globset::Glob::new(pattern).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }
}

/// Scan settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CornerstonesMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,

    /// File extensions to scan, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extra glob patterns to exclude, on top of the fixed directory pruning
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore files while walking
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for CornerstonesMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}

/// Source extensions scanned when none are configured
pub fn default_extensions() -> Vec<String> {
    ["ts", "js", "go"].iter().map(|s| s.to_string()).collect()
}

fn enabled() -> bool {
    true
}

/// Rules configuration section; every principle is enabled unless set to false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default = "enabled")]
    pub configurability: bool,
    #[serde(default = "enabled")]
    pub modularity: bool,
    #[serde(default = "enabled")]
    pub extensibility: bool,
    #[serde(default = "enabled")]
    pub integration: bool,
    #[serde(default = "enabled")]
    pub automation: bool,
}

impl RulesConfig {
    /// Returns whether rules for `principle` should run
    pub fn is_enabled(&self, principle: Principle) -> bool {
        match principle {
            Principle::Configurability => self.configurability,
            Principle::Modularity => self.modularity,
            Principle::Extensibility => self.extensibility,
            Principle::Integration => self.integration,
            Principle::Automation => self.automation,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            configurability: true,
            modularity: true,
            extensibility: true,
            integration: true,
            automation: true,
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorChoice,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cornerstones.extensions, vec!["ts", "js", "go"]);
        assert!(!config.cornerstones.gitignore);
        assert_eq!(config.output.format, OutputFormat::Human);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[cornerstones]
version = "1"
extensions = ["ts", "rs"]
exclude = ["**/generated/**"]
gitignore = true

[rules]
automation = false

[output]
format = "jsonl"
color = "never"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.cornerstones.extensions, vec!["ts", "rs"]);
        assert_eq!(config.cornerstones.exclude, vec!["**/generated/**"]);
        assert!(config.cornerstones.gitignore);
        assert!(!config.rules.is_enabled(Principle::Automation));
        assert!(config.rules.is_enabled(Principle::Modularity));
        assert_eq!(config.output.format, OutputFormat::Jsonl);
        assert_eq!(config.output.color, ColorChoice::Never);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = Config::parse("[cornerstones]\nversion = \"2\"\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration version"));
    }

    #[test]
    fn test_rejects_empty_extensions() {
        let err = Config::parse("[cornerstones]\nextensions = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let err = Config::parse("[cornerstones]\nextensions = [\".ts\"]\n").unwrap_err();
        assert!(err.to_string().contains("Invalid extension"));
    }

    #[test]
    fn test_rejects_invalid_glob() {
        let err = Config::parse("[cornerstones]\nexclude = [\"[oops\"]\n").unwrap_err();
        assert!(err.to_string().contains("Invalid exclude glob pattern"));
    }

    #[test]
    fn test_rejects_unknown_principle() {
        let err = Config::parse("[rules]\nreusability = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
