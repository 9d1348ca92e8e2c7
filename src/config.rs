//! Configuration file parsing and validation

pub mod cornerstones_toml;

pub use cornerstones_toml::{
    ColorChoice, Config, CornerstonesMeta, OutputConfig, OutputFormat, RulesConfig,
};

/// Configuration file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "cornerstones.toml";
