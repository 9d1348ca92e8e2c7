#![forbid(unsafe_code)]

//! Rule definitions and registry

mod automation;
mod configurability;
mod extensibility;
mod integration;
mod modularity;
mod registry;
mod rule;
mod text;

// Re-export core types
pub use automation::AutomationRule;
pub use configurability::ConfigurabilityRule;
pub use extensibility::ExtensibilityRule;
pub use integration::IntegrationRule;
pub use modularity::ModularityRule;
pub use registry::RuleRegistry;
pub use rule::{ExecutionContext, Rule, Violation};
