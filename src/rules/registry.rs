#![forbid(unsafe_code)]

//! Rule registry holding the ordered set of enabled rules
//!
//! Rules run in registration order, which is also the order their violations
//! are reported within a file.

use crate::config::cornerstones_toml::RulesConfig;
use crate::error::RuleError;
use crate::rules::{
    AutomationRule, ConfigurabilityRule, ExtensibilityRule, IntegrationRule, ModularityRule, Rule,
};

/// Registry for storing the rules of one run
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a registry with all five builtin rules
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if a builtin pattern fails to compile.
    pub fn builtin() -> Result<Self, RuleError> {
        let mut registry = Self::new();
        registry.register(Box::new(ConfigurabilityRule::new()?));
        registry.register(Box::new(ModularityRule::new()?));
        registry.register(Box::new(ExtensibilityRule::new()));
        registry.register(Box::new(IntegrationRule::new()));
        registry.register(Box::new(AutomationRule::new()));
        Ok(registry)
    }

    /// Build the builtin registry and drop the principles disabled in `config`
    pub fn build_from_config(config: &RulesConfig) -> Result<Self, RuleError> {
        let mut registry = Self::builtin()?;
        registry.filter_by_config(config);
        Ok(registry)
    }

    /// Append a rule; it runs after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Remove rules whose principle is disabled in the configuration
    pub fn filter_by_config(&mut self, config: &RulesConfig) {
        self.rules.retain(|rule| config.is_enabled(rule.principle()));
    }

    /// Iterate over all rules in registration order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
