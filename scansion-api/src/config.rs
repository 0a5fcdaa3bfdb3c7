//! High-level configuration API

use crate::error::{ApiError, Result};
use scansion_core::{get_rules, CmuDict, PronouncingDictionary, StressResolver, StressRules};
use std::sync::Arc;

/// Configuration for stress analysis
#[derive(Clone)]
pub struct Config {
    rules: String,
    custom_rules: Option<Arc<StressRules>>,
    dictionary: Option<Arc<dyn PronouncingDictionary>>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rules", &self.rules)
            .field(
                "custom_rules",
                &self.custom_rules.as_ref().map(|r| r.code().to_string()),
            )
            .field(
                "dictionary",
                &self.dictionary.as_ref().map(|_| "<dyn PronouncingDictionary>"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: "en".to_string(),
            custom_rules: None,
            dictionary: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Code of the rule set in use
    pub fn rules_code(&self) -> &str {
        match &self.custom_rules {
            Some(rules) => rules.code(),
            None => &self.rules,
        }
    }

    /// Whether a custom dictionary replaces the embedded one
    pub fn has_custom_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Build the resolver this configuration describes
    pub(crate) fn build_resolver(&self) -> Result<StressResolver> {
        let rules = match &self.custom_rules {
            Some(rules) => Arc::clone(rules),
            None => get_rules(&self.rules)?,
        };
        let dictionary: Arc<dyn PronouncingDictionary> = match &self.dictionary {
            Some(dictionary) => Arc::clone(dictionary),
            None => CmuDict::embedded()?,
        };
        Ok(StressResolver::new(dictionary, rules)?)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Select an embedded rule set by code, e.g. `"en"`
    pub fn rules(mut self, code: impl Into<String>) -> Self {
        self.config.rules = code.into();
        self
    }

    /// Use a custom rule set instead of an embedded one
    pub fn custom_rules(mut self, rules: StressRules) -> Self {
        self.config.custom_rules = Some(Arc::new(rules));
        self
    }

    /// Use a custom pronouncing dictionary
    pub fn dictionary(mut self, dictionary: Arc<dyn PronouncingDictionary>) -> Self {
        self.config.dictionary = Some(dictionary);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.rules.trim().is_empty() && self.config.custom_rules.is_none() {
            return Err(ApiError::Config(
                "rule code or custom rules required".to_string(),
            ));
        }

        Ok(self.config)
    }
}
