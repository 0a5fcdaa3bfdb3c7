//! Stress rules: POS pattern families plus the heteronym override table
//!
//! Rule sets are data-driven. The embedded English set lives in
//! `configs/stress/english.toml`; custom sets can be built from TOML
//! with [`StressRules::from_toml`].

pub mod config;
pub(crate) mod loader;
pub mod overrides;

pub use config::StressRulesConfig;
pub use loader::{get_rules, list_available_rules};
pub use overrides::{PosOverride, PosOverrideTable};

use crate::error::Result;
use crate::pos::PosDisambiguator;
use std::sync::Arc;

/// A validated rule set
#[derive(Debug, Clone)]
pub struct StressRules {
    code: String,
    name: String,
    disambiguator: PosDisambiguator,
    overrides: PosOverrideTable,
}

impl StressRules {
    /// Build from a configuration, validating it first
    pub fn from_config(config: &StressRulesConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            disambiguator: PosDisambiguator::from_families(&config.patterns),
            overrides: PosOverrideTable::from_entries(&config.overrides)?,
        })
    }

    /// Parse and validate a TOML rule set
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Self::from_config(&StressRulesConfig::from_toml(toml_str)?)
    }

    /// The embedded English rule set
    pub fn english() -> Result<Arc<Self>> {
        get_rules("en")
    }

    /// Rule set code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// POS pattern families
    pub fn disambiguator(&self) -> &PosDisambiguator {
        &self.disambiguator
    }

    /// Heteronym overrides
    pub fn overrides(&self) -> &PosOverrideTable {
        &self.overrides
    }
}
