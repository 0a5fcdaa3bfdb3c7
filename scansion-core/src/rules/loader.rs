//! Embedded rule sets
//!
//! Rule sets are compiled into the binary and parsed on first access.

use super::StressRules;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<HashMap<&'static str, Arc<StressRules>>> = OnceLock::new();

macro_rules! embed_rules {
    ($code:expr, $aliases:expr, $path:expr) => {
        ($code, $aliases, include_str!($path))
    };
}

const EMBEDDED_RULES: [(&str, &[&str], &str); 1] = [embed_rules!(
    "en",
    &["english"],
    "../../configs/stress/english.toml"
)];

fn embedded() -> Result<&'static HashMap<&'static str, Arc<StressRules>>> {
    if let Some(rules) = EMBEDDED.get() {
        return Ok(rules);
    }

    let mut map = HashMap::new();
    for (code, _, toml_str) in EMBEDDED_RULES {
        let rules = StressRules::from_toml(toml_str).map_err(|e| {
            CoreError::ConfigurationError(format!("Failed to load {code} rules: {e}"))
        })?;

        if rules.code() != code {
            return Err(CoreError::ConfigurationError(format!(
                "Rule set code mismatch: expected {}, got {}",
                code,
                rules.code()
            )));
        }

        log::debug!(
            "Loaded {} stress rules ({} patterns, {} overrides)",
            rules.name(),
            rules.disambiguator().len(),
            rules.overrides().len()
        );
        map.insert(code, Arc::new(rules));
    }

    Ok(EMBEDDED.get_or_init(|| map))
}

fn canonical_code(code: &str) -> Option<&'static str> {
    let lowered = code.trim().to_ascii_lowercase();
    EMBEDDED_RULES
        .iter()
        .find(|(c, aliases, _)| *c == lowered || aliases.iter().any(|a| *a == lowered))
        .map(|(c, _, _)| *c)
}

/// Shared rule set for a code or alias, e.g. `"en"` or `"english"`
pub fn get_rules(code: &str) -> Result<Arc<StressRules>> {
    let canonical =
        canonical_code(code).ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))?;

    embedded()?
        .get(canonical)
        .cloned()
        .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
}

/// Codes of all embedded rule sets
pub fn list_available_rules() -> Vec<&'static str> {
    EMBEDDED_RULES.iter().map(|(code, _, _)| *code).collect()
}
