use crate::domain::model::RuleSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional rules file: a `[rules]` table overriding the canonical
/// thresholds and sentinels. Omitted keys keep their defaults.
///
/// ```toml
/// [rules]
/// home_country = "USA"
/// high_achiever_gpa = 3.9
/// income_ceiling = 75000
/// aid_interest_level = "High"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: RuleSettings,
}

impl RulesConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.rules.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

impl Validate for RuleSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("rules.home_country", &self.home_country)?;
        validation::validate_non_empty_string(
            "rules.aid_interest_level",
            &self.aid_interest_level,
        )?;
        validation::validate_range("rules.high_achiever_gpa", self.high_achiever_gpa, 0.0, 5.0)?;
        validation::validate_range(
            "rules.income_ceiling",
            self.income_ceiling,
            0.0,
            10_000_000.0,
        )?;
        Ok(())
    }
}
