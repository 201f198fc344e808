#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::RulesConfig;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::RuleSettings;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "outreach-etl")]
#[command(about = "Segments prospective students and drafts outreach from a CSV export")]
pub struct CliConfig {
    /// CSV export with one prospect per row
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional TOML file overriding the rule thresholds
    #[arg(long)]
    pub rules_file: Option<String>,

    #[arg(long, help = "Write rendered outreach messages per segment")]
    pub render_messages: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(skip)]
    #[serde(default)]
    pub rules: RuleSettings,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the rules file, if one was given, into the active settings.
    /// Must run before the config is handed to the pipeline.
    pub fn resolve_rules(&mut self) -> Result<()> {
        if let Some(path) = &self.rules_file {
            self.rules = RulesConfig::from_path(path)?.rules;
            tracing::debug!("Loaded rule settings from {}", path);
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn rule_settings(&self) -> &RuleSettings {
        &self.rules
    }

    fn render_messages(&self) -> bool {
        self.render_messages
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["csv", "txt", "tsv"])?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(path) = &self.rules_file {
            validation::validate_path("rules_file", path)?;
            validation::validate_file_extension("rules_file", path, &["toml"])?;
        }

        self.rules.validate()
    }
}
