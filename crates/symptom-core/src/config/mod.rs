//! Workload configuration, loaded from TOML with per-field defaults.

pub mod defaults;
mod observability_config;
mod scoring_config;

pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SymptomResult};

/// Root configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomConfig {
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl SymptomConfig {
    /// Parse a TOML document. An empty document yields the defaults.
    pub fn from_toml(source: &str) -> SymptomResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration back to TOML.
    pub fn to_toml(&self) -> SymptomResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::SerializeFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn validate(&self) -> SymptomResult<()> {
        if self.scoring.workload_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scoring.workload_id".into(),
                reason: "must not be empty".into(),
            }
            .into());
        }
        if !defaults::LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("unknown level '{}'", self.observability.log_level),
            }
            .into());
        }
        Ok(())
    }
}
