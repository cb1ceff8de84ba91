use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Identifier the scorer registers under with a host dispatcher.
    pub workload_id: String,
    /// Emit a per-field breakdown at debug level for every scored submission.
    pub log_breakdown: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            workload_id: defaults::DEFAULT_WORKLOAD_ID.to_string(),
            log_breakdown: defaults::DEFAULT_LOG_BREAKDOWN,
        }
    }
}
