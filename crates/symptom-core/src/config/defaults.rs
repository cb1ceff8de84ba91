// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_WORKLOAD_ID: &str = "heart-disease-eval";
pub const DEFAULT_LOG_BREAKDOWN: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_LOG_ENV_VAR: &str = "SYMPTOM_LOG";

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
