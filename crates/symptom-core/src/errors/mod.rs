mod config_error;
mod evaluation_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;

/// Top-level error for the symptom workload.
#[derive(Debug, thiserror::Error)]
pub enum SymptomError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type SymptomResult<T> = Result<T, SymptomError>;
