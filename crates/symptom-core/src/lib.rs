//! # symptom-core
//!
//! Foundation crate for the symptom risk workload.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SymptomConfig;
pub use errors::{SymptomError, SymptomResult};
pub use models::{Outcome, ScoreBreakdown, TallySnapshot, Verdict};
pub use traits::IWorkload;
