//! # symptom-scoring
//!
//! Additive risk scoring over eight fixed-position indicator fields,
//! plus the aggregate tally behind the report request.

pub mod engine;
pub mod fields;
pub mod formula;
pub mod submission;
pub mod tally;

pub use engine::RiskScorer;
pub use submission::Submission;
pub use tally::Tally;
