//! # symptom-observability
//!
//! Structured logging for the symptom workload: subscriber setup driven by
//! [`ObservabilityConfig`](symptom_core::config::ObservabilityConfig) and span
//! macros for each operation.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, try_init_tracing};
