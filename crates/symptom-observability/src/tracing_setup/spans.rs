//! Span definitions per operation: evaluation and aggregate report.

/// Create an evaluation span for one work order line.
#[macro_export]
macro_rules! evaluation_span {
    ($workload:expr, $kind:expr) => {
        tracing::info_span!("symptom.evaluation", workload = %$workload, kind = %$kind)
    };
}

/// Create an aggregate report span.
#[macro_export]
macro_rules! report_span {
    ($workload:expr) => {
        tracing::info_span!("symptom.report", workload = %$workload)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATION: &str = "symptom.evaluation";
    pub const REPORT: &str = "symptom.report";
}
