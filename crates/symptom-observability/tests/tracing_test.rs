use symptom_core::config::ObservabilityConfig;
use symptom_observability::tracing_setup::spans::names;
use symptom_observability::{build_filter, evaluation_span, report_span, try_init_tracing};

#[test]
fn filter_falls_back_to_configured_level() {
    let config = ObservabilityConfig {
        env_var: "SYMPTOM_LOG_TEST_UNSET".into(),
        log_level: "warn".into(),
        ..Default::default()
    };
    let filter = build_filter(&config);
    assert_eq!(filter.to_string(), "warn");
}

#[test]
fn second_init_reports_existing_subscriber() {
    let config = ObservabilityConfig {
        json: false,
        env_var: "SYMPTOM_LOG_TEST_UNSET".into(),
        ..Default::default()
    };
    // Whichever test installs first wins; the second attempt must not panic.
    let _ = try_init_tracing(&config);
    assert!(!try_init_tracing(&config));
}

#[test]
fn span_macros_use_named_spans() {
    tracing::subscriber::with_default(tracing_subscriber::registry(), || {
        let evaluation = evaluation_span!("heart-disease-eval", "tallied");
        let report = report_span!("heart-disease-eval");

        let meta = evaluation.metadata().expect("evaluation span enabled");
        assert_eq!(meta.name(), names::EVALUATION);
        assert!(meta.fields().field("workload").is_some());
        assert!(meta.fields().field("kind").is_some());

        let meta = report.metadata().expect("report span enabled");
        assert_eq!(meta.name(), names::REPORT);
        assert!(meta.fields().field("workload").is_some());
    });
}
