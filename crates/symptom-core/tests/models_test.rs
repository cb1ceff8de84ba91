use proptest::prelude::*;
use symptom_core::constants::messages;
use symptom_core::models::*;

#[test]
fn outcome_messages_match_host_text() {
    assert_eq!(Outcome::Recorded.to_string(), "User info processed");
    assert_eq!(
        Outcome::Assessed {
            verdict: Verdict::Positive
        }
        .to_string(),
        "It is possible that you have the COVID-19 please take a look at the advices"
    );
    assert_eq!(
        Outcome::Assessed {
            verdict: Verdict::Negative
        }
        .to_string(),
        "Probably you don't have the COVID-19 but take care"
    );
    assert_eq!(
        Outcome::MalformedInput.to_string(),
        "Error with missing or incorrect input format"
    );
    assert_eq!(
        Outcome::InternalFailure.to_string(),
        "Caught exception while processing workload data"
    );
}

#[test]
fn report_renders_percentage() {
    let report = Outcome::Report {
        positive_percentage: Some(50),
    };
    assert_eq!(report.to_string(), "50% of the users present COVID_19 symptoms");
}

#[test]
fn verdict_threshold_is_strict() {
    assert_eq!(Verdict::from_risk(30), Verdict::Negative);
    assert_eq!(Verdict::from_risk(31), Verdict::Positive);
    assert_eq!(Verdict::from_risk(-15), Verdict::Negative);
}

#[test]
fn empty_snapshot_reports_no_positives() {
    let snapshot = TallySnapshot::default();
    assert_eq!(snapshot.positive_percentage(), None);
    assert_eq!(snapshot.report().to_string(), messages::NO_POSITIVES);
}

#[test]
fn snapshot_without_positives_reports_no_positives() {
    let snapshot = TallySnapshot {
        total_tests: 4,
        positive_tests: 0,
    };
    assert_eq!(snapshot.positive_percentage(), Some(0));
    assert_eq!(snapshot.report().to_string(), messages::NO_POSITIVES);
}

#[test]
fn snapshot_percentage_uses_integer_division() {
    let snapshot = TallySnapshot {
        total_tests: 3,
        positive_tests: 1,
    };
    assert_eq!(snapshot.positive_percentage(), Some(33));
}

#[test]
fn outcome_serializes_with_kind_tag() {
    let json = serde_json::to_value(Outcome::Assessed {
        verdict: Verdict::Positive,
    })
    .unwrap();
    assert_eq!(json["kind"], "assessed");
    assert_eq!(json["verdict"], "positive");
}

proptest! {
    #[test]
    fn snapshot_percentage_bounded(total in 1u64..10_000, ratio in 0.0f64..=1.0) {
        let positive = ((total as f64) * ratio).floor() as u64;
        let snapshot = TallySnapshot { total_tests: total, positive_tests: positive.min(total) };
        let pct = snapshot.positive_percentage().unwrap();
        prop_assert!(pct <= 100);
    }
}
