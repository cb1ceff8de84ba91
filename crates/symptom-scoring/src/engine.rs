use symptom_core::config::ScoringConfig;
use symptom_core::constants::FIELD_COUNT;
use symptom_core::errors::SymptomResult;
use symptom_core::models::{Outcome, ScoreBreakdown, TallySnapshot, Verdict};
use symptom_core::traits::IWorkload;
use symptom_observability::{evaluation_span, report_span};

use crate::formula;
use crate::submission::Submission;
use crate::tally::Tally;

/// Scores work order lines and keeps the aggregate tally.
///
/// Construct one per process or service instance. The tally is owned by the
/// scorer and is never reset, so a fresh scorer starts from zero.
#[derive(Debug)]
pub struct RiskScorer {
    workload_id: String,
    log_breakdown: bool,
    tally: Tally,
}

impl RiskScorer {
    /// Create a scorer with the default scoring configuration.
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            workload_id: config.workload_id.clone(),
            log_breakdown: config.log_breakdown,
            tally: Tally::new(),
        }
    }

    pub fn workload_id(&self) -> &str {
        &self.workload_id
    }

    /// Handle one work order line and return the message for the host.
    ///
    /// Never fails: internal errors become the internal-failure message.
    pub fn evaluate(&self, input: &str) -> String {
        match self.assess(input) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => {
                tracing::warn!(workload = %self.workload_id, error = %e, "work order processing failed");
                Outcome::InternalFailure.to_string()
            }
        }
    }

    /// Handle one work order line, returning the typed outcome.
    pub fn assess(&self, input: &str) -> SymptomResult<Outcome> {
        let submission = Submission::parse(input);
        let _span = evaluation_span!(self.workload_id, submission.kind()).entered();

        match submission {
            Submission::Report => self.report(),
            Submission::Tallied { fields } => {
                let verdict = self.score(&fields);
                let counts = self.tally.record(verdict)?;
                tracing::debug!(
                    verdict = ?verdict,
                    total_tests = counts.total_tests,
                    positive_tests = counts.positive_tests,
                    "submission tallied"
                );
                Ok(Outcome::Recorded)
            }
            Submission::Individual { fields, .. } => Ok(Outcome::Assessed {
                verdict: self.score(&fields),
            }),
            Submission::Malformed { token_count } => {
                tracing::debug!(token_count, "rejected work order with unexpected token count");
                Ok(Outcome::MalformedInput)
            }
        }
    }

    /// Aggregate report over everything tallied so far.
    pub fn report(&self) -> SymptomResult<Outcome> {
        let _span = report_span!(self.workload_id).entered();
        Ok(self.tally.snapshot()?.report())
    }

    /// Per-field breakdown of a scorable line without touching the tally.
    /// `None` for report requests and malformed lines.
    pub fn breakdown(&self, input: &str) -> Option<ScoreBreakdown> {
        match Submission::parse(input) {
            Submission::Tallied { fields } | Submission::Individual { fields, .. } => {
                Some(formula::compute_breakdown(&fields))
            }
            Submission::Report | Submission::Malformed { .. } => None,
        }
    }

    pub fn snapshot(&self) -> SymptomResult<TallySnapshot> {
        self.tally.snapshot()
    }

    /// Counter snapshot as JSON, with the derived percentage alongside.
    pub fn snapshot_json(&self) -> SymptomResult<serde_json::Value> {
        let snapshot = self.snapshot()?;
        let counts = serde_json::to_value(snapshot)?;

        Ok(serde_json::json!({
            "workload_id": self.workload_id,
            "counts": counts,
            "positive_percentage": snapshot.positive_percentage(),
        }))
    }

    fn score(&self, fields: &[&str; FIELD_COUNT]) -> Verdict {
        if !self.log_breakdown {
            return Verdict::from_risk(formula::compute(fields));
        }
        let breakdown = formula::compute_breakdown(fields);
        tracing::debug!(
            risk = breakdown.risk,
            present = breakdown.present_count(),
            contributions = ?breakdown.contributions,
            "scored submission"
        );
        breakdown.verdict
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl IWorkload for RiskScorer {
    fn workload_id(&self) -> &str {
        &self.workload_id
    }

    fn execute_work_order(&self, input: &str) -> String {
        self.evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use symptom_core::constants::messages;
    use symptom_core::errors::{EvaluationError, SymptomError};

    use super::*;

    const POSITIVE: &str = "id:Y N N Y Y N N Y";

    fn failed_scorer() -> RiskScorer {
        let scorer = RiskScorer::new();
        scorer.evaluate(POSITIVE);
        scorer.tally.poison();
        scorer
    }

    #[test]
    fn evaluate_absorbs_tally_failure() {
        let scorer = failed_scorer();
        assert_eq!(scorer.evaluate(POSITIVE), messages::INTERNAL_FAILURE);
        assert_eq!(scorer.evaluate("id:report"), messages::INTERNAL_FAILURE);
    }

    #[test]
    fn assess_surfaces_tally_failure_as_evaluation_error() {
        let scorer = failed_scorer();
        assert!(matches!(
            scorer.assess(POSITIVE),
            Err(SymptomError::Evaluation(EvaluationError::LockPoisoned))
        ));
        assert!(matches!(
            scorer.report(),
            Err(SymptomError::Evaluation(EvaluationError::LockPoisoned))
        ));
    }

    #[test]
    fn shapes_that_skip_the_tally_still_answer_after_failure() {
        let scorer = failed_scorer();
        assert_eq!(
            scorer.evaluate("id:Y N N Y Y N N Y extra"),
            messages::LIKELY_POSITIVE
        );
        assert_eq!(scorer.evaluate("id:N Y"), messages::MALFORMED_INPUT);
        assert_eq!(
            scorer.execute_work_order(POSITIVE),
            messages::INTERNAL_FAILURE
        );
    }
}
