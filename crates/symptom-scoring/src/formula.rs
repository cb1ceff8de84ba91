use symptom_core::constants::FIELD_COUNT;
use symptom_core::models::{ScoreBreakdown, Verdict};

use crate::fields;

/// Linear risk formula.
///
/// ```text
/// risk = Σ weight[i] · [field[i] == "Y"]   for i in 0..8
/// ```
pub fn compute(fields: &[&str; FIELD_COUNT]) -> i32 {
    fields
        .iter()
        .enumerate()
        .map(|(position, token)| fields::contribution(position, token))
        .sum()
}

/// Compute the risk with each field's contribution kept separately.
pub fn compute_breakdown(fields: &[&str; FIELD_COUNT]) -> ScoreBreakdown {
    let mut present = [false; FIELD_COUNT];
    let mut contributions = [0; FIELD_COUNT];
    for (position, token) in fields.iter().enumerate() {
        present[position] = fields::is_present(token);
        contributions[position] = fields::contribution(position, token);
    }
    let risk = contributions.iter().sum();

    ScoreBreakdown {
        present,
        contributions,
        risk,
        verdict: Verdict::from_risk(risk),
    }
}
