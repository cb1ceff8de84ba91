use serde::{Deserialize, Serialize};

use crate::constants::FIELD_COUNT;

use super::Verdict;

/// Per-field contributions for one scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Whether each indicator was marked present, by field position.
    pub present: [bool; FIELD_COUNT],
    /// Weight contributed by each field (zero when absent).
    pub contributions: [i32; FIELD_COUNT],
    /// Sum of `contributions`.
    pub risk: i32,
    pub verdict: Verdict,
}

impl ScoreBreakdown {
    /// Number of indicators marked present.
    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }
}
