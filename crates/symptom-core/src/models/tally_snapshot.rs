use serde::{Deserialize, Serialize};

use super::Outcome;

/// Point-in-time copy of the aggregate counters.
///
/// Both values are captured under one lock, so
/// `positive_tests <= total_tests` always holds for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallySnapshot {
    pub total_tests: u64,
    pub positive_tests: u64,
}

impl TallySnapshot {
    /// Integer percentage of positive tallies, or `None` before any tally.
    pub fn positive_percentage(&self) -> Option<u64> {
        if self.total_tests == 0 {
            return None;
        }
        Some(self.positive_tests * 100 / self.total_tests)
    }

    /// The aggregate report for this snapshot.
    pub fn report(&self) -> Outcome {
        let positive_percentage = if self.positive_tests == 0 {
            None
        } else {
            self.positive_percentage()
        };
        Outcome::Report {
            positive_percentage,
        }
    }
}
