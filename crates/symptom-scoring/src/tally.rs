//! Aggregate counters behind the report request.

use std::sync::Mutex;

use symptom_core::errors::{EvaluationError, SymptomResult};
use symptom_core::models::{TallySnapshot, Verdict};

/// Running count of tallied submissions and how many were positive.
///
/// Both counters sit behind one lock: an increment pair and a
/// read-for-percentage are each a single critical section.
/// There is no reset; a tally lives as long as its owner.
#[derive(Debug, Default)]
pub struct Tally {
    counts: Mutex<TallySnapshot>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one scored submission. Returns the counters after the update.
    pub fn record(&self, verdict: Verdict) -> SymptomResult<TallySnapshot> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|_| EvaluationError::LockPoisoned)?;
        if verdict.is_positive() {
            counts.positive_tests += 1;
        }
        counts.total_tests += 1;
        Ok(*counts)
    }

    pub fn snapshot(&self) -> SymptomResult<TallySnapshot> {
        let counts = self
            .counts
            .lock()
            .map_err(|_| EvaluationError::LockPoisoned)?;
        Ok(*counts)
    }

    /// Poison the lock by panicking while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.counts.lock();
            panic!("tally poisoned for test");
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_positives_and_totals() {
        let tally = Tally::new();
        tally.record(Verdict::Positive).unwrap();
        let after = tally.record(Verdict::Negative).unwrap();
        assert_eq!(after.total_tests, 2);
        assert_eq!(after.positive_tests, 1);
        assert_eq!(tally.snapshot().unwrap(), after);
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let tally = Tally::new();
        tally.poison();
        assert!(tally.snapshot().is_err());
        assert!(tally.record(Verdict::Positive).is_err());
    }
}
