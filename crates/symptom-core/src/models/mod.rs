mod outcome;
mod score_breakdown;
mod tally_snapshot;

pub use outcome::{Outcome, Verdict};
pub use score_breakdown::ScoreBreakdown;
pub use tally_snapshot::TallySnapshot;
