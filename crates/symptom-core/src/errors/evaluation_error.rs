/// Errors raised while scoring a submission.
///
/// None of these reach the host: the scorer converts them into the
/// internal-failure message at its boundary.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("tally lock poisoned")]
    LockPoisoned,
}
