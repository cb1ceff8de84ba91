use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{messages, RISK_THRESHOLD};

/// Classification of a single risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Positive,
    Negative,
}

impl Verdict {
    /// Positive when the risk is strictly above [`RISK_THRESHOLD`].
    pub fn from_risk(risk: i32) -> Self {
        if risk > RISK_THRESHOLD {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

/// Result of handling one work order line.
///
/// `Display` renders the exact plain-text message the host shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// An 8-field submission was scored and tallied.
    Recorded,
    /// A 9-token submission was scored and classified without tallying.
    Assessed { verdict: Verdict },
    /// Aggregate report. `None` when no positive submission has been tallied.
    Report { positive_percentage: Option<u64> },
    /// Token count matched no known request shape.
    MalformedInput,
    /// Internal failure absorbed at the workload boundary.
    InternalFailure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recorded => f.write_str(messages::RECORDED),
            Self::Assessed {
                verdict: Verdict::Positive,
            } => f.write_str(messages::LIKELY_POSITIVE),
            Self::Assessed {
                verdict: Verdict::Negative,
            } => f.write_str(messages::LIKELY_NEGATIVE),
            Self::Report {
                positive_percentage: None,
            } => f.write_str(messages::NO_POSITIVES),
            Self::Report {
                positive_percentage: Some(pct),
            } => write!(f, "{pct}{}", messages::PERCENTAGE_SUFFIX),
            Self::MalformedInput => f.write_str(messages::MALFORMED_INPUT),
            Self::InternalFailure => f.write_str(messages::INTERNAL_FAILURE),
        }
    }
}
