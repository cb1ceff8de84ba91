//! Work order line parsing.
//!
//! A line is `<id>:<tok0> <tok1> ... <tokN>`. Each token count maps to
//! exactly one [`Submission`] variant; no shape shares handling with another.

use symptom_core::constants::{FIELD_COUNT, SEGMENT_DELIMITER, TOKEN_DELIMITER};

/// One parsed work order line, tagged by token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission<'a> {
    /// One token: aggregate report request. The token itself is not scored.
    Report,
    /// Eight tokens: score and add to the tally.
    Tallied { fields: [&'a str; FIELD_COUNT] },
    /// Nine tokens: score and classify only. `trailing` is never scored.
    Individual {
        fields: [&'a str; FIELD_COUNT],
        trailing: &'a str,
    },
    /// Any other token count.
    Malformed { token_count: usize },
}

impl<'a> Submission<'a> {
    pub fn parse(line: &'a str) -> Self {
        let tokens = tokenize(data_segment(line));
        match tokens.as_slice() {
            &[_] => Self::Report,
            &[a, b, c, d, e, f, g, h] => Self::Tallied {
                fields: [a, b, c, d, e, f, g, h],
            },
            &[a, b, c, d, e, f, g, h, trailing] => Self::Individual {
                fields: [a, b, c, d, e, f, g, h],
                trailing,
            },
            other => Self::Malformed {
                token_count: other.len(),
            },
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Tallied { .. } => "tallied",
            Self::Individual { .. } => "individual",
            Self::Malformed { .. } => "malformed",
        }
    }
}

/// Second non-empty colon-separated segment, or `""` when there is none.
pub fn data_segment(line: &str) -> &str {
    line.split(SEGMENT_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .nth(1)
        .unwrap_or("")
}

/// Split on single spaces, dropping the empty tokens repeated spaces leave.
pub fn tokenize(data: &str) -> Vec<&str> {
    data.split(TOKEN_DELIMITER)
        .filter(|token| !token.is_empty())
        .collect()
}
