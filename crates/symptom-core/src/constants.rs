/// Number of scored indicator fields in a submission.
pub const FIELD_COUNT: usize = 8;

/// The only token value that marks an indicator as present. Case-sensitive.
pub const PRESENT_MARKER: &str = "Y";

/// A risk strictly above this value counts as positive.
pub const RISK_THRESHOLD: i32 = 30;

/// Separator between the identifier and the data string.
pub const SEGMENT_DELIMITER: char = ':';

/// Separator between tokens in the data string.
pub const TOKEN_DELIMITER: char = ' ';

/// Result messages returned to the host.
pub mod messages {
    pub const RECORDED: &str = "User info processed";
    pub const LIKELY_POSITIVE: &str =
        "It is possible that you have the COVID-19 please take a look at the advices";
    pub const LIKELY_NEGATIVE: &str = "Probably you don't have the COVID-19 but take care";
    pub const NO_POSITIVES: &str = "None of the users seems to have COVID symptoms";
    pub const PERCENTAGE_SUFFIX: &str = "% of the users present COVID_19 symptoms";
    pub const MALFORMED_INPUT: &str = "Error with missing or incorrect input format";
    pub const INTERNAL_FAILURE: &str = "Caught exception while processing workload data";
}
