use thiserror::Error;

pub const INVALID_INDEX: &str = "Failed to parse index as an integer";
pub const INVALID_TIMESTAMP_PAIR: &str = "Failed to parse start and end timestamps";
pub const INVALID_TIMESTAMP: &str =
    "Failed to parse timestamp. Should be formatted like HH:MM:SS,sss";
pub const INVALID_HOURS: &str = "Hours should be integer between 0 - 59";
pub const INVALID_MINUTES: &str = "Minutes should be integer between 0 - 59";
pub const INVALID_SECONDS: &str = "Seconds should be integer between 0 - 59";
pub const INVALID_MILLIS: &str = "Milliseconds should be integer between 0 - 999";

/// The first fault found while parsing SRT text.
///
/// `line_number` is 1-based and points at the physical line of the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {reason}")]
pub struct ParseError {
    line_number: usize,
    reason: &'static str,
}

impl ParseError {
    pub(crate) fn new(line_number: usize, reason: &'static str) -> Self {
        Self {
            line_number,
            reason,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn reason(&self) -> &str {
        self.reason
    }
}
