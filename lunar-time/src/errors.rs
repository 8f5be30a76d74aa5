use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

/// Failure modes of calendar conversion and string parsing.
///
/// All Julian Date arithmetic in this crate is total; errors only arise at
/// the boundaries where external input (strings, calendar components) enters
/// or where a date leaves the range the calendar algorithms support.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Failed to parse date/time: {0}")]
    ParseError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
