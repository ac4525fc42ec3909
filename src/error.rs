//! Errors for calendar queries.

/// A failure to answer a calendar query.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  /// The month code is outside `1..=12`.
  #[error("Invalid month: {0}")]
  InvalidMonth(u8),

  /// The year is zero, or too large to represent.
  #[error("Invalid year: {0}")]
  InvalidYear(i64),

  /// The computed number of week-rows fell outside `4..=6`. Every real month spans four to
  /// six weeks, so this indicates a defect rather than bad input.
  #[error("Inconsistent week count for {year}-{month:02}: {weeks}")]
  WeekCount { year: u16, month: u8, weeks: u32 },

  /// The string could not be parsed as a `YYYY-MM` year and month.
  #[error("Parse error attempting to parse YearMonth from {src}: {reason}")]
  Parse { src: String, reason: &'static str },

  /// The time zone could not be found or could not resolve an offset.
  #[cfg(feature = "tz")]
  #[error("Time zone error: {0}")]
  TimeZone(String),
}

pub type Result<T> = std::result::Result<T, Error>;
