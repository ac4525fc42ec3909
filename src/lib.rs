//! The `month-grid` crate provides the date arithmetic behind a month-view calendar: which
//! weekday a day falls on, how many week-rows a month spans, which days sit in each row, and the
//! week-of-year number for a row.
//!
//! Weeks start on Sunday or Monday, per [`WeekStart`]. Weekday ordinals always run from 1
//! (Sunday) through 7 (Saturday), regardless of the week start.
//!
//! ## Examples
//!
//! Laying out September 2019:
//!
//! ```
//! use month_grid::WeekStart;
//! use month_grid::YearMonth;
//!
//! let sep = YearMonth::new(2019, 9)?;
//! let weeks = sep.number_of_weeks(WeekStart::Sunday)?;
//! assert_eq!(weeks, 5);
//! assert_eq!(sep.days_in_week_row(1, WeekStart::Sunday), [1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(sep.days_in_week_row(weeks, WeekStart::Sunday), [29, 30]);
//! # Ok::<(), month_grid::Error>(())
//! ```
//!
//! The same queries are available as free functions taking raw month numbers:
//!
//! ```
//! assert_eq!(month_grid::number_of_weeks(2019, 9, true)?, 6);
//! assert!(month_grid::number_of_weeks(2019, 13, true).is_err());
//! # Ok::<(), month_grid::Error>(())
//! ```

mod error;
mod grid;
mod month;
#[cfg(feature = "serde")]
mod serde;
mod utils;
mod week;
mod weekday;
mod year_month;

pub use error::Error;
pub use error::Result;
pub use grid::CalendarConfig;
pub use grid::CalendarDelegate;
pub use grid::GridCell;
pub use grid::GridRow;
pub use grid::MonthGrid;
pub use grid::NoDelegate;
pub use grid::Schedule;
pub use month::Month;
pub use weekday::WeekStart;
pub use weekday::Weekday;
pub use weekday::WeekdayLabels;
pub use year_month::YearMonth;

/// Return true if this is a leap year in the Gregorian calendar, false otherwise.
///
/// ## Examples
///
/// ```
/// assert!(month_grid::is_leap_year(2000));
/// assert!(!month_grid::is_leap_year(1900));
/// ```
#[inline]
pub const fn is_leap_year(year: u16) -> bool {
  utils::is_leap_year(year)
}

/// The number of days in the given month (1-12) of the given year.
pub fn days_in_month(month: u8, year: u16) -> Result<u8> {
  Ok(YearMonth::new(year, month)?.days())
}

/// The weekday of the given day of a month.
///
/// The day may exceed the length of the month, in which case it counts forward into the
/// following months.
///
/// ## Examples
///
/// ```
/// use month_grid::Weekday;
///
/// let weekday = month_grid::weekday(2019, 9, 40)?; // October 10, 2019.
/// assert_eq!(weekday, Weekday::Thursday);
/// assert_eq!(weekday.abbv(), "Thu");
/// assert_eq!(weekday.ordinal(), 5);
/// # Ok::<(), month_grid::Error>(())
/// ```
pub fn weekday(year: u16, month: u8, day: u32) -> Result<Weekday> {
  Ok(YearMonth::new(year, month)?.weekday(day))
}

/// The number of week-rows (4-6) the given month spans.
pub fn number_of_weeks(year: u16, month: u8, starts_with_monday: bool) -> Result<u8> {
  YearMonth::new(year, month)?.number_of_weeks(WeekStart::from_monday_flag(starts_with_monday))
}

/// The day numbers in the given week-row of a month, with 0 for blank leading cells.
///
/// An out-of-range week yields an empty row.
pub fn days_in_week_row(
  year: u16,
  month: u8,
  week: u8,
  starts_with_monday: bool,
) -> Result<Vec<u8>> {
  let start = WeekStart::from_monday_flag(starts_with_monday);
  Ok(YearMonth::new(year, month)?.days_in_week_row(week, start))
}

/// The week of the year for the given week-row of a month; `None` for the first row or an
/// out-of-range week.
pub fn week_of_year(
  year: u16,
  month: u8,
  week: u8,
  starts_with_monday: bool,
) -> Result<Option<u8>> {
  let start = WeekStart::from_monday_flag(starts_with_monday);
  Ok(YearMonth::new(year, month)?.week_of_year(week, start))
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_is_leap_year() {
    check!(is_leap_year(2000));
    check!(!is_leap_year(1900));
    check!(is_leap_year(2024));
    check!(!is_leap_year(2023));
  }

  #[test]
  fn test_days_in_month() {
    check!(days_in_month(2, 2024) == Ok(29));
    check!(days_in_month(2, 2023) == Ok(28));
    check!(days_in_month(9, 2019) == Ok(30));
    check!(days_in_month(13, 2019) == Err(Error::InvalidMonth(13)));
  }

  #[test]
  fn test_weekday() {
    check!(weekday(2019, 9, 1) == Ok(Weekday::Sunday));
    check!(weekday(2019, 9, 40) == weekday(2019, 10, 10));
    check!(weekday(2019, 0, 1) == Err(Error::InvalidMonth(0)));
    check!(weekday(0, 1, 1) == Err(Error::InvalidYear(0)));
  }

  #[test]
  fn test_invalid_month() {
    for month in [0, 13, 255] {
      check!(number_of_weeks(2019, month, false) == Err(Error::InvalidMonth(month)));
      check!(days_in_week_row(2019, month, 1, false) == Err(Error::InvalidMonth(month)));
      check!(week_of_year(2019, month, 2, true) == Err(Error::InvalidMonth(month)));
    }
  }

  #[test]
  fn test_september_2019() {
    check!(number_of_weeks(2019, 9, false) == Ok(5));
    check!(days_in_week_row(2019, 9, 1, false) == Ok(vec![1, 2, 3, 4, 5, 6, 7]));
    check!(days_in_week_row(2019, 9, 5, false) == Ok(vec![29, 30]));
    check!(days_in_week_row(2019, 9, 1, true) == Ok(vec![0, 0, 0, 0, 0, 0, 1]));
    check!(days_in_week_row(2019, 9, 2, true) == Ok(vec![2, 3, 4, 5, 6, 7, 8]));
    check!(days_in_week_row(2019, 9, 9, true) == Ok(vec![]));
    check!(week_of_year(2019, 9, 1, false) == Ok(None));
    check!(week_of_year(2019, 9, 2, false) == Ok(Some(37)));
  }
}
