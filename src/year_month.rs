use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::Month;
use crate::Weekday;
use crate::error::Error;
use crate::error::Result;
use crate::utils;

/// A single month of a single year, the unit a calendar grid is drawn for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
  year: u16,
  month: Month,
}

impl YearMonth {
  /// Construct a new `YearMonth` from a year and a month number.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::Month;
  /// use month_grid::YearMonth;
  ///
  /// let ym = YearMonth::new(2019, 9)?;
  /// assert_eq!(ym.year(), 2019);
  /// assert_eq!(ym.month(), Month::September);
  /// assert!(YearMonth::new(2019, 13).is_err());
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub fn new(year: u16, month: u8) -> Result<Self> {
    Self::from_parts(year, Month::try_from(month)?)
  }

  /// Construct a new `YearMonth` from a year and a [`Month`].
  pub const fn from_parts(year: u16, month: Month) -> Result<Self> {
    match year {
      0 => Err(Error::InvalidYear(0)),
      _ => Ok(Self { year, month }),
    }
  }

  /// The year and month in which the given Unix timestamp falls, in UTC.
  pub fn from_timestamp(unix_timestamp: i64) -> Result<Self> {
    let (year, month) = utils::year_month_from_days(unix_timestamp.div_euclid(86_400));
    let year = u16::try_from(year).map_err(|_| Error::InvalidYear(year))?;
    Self::new(year, month)
  }

  /// The year number.
  #[inline]
  pub const fn year(&self) -> u16 {
    self.year
  }

  /// The month.
  #[inline]
  pub const fn month(&self) -> Month {
    self.month
  }

  /// Whether this month belongs to a leap year.
  #[inline]
  pub const fn is_leap_year(&self) -> bool {
    utils::is_leap_year(self.year)
  }

  /// The number of days in this month.
  #[inline]
  pub const fn days(&self) -> u8 {
    self.month.days(self.year)
  }

  /// The weekday of the given day of this month.
  ///
  /// The day is not bounded by the length of the month: it counts forward from the 1st, so
  /// day 40 of September 2019 resolves to October 10, 2019. Day 0 is the last day of the
  /// preceding month.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::Weekday;
  /// use month_grid::YearMonth;
  ///
  /// let sep = YearMonth::new(2019, 9)?;
  /// assert_eq!(sep.weekday(1), Weekday::Sunday);
  /// assert_eq!(sep.weekday(40), Weekday::Thursday);
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub const fn weekday(&self, day: u32) -> Weekday {
    let first = utils::days_from_civil(self.year, self.month.number(), 1);
    Weekday::from_days(first + day as i64 - 1)
  }

  /// The following month, or `None` past the last representable year.
  pub const fn succ(&self) -> Option<Self> {
    match self.month {
      Month::December => match self.year.checked_add(1) {
        Some(year) => Some(Self { year, month: Month::January }),
        None => None,
      },
      month => Some(Self { year: self.year, month: month.next() }),
    }
  }

  /// The preceding month, or `None` before January of year 1.
  pub const fn pred(&self) -> Option<Self> {
    match (self.month, self.year) {
      (Month::January, 1) => None,
      (Month::January, year) => Some(Self { year: year - 1, month: Month::December }),
      (month, year) => Some(Self { year, month: month.previous() }),
    }
  }
}

impl YearMonth {
  /// The current month, according to the system clock in UTC.
  pub fn this_month() -> Result<Self> {
    Self::from_timestamp(now_timestamp())
  }

  /// The month after the current one, according to the system clock in UTC.
  pub fn next_month() -> Result<Self> {
    let this = Self::this_month()?;
    this.succ().ok_or(Error::InvalidYear(this.year as i64 + 1))
  }

  /// The current month in the provided time zone.
  #[cfg(feature = "tz")]
  pub fn this_month_tz(tz: &str) -> Result<Self> {
    let zone =
      tzdb::tz_by_name(tz).ok_or_else(|| Error::TimeZone(format!("Time zone not found: {}", tz)))?;
    let now = now_timestamp();
    let offset = zone
      .find_local_time_type(now)
      .map_err(|e| Error::TimeZone(e.to_string()))?
      .ut_offset() as i64;
    Self::from_timestamp(now + offset)
  }
}

/// Seconds since the Unix epoch, negative if the clock is set before 1970.
fn now_timestamp() -> i64 {
  match now().duration_since(UNIX_EPOCH) {
    Ok(elapsed) => elapsed.as_secs() as i64,
    Err(before) => -(before.duration().as_secs() as i64),
  }
}

impl fmt::Display for YearMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month.number())
  }
}

impl FromStr for YearMonth {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    macro_rules! fail {
      ($r:literal) => {
        Error::Parse { src: s.into(), reason: $r }
      };
    }
    let (year, month) = s.split_once('-').ok_or(fail!("Missing separator."))?;
    if year.len() != 4 {
      return Err(fail!("Invalid year length."));
    }
    if month.len() != 2 {
      return Err(fail!("Invalid month length."));
    }
    let year = year.parse::<u16>().map_err(|_| fail!("Failed to parse year"))?;
    let month = month.parse::<u8>().map_err(|_| fail!("Failed to parse month"))?;
    Self::new(year, month)
  }
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;
