use std::fmt;

use crate::error::Error;
use crate::utils;

/// A month of the Gregorian calendar, numbered from 1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
  January = 1,
  February = 2,
  March = 3,
  April = 4,
  May = 5,
  June = 6,
  July = 7,
  August = 8,
  September = 9,
  October = 10,
  November = 11,
  December = 12,
}

impl Month {
  /// Every month, in calendar order.
  pub const ALL: [Month; 12] = [
    Self::January,
    Self::February,
    Self::March,
    Self::April,
    Self::May,
    Self::June,
    Self::July,
    Self::August,
    Self::September,
    Self::October,
    Self::November,
    Self::December,
  ];

  /// The month for the given month number, or `None` outside `1..=12`.
  pub const fn from_number(number: u8) -> Option<Self> {
    match number {
      1..=12 => Some(Self::ALL[number as usize - 1]),
      _ => None,
    }
  }

  /// The month number, starting from 1.
  #[inline]
  pub const fn number(self) -> u8 {
    self as u8
  }

  /// The number of days in this month of the given year.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::Month;
  /// assert_eq!(Month::February.days(2019), 28);
  /// assert_eq!(Month::February.days(2020), 29);
  /// assert_eq!(Month::September.days(2019), 30);
  /// ```
  #[inline]
  pub const fn days(self, year: u16) -> u8 {
    utils::days_in_month(self.number(), year)
  }

  /// The day of the year (1-indexed) for the given day of this month.
  ///
  /// The day is not bounded by the length of the month; a day past the end counts forward
  /// into the following months. The result saturates at `u32::MAX`.
  pub const fn day_of_year(self, day: u32, leap_year: bool) -> u32 {
    (utils::bounds(leap_year)[self.number() as usize - 1] as u32).saturating_add(day)
  }

  /// The following month, wrapping from December to January.
  pub const fn next(self) -> Self {
    Self::ALL[self.number() as usize % 12]
  }

  /// The preceding month, wrapping from January to December.
  pub const fn previous(self) -> Self {
    Self::ALL[(self.number() as usize + 10) % 12]
  }
}

macro_rules! month_str {
  ($($month:ident => $short:ident)*) => {
    impl Month {
      /// The English name of the month.
      pub const fn name(self) -> &'static str {
        match self {
          $(Self::$month => stringify!($month),)*
        }
      }

      /// The three-letter abbreviation of the month.
      pub const fn abbv(self) -> &'static str {
        match self {
          $(Self::$month => stringify!($short),)*
        }
      }
    }
  }
}
month_str! {
  January => Jan
  February => Feb
  March => Mar
  April => Apr
  May => May
  June => Jun
  July => Jul
  August => Aug
  September => Sep
  October => Oct
  November => Nov
  December => Dec
}

impl fmt::Display for Month {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl TryFrom<u8> for Month {
  type Error = Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::from_number(value).ok_or(Error::InvalidMonth(value))
  }
}

impl From<Month> for u8 {
  fn from(month: Month) -> Self {
    month.number()
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_from_number() {
    for (number, month) in (1..=12).zip(Month::ALL) {
      check!(Month::from_number(number) == Some(month));
      check!(month.number() == number);
    }
    check!(Month::from_number(0).is_none());
    check!(Month::from_number(13).is_none());
    check!(Month::try_from(13) == Err(Error::InvalidMonth(13)));
  }

  #[test]
  fn test_days() {
    let lengths: Vec<u8> = Month::ALL.iter().map(|m| m.days(2023)).collect();
    check!(lengths == [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    check!(Month::February.days(2024) == 29);
    check!(Month::February.days(1900) == 28);
    check!(Month::February.days(2000) == 29);
  }

  #[test]
  fn test_day_of_year() {
    check!(Month::January.day_of_year(1, false) == 1);
    check!(Month::February.day_of_year(1, false) == 32);
    check!(Month::March.day_of_year(1, false) == 60);
    check!(Month::March.day_of_year(1, true) == 61);
    check!(Month::September.day_of_year(8, false) == 251);
    check!(Month::December.day_of_year(31, false) == 365);
    check!(Month::December.day_of_year(31, true) == 366);
    check!(Month::January.day_of_year(40, false) == 40);
  }

  #[test]
  fn test_day_of_year_saturates() {
    check!(Month::January.day_of_year(u32::MAX, false) == u32::MAX);
    check!(Month::December.day_of_year(u32::MAX, false) == u32::MAX);
    check!(Month::December.day_of_year(u32::MAX - 400, true) == u32::MAX - 400 + 335);
  }

  #[test]
  fn test_next_previous() {
    check!(Month::January.next() == Month::February);
    check!(Month::December.next() == Month::January);
    check!(Month::January.previous() == Month::December);
    check!(Month::March.previous() == Month::February);
  }

  #[test]
  fn test_display() {
    check!(Month::September.to_string() == "September");
    check!(Month::September.abbv() == "Sep");
    check!(Month::May.abbv() == "May");
  }
}
