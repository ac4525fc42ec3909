use std::fmt::Display;

/// A representation of the day of the week.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
}

impl Weekday {
  const ALL: [Weekday; 7] = [
    Self::Sunday,
    Self::Monday,
    Self::Tuesday,
    Self::Wednesday,
    Self::Thursday,
    Self::Friday,
    Self::Saturday,
  ];

  /// The weekday for a count of days elapsed since 1970-01-01 (a Thursday).
  pub(crate) const fn from_days(days: i64) -> Self {
    Self::ALL[(days + 4).rem_euclid(7) as usize]
  }

  /// The weekday for the given ordinal, where 1 is Sunday and 7 is Saturday.
  pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
    match ordinal {
      1..=7 => Some(Self::ALL[ordinal as usize - 1]),
      _ => None,
    }
  }

  /// The ordinal of this weekday, from 1 (Sunday) through 7 (Saturday).
  ///
  /// The numbering does not depend on which day a week is considered to start on.
  #[inline]
  pub const fn ordinal(self) -> u8 {
    self as u8 + 1
  }

  /// The weekday `days` days after this one.
  pub const fn add_days(self, days: u8) -> Self {
    Self::ALL[(self as usize + days as usize) % 7]
  }

  /// The three-letter abbreviation for this weekday.
  pub const fn abbv(self) -> &'static str {
    self.label(WeekdayLabels::Abbreviated)
  }

  /// The label for this weekday in the given label set.
  pub const fn label(self, labels: WeekdayLabels) -> &'static str {
    let table = match labels {
      WeekdayLabels::Abbreviated => &ABBREVIATED,
      WeekdayLabels::Uppercase => &UPPERCASE,
      WeekdayLabels::Initial => &INITIAL,
      WeekdayLabels::Korean => &KOREAN,
    };
    table[self as usize]
  }
}

impl Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    macro_rules! display {
      ($($e:ident),*) => {
        f.write_str(match self {
          $(Self::$e => stringify!($e)),*
        })
      };
    }
    display!(Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday)
  }
}

const ABBREVIATED: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const UPPERCASE: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const INITIAL: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const KOREAN: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// The set of labels used for weekday column headers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeekdayLabels {
  /// Sun, Mon, Tue...
  #[default]
  Abbreviated,
  /// SUN, MON, TUE...
  Uppercase,
  /// S, M, T...
  Initial,
  /// 일, 월, 화...
  Korean,
}

/// The day on which each week-row of a calendar begins.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeekStart {
  #[default]
  Sunday,
  Monday,
}

impl WeekStart {
  /// The convention selected by a "starts with Monday" flag.
  pub const fn from_monday_flag(starts_with_monday: bool) -> Self {
    match starts_with_monday {
      true => Self::Monday,
      false => Self::Sunday,
    }
  }

  /// The weekday occupying the first column of a week-row.
  pub const fn first_day(self) -> Weekday {
    match self {
      Self::Sunday => Weekday::Sunday,
      Self::Monday => Weekday::Monday,
    }
  }

  /// The weekday occupying the last column of a week-row.
  pub const fn last_day(self) -> Weekday {
    match self {
      Self::Sunday => Weekday::Saturday,
      Self::Monday => Weekday::Sunday,
    }
  }

  /// The weekdays of a week-row, in column order.
  pub const fn columns(self) -> [Weekday; 7] {
    let first = self.first_day();
    let mut columns = [first; 7];
    let mut i = 1;
    while i < 7 {
      columns[i] = first.add_days(i as u8);
      i += 1;
    }
    columns
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_ordinals() {
    check!(Weekday::Sunday.ordinal() == 1);
    check!(Weekday::Monday.ordinal() == 2);
    check!(Weekday::Saturday.ordinal() == 7);
    for ordinal in 1..=7 {
      check!(Weekday::from_ordinal(ordinal).map(Weekday::ordinal) == Some(ordinal));
    }
    check!(Weekday::from_ordinal(0).is_none());
    check!(Weekday::from_ordinal(8).is_none());
  }

  #[test]
  fn test_from_days() {
    check!(Weekday::from_days(0) == Weekday::Thursday); // 1970-01-01
    check!(Weekday::from_days(-1) == Weekday::Wednesday);
    check!(Weekday::from_days(-4) == Weekday::Sunday);
    check!(Weekday::from_days(15_451) == Weekday::Saturday); // 2012-04-21
  }

  #[test]
  fn test_display() {
    for (weekday, weekday_str, weekday_abbv_str) in [
      (Weekday::Sunday, "Sunday", "Sun"),
      (Weekday::Monday, "Monday", "Mon"),
      (Weekday::Tuesday, "Tuesday", "Tue"),
      (Weekday::Wednesday, "Wednesday", "Wed"),
      (Weekday::Thursday, "Thursday", "Thu"),
      (Weekday::Friday, "Friday", "Fri"),
      (Weekday::Saturday, "Saturday", "Sat"),
    ] {
      check!(weekday.to_string() == weekday_str);
      check!(weekday.abbv() == weekday_abbv_str);
    }
  }

  #[test]
  fn test_labels() {
    check!(Weekday::Sunday.label(WeekdayLabels::Uppercase) == "SUN");
    check!(Weekday::Thursday.label(WeekdayLabels::Initial) == "T");
    check!(Weekday::Saturday.label(WeekdayLabels::Korean) == "토");
  }

  #[test]
  fn test_week_start() {
    check!(WeekStart::default() == WeekStart::Sunday);
    check!(WeekStart::from_monday_flag(true) == WeekStart::Monday);
    check!(WeekStart::Sunday.first_day().ordinal() == 1);
    check!(WeekStart::Sunday.last_day().ordinal() == 7);
    check!(WeekStart::Monday.first_day().ordinal() == 2);
    check!(WeekStart::Monday.last_day().ordinal() == 1);
    check!(WeekStart::Monday.columns()[0] == Weekday::Monday);
    check!(WeekStart::Monday.columns()[6] == Weekday::Sunday);
    check!(WeekStart::Sunday.columns()[6] == Weekday::Saturday);
  }
}
