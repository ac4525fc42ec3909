//! Partitioning of a month into the week-rows of a calendar grid.
//!
//! A week-row holds up to seven days. Rows are delimited by *anchor days*: the weekday a week
//! starts on (Sunday or Monday, per [`WeekStart`]) and the weekday it ends on. Day number 0 is
//! used as a blank cell before the 1st of the month.

use crate::Month;
use crate::Weekday;
use crate::YearMonth;
use crate::error::Error;
use crate::error::Result;
use crate::weekday::WeekStart;

impl YearMonth {
  /// The first day among the 1st through the 7th falling on the given weekday.
  fn first_day_on(&self, weekday: Weekday) -> Option<u8> {
    (1..=7).find(|&day| self.weekday(day as u32) == weekday)
  }

  /// The number of week-rows this month spans, between 4 and 6.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::WeekStart;
  /// use month_grid::YearMonth;
  ///
  /// let sep = YearMonth::new(2019, 9)?;
  /// assert_eq!(sep.number_of_weeks(WeekStart::Sunday)?, 5);
  /// assert_eq!(sep.number_of_weeks(WeekStart::Monday)?, 6);
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub fn number_of_weeks(&self, start: WeekStart) -> Result<u8> {
    let last_day = self.days();
    let first_anchor = self.first_day_on(start.first_day());
    let last_anchor =
      (last_day - 6..=last_day).find(|&day| self.weekday(day as u32) == start.last_day());
    let weeks = match (first_anchor, last_anchor) {
      (Some(first), Some(last)) => {
        let mut weeks = (last as u32 + 1).saturating_sub(first as u32) / 7;
        weeks += if first > 1 { 1 } else { 0 };
        weeks += if last < last_day { 1 } else { 0 };
        weeks
      },
      _ => 0,
    };
    match weeks {
      4..=6 => Ok(weeks as u8),
      _ => {
        let (year, month) = (self.year(), self.month().number());
        log::warn!(year = year, month = month, weeks = weeks; "Week count out of range");
        Err(Error::WeekCount { year, month, weeks })
      },
    }
  }

  /// The day numbers shown in the given week-row (1-indexed) of this month.
  ///
  /// The first row always holds exactly seven entries, with leading zeros for the columns
  /// before the 1st. Later rows start on the week's first weekday and stop at the end of the
  /// month, so the final row may hold fewer than seven entries; it is never padded. A week
  /// outside the month yields an empty row.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::WeekStart;
  /// use month_grid::YearMonth;
  ///
  /// let sep = YearMonth::new(2019, 9)?;
  /// assert_eq!(sep.days_in_week_row(1, WeekStart::Monday), [0, 0, 0, 0, 0, 0, 1]);
  /// assert_eq!(sep.days_in_week_row(5, WeekStart::Sunday), [29, 30]);
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub fn days_in_week_row(&self, week: u8, start: WeekStart) -> Vec<u8> {
    if week == 1 {
      // The first row runs through the first day a week ends on.
      if let Some(row_end) = self.first_day_on(start.last_day()) {
        let mut days = vec![0; 7 - row_end as usize];
        days.extend(1..=row_end);
        return days;
      }
    }
    let Some(row_start) = self.row_start_anchor(week, start) else {
      log::trace!(week = week; "No week-row at this index");
      return Vec::new();
    };
    let last_day = self.days();
    (row_start..=last_day).take(7).collect()
  }

  /// The day a given week-row (1-indexed) begins on, when that day falls on the week's first
  /// weekday.
  ///
  /// The first row only has such a day when the month itself begins on the week's first
  /// weekday; otherwise it is a partial week and this returns `None`. A week past the end of
  /// the month also returns `None`.
  pub fn row_start_anchor(&self, week: u8, start: WeekStart) -> Option<u8> {
    let first_anchor = self.first_day_on(start.first_day())?;
    if week == 0 {
      return None;
    }
    let anchors: Vec<u8> = (first_anchor..=self.days()).step_by(7).collect();
    match (first_anchor, week) {
      (1, 1) => Some(1),
      (1, week) => anchors.get(week as usize - 1).copied(),
      (_, 1) => None,
      (_, week) => anchors.get(week as usize - 2).copied(),
    }
  }

  /// The week of the year for the given week-row (1-indexed) of this month.
  ///
  /// Week 1 of the year is the one containing January 1st. The first row of a month never
  /// carries a number, so this returns `None` for `week == 1`, and for any week outside the
  /// month.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::WeekStart;
  /// use month_grid::YearMonth;
  ///
  /// let sep = YearMonth::new(2019, 9)?;
  /// assert_eq!(sep.week_of_year(1, WeekStart::Sunday), None);
  /// assert_eq!(sep.week_of_year(2, WeekStart::Sunday), Some(37));
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub fn week_of_year(&self, week: u8, start: WeekStart) -> Option<u8> {
    if week <= 1 {
      return None;
    }
    let january = YearMonth::from_parts(self.year(), Month::January).ok()?;
    let year_anchor = january.first_day_on(start.first_day())? as u32;
    let row_anchor = self.row_start_anchor(week, start)?;
    let day_of_year = self.month().day_of_year(row_anchor as u32, self.is_leap_year());
    let weeks_before = (day_of_year - year_anchor) / 7;
    let partial_first_week = if year_anchor == 1 { 0 } else { 1 };
    Some((weeks_before + 1 + partial_first_week) as u8)
  }
}
