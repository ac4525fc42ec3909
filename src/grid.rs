//! A render-ready model of one month of a calendar.
//!
//! [`MonthGrid`] combines the week partitioning of a month with the caller's configuration and
//! per-day data (holidays and schedules) supplied through a [`CalendarDelegate`]. Drawing the
//! grid is left to the presentation layer.

use crate::Weekday;
use crate::YearMonth;
use crate::error::Result;
use crate::weekday::WeekStart;
use crate::weekday::WeekdayLabels;

/// Options controlling how a month grid is assembled.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
  /// The weekday occupying the first column.
  pub week_start: WeekStart,
  /// Attach week-of-year numbers to rows.
  pub show_week_numbers: bool,
  /// Look up schedules for each day.
  pub show_schedules: bool,
  /// The label set for the header row.
  pub labels: WeekdayLabels,
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      week_start: WeekStart::Sunday,
      show_week_numbers: true,
      show_schedules: true,
      labels: WeekdayLabels::Abbreviated,
    }
  }
}

impl CalendarConfig {
  /// The header labels, in column order.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::CalendarConfig;
  /// use month_grid::WeekStart;
  ///
  /// let config = CalendarConfig { week_start: WeekStart::Monday, ..Default::default() };
  /// assert_eq!(config.header_labels(), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
  /// ```
  pub fn header_labels(&self) -> [&'static str; 7] {
    self.week_start.columns().map(|weekday| weekday.label(self.labels))
  }
}

/// A text annotation shown on a single day.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
  pub name: String,
  /// Text color, in whatever notation the presentation layer understands.
  pub color: Option<String>,
  pub background_color: Option<String>,
}

impl Schedule {
  /// A schedule with the given name and no colors.
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), ..Default::default() }
  }
}

/// Supplies per-day data for a month grid.
///
/// Every method has a default, so implementors only override what they need.
pub trait CalendarDelegate {
  /// Whether the given day should be marked as a holiday.
  fn is_holiday(&self, _year_month: YearMonth, _day: u8) -> bool {
    false
  }

  /// The schedule to show on the given day, if any.
  fn schedule(&self, _year_month: YearMonth, _day: u8) -> Option<Schedule> {
    None
  }
}

/// A delegate that supplies nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl CalendarDelegate for NoDelegate {}

/// A single cell of a month grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridCell {
  /// The day of the month, or `None` for a blank cell.
  pub day: Option<u8>,
  /// The weekday of this cell's column.
  pub weekday: Weekday,
  pub holiday: bool,
  pub schedule: Option<Schedule>,
}

/// One week-row of a month grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridRow {
  /// The week of the year, shown for rows that are numbered.
  pub week_number: Option<u8>,
  pub cells: [GridCell; 7],
}

impl GridRow {
  /// The days of the month in this row.
  pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
    self.cells.iter().filter_map(|cell| cell.day)
  }
}

/// A complete month, laid out as a header and four to six week-rows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
  pub year_month: YearMonth,
  pub header: [&'static str; 7],
  pub rows: Vec<GridRow>,
}

impl MonthGrid {
  /// Assemble the grid for a month.
  ///
  /// ## Examples
  ///
  /// ```
  /// use month_grid::CalendarConfig;
  /// use month_grid::MonthGrid;
  /// use month_grid::NoDelegate;
  /// use month_grid::YearMonth;
  ///
  /// let config = CalendarConfig::default();
  /// let grid = MonthGrid::build(YearMonth::new(2019, 9)?, &config, &NoDelegate)?;
  /// assert_eq!(grid.rows.len(), 5);
  /// assert_eq!(grid.rows[4].days().collect::<Vec<_>>(), [29, 30]);
  /// # Ok::<(), month_grid::Error>(())
  /// ```
  pub fn build(
    year_month: YearMonth,
    config: &CalendarConfig,
    delegate: &dyn CalendarDelegate,
  ) -> Result<Self> {
    let start = config.week_start;
    let weeks = year_month.number_of_weeks(start)?;
    log::debug!(
      year = year_month.year(),
      month = year_month.month().number(),
      weeks = weeks;
      "Building month grid"
    );

    let columns = start.columns();
    let rows = (1..=weeks)
      .map(|week| {
        let days = year_month.days_in_week_row(week, start);

        // Rows whose days are all in the first week of the month carry no number.
        let numbered = config.show_week_numbers && days.last().is_some_and(|&day| day > 7);
        let week_number = match numbered {
          true => year_month.week_of_year(week, start),
          false => None,
        };

        let cells =
          columns.map(|weekday| GridCell { day: None, weekday, holiday: false, schedule: None });
        let mut row = GridRow { week_number, cells };
        for (cell, day) in row.cells.iter_mut().zip(days) {
          if day == 0 {
            continue;
          }
          cell.day = Some(day);
          cell.holiday = delegate.is_holiday(year_month, day);
          if config.show_schedules {
            cell.schedule = delegate.schedule(year_month, day);
          }
        }
        row
      })
      .collect();

    Ok(Self { year_month, header: config.header_labels(), rows })
  }
}
