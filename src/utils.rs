/// The number of days preceding each month, as the day of the overall year, indexed from 0
/// (not 1).
///
/// Leap years are one value higher starting at index 2.
const BOUNDS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const LY_BOUNDS: [u16; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// The length of each month in a common year.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Return true if this is a leap year, false otherwise.
pub(crate) const fn is_leap_year(year: u16) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in the given month (1-indexed) of the given year.
pub(crate) const fn days_in_month(month: u8, year: u16) -> u8 {
  match month == 2 && is_leap_year(year) {
    true => 29,
    false => MONTH_DAYS[month as usize - 1],
  }
}

/// Return bounds adjusted appropriately if this is a leap year.
pub(crate) const fn bounds(leap_year: bool) -> &'static [u16; 12] {
  match leap_year {
    true => &LY_BOUNDS,
    false => &BOUNDS,
  }
}

/// The number of days between 1970-01-01 and the given civil date.
///
/// The algorithm is taken from here:
/// https://howardhinnant.github.io/date_algorithms.html#days_from_civil
pub(crate) const fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
  let year = year as i64 - if month <= 2 { 1 } else { 0 };
  let month = month as i64;
  let day = day as i64;
  let era = year.div_euclid(400);
  let year_of_era = year - era * 400;
  let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
  let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
  era * 146_097 + day_of_era - 719_468
}

/// The civil year and month containing the given number of days since 1970-01-01.
///
/// The algorithm is taken from here:
/// https://howardhinnant.github.io/date_algorithms.html#civil_from_days
pub(crate) const fn year_month_from_days(days: i64) -> (i64, u8) {
  let shifted = days + 719_468; // Days from March 1, 0 A.D.
  let era = shifted.div_euclid(146_097);
  let doe = shifted - era * 146_097; // day of era: [0, 146_097)
  let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
  let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
  let mp = (5 * day_of_year + 2) / 153;
  let month = if mp < 10 { mp + 3 } else { mp - 9 };
  (year_of_era + era * 400 + if month <= 2 { 1 } else { 0 }, month as u8)
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_leap_years() {
    check!(is_leap_year(2000));
    check!(is_leap_year(2024));
    check!(is_leap_year(4));
    check!(!is_leap_year(1900));
    check!(!is_leap_year(2023));
    check!(!is_leap_year(2100));
  }

  #[test]
  fn test_days_in_month() {
    check!(days_in_month(2, 2019) == 28);
    check!(days_in_month(2, 2020) == 29);
    check!(days_in_month(2, 1900) == 28);
    check!(days_in_month(9, 2019) == 30);
    check!(days_in_month(12, 2019) == 31);
  }

  #[test]
  fn test_bounds_match_month_lengths() {
    for leap_year in [false, true] {
      let year = if leap_year { 2024 } else { 2023 };
      let mut total = 0;
      for month in 1..=12u8 {
        check!(bounds(leap_year)[month as usize - 1] == total);
        total += days_in_month(month, year) as u16;
      }
    }
  }

  #[test]
  fn test_civil_round_trip() {
    check!(days_from_civil(1970, 1, 1) == 0);
    check!(days_from_civil(1969, 12, 31) == -1);
    check!(days_from_civil(2012, 4, 21) == 15_451);
    check!(days_from_civil(1, 1, 1) == -719_162);
    check!(year_month_from_days(15_451) == (2012, 4));
    check!(year_month_from_days(-1) == (1969, 12));
    check!(year_month_from_days(-719_162) == (1, 1));
  }
}
