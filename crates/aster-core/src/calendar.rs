//! Immutable calendar-date arithmetic.
//!
//! Every helper takes a date by value and
//! returns a new one. Results that would
//! leave chrono's representable range
//! saturate at `NaiveDate::MIN` /
//! `NaiveDate::MAX`.

use chrono::{
  Datelike,
  Days,
  Months,
  NaiveDate,
  Weekday
};

#[must_use]
pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  let magnitude = Days::new(
    days.unsigned_abs()
  );
  if days >= 0 {
    date
      .checked_add_days(magnitude)
      .unwrap_or(NaiveDate::MAX)
  } else {
    date
      .checked_sub_days(magnitude)
      .unwrap_or(NaiveDate::MIN)
  }
}

/// Moves by whole calendar months. The day
/// of month is clamped to the length of the
/// target month, so `01-31 + 1` lands on the
/// last day of February.
#[must_use]
pub fn add_calendar_months(
  date: NaiveDate,
  months: i64
) -> NaiveDate {
  let magnitude = u32::try_from(
    months.unsigned_abs()
  )
  .unwrap_or(u32::MAX);
  let magnitude = Months::new(magnitude);
  if months >= 0 {
    date
      .checked_add_months(magnitude)
      .unwrap_or(NaiveDate::MAX)
  } else {
    date
      .checked_sub_months(magnitude)
      .unwrap_or(NaiveDate::MIN)
  }
}

/// Moves by whole calendar years; Feb 29
/// becomes Feb 28 in non-leap targets.
#[must_use]
pub fn add_calendar_years(
  date: NaiveDate,
  years: i64
) -> NaiveDate {
  add_calendar_months(
    date,
    years.saturating_mul(12)
  )
}

/// Days between `week_start` and the
/// weekday of `date`, in `0..7`.
fn days_into_week(
  date: NaiveDate,
  week_start: Weekday
) -> i64 {
  let day = i64::from(
    date.weekday().num_days_from_monday()
  );
  let first = i64::from(
    week_start.num_days_from_monday()
  );
  (7 + day - first) % 7
}

#[must_use]
pub fn start_of_week(
  date: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    date,
    -days_into_week(date, week_start)
  )
}

#[must_use]
pub fn end_of_week(
  date: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  add_days(
    start_of_week(date, week_start),
    6
  )
}

#[must_use]
pub fn start_of_month(
  date: NaiveDate
) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

#[must_use]
pub fn end_of_month(
  date: NaiveDate
) -> NaiveDate {
  let next =
    add_calendar_months(
      start_of_month(date),
      1
    );
  next.pred_opt().unwrap_or(next)
}

#[must_use]
pub fn start_of_year(
  date: NaiveDate
) -> NaiveDate {
  date.with_ordinal(1).unwrap_or(date)
}

#[must_use]
pub fn end_of_year(
  date: NaiveDate
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    date.year(),
    12,
    31
  )
  .unwrap_or(date)
}

/// Inclusive walk from `start` to `end`.
/// Yields nothing when `start > end`.
pub fn days_inclusive(
  start: NaiveDate,
  end: NaiveDate
) -> impl Iterator<Item = NaiveDate> {
  start
    .iter_days()
    .take_while(move |day| *day <= end)
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    Weekday
  };

  use super::*;

  fn d(
    y: i32,
    m: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day)
      .expect("valid date")
  }

  #[test]
  fn add_days_crosses_month_and_year() {
    assert_eq!(
      add_days(d(2023, 12, 30), 3),
      d(2024, 1, 2)
    );
    assert_eq!(
      add_days(d(2024, 3, 1), -1),
      d(2024, 2, 29)
    );
  }

  #[test]
  fn add_days_saturates() {
    assert_eq!(
      add_days(NaiveDate::MAX, 1),
      NaiveDate::MAX
    );
    assert_eq!(
      add_days(NaiveDate::MIN, -1),
      NaiveDate::MIN
    );
  }

  #[test]
  fn month_addition_clamps_day() {
    assert_eq!(
      add_calendar_months(
        d(2024, 1, 31),
        1
      ),
      d(2024, 2, 29)
    );
    assert_eq!(
      add_calendar_months(
        d(2023, 1, 31),
        1
      ),
      d(2023, 2, 28)
    );
    assert_eq!(
      add_calendar_months(
        d(2024, 3, 31),
        -1
      ),
      d(2024, 2, 29)
    );
    assert_eq!(
      add_calendar_months(
        d(2024, 11, 15),
        2
      ),
      d(2025, 1, 15)
    );
  }

  #[test]
  fn year_addition_handles_leap_day() {
    assert_eq!(
      add_calendar_years(
        d(2024, 2, 29),
        1
      ),
      d(2025, 2, 28)
    );
    assert_eq!(
      add_calendar_years(
        d(2024, 2, 29),
        4
      ),
      d(2028, 2, 29)
    );
  }

  #[test]
  fn week_bounds_follow_week_start() {
    // 2024-01-03 is a Wednesday.
    let wed = d(2024, 1, 3);
    assert_eq!(
      start_of_week(wed, Weekday::Mon),
      d(2024, 1, 1)
    );
    assert_eq!(
      end_of_week(wed, Weekday::Mon),
      d(2024, 1, 7)
    );
    assert_eq!(
      start_of_week(wed, Weekday::Sun),
      d(2023, 12, 31)
    );
    assert_eq!(
      end_of_week(wed, Weekday::Sun),
      d(2024, 1, 6)
    );
  }

  #[test]
  fn week_start_is_idempotent_on_first_day()
   {
    let sunday = d(2023, 1, 1);
    assert_eq!(
      start_of_week(sunday, Weekday::Sun),
      sunday
    );
    assert_eq!(
      start_of_week(sunday, Weekday::Mon),
      d(2022, 12, 26)
    );
  }

  #[test]
  fn month_and_year_bounds() {
    assert_eq!(
      start_of_month(d(2024, 2, 17)),
      d(2024, 2, 1)
    );
    assert_eq!(
      end_of_month(d(2024, 2, 17)),
      d(2024, 2, 29)
    );
    assert_eq!(
      end_of_month(d(2023, 12, 5)),
      d(2023, 12, 31)
    );
    assert_eq!(
      start_of_year(d(2024, 7, 4)),
      d(2024, 1, 1)
    );
    assert_eq!(
      end_of_year(d(2024, 7, 4)),
      d(2024, 12, 31)
    );
  }

  #[test]
  fn inclusive_day_walk() {
    let days: Vec<_> = days_inclusive(
      d(2024, 2, 27),
      d(2024, 3, 1)
    )
    .collect();
    assert_eq!(days.len(), 4);
    assert_eq!(days[2], d(2024, 2, 29));
    assert_eq!(
      days_inclusive(
        d(2024, 3, 2),
        d(2024, 3, 1)
      )
      .count(),
      0
    );
  }
}
