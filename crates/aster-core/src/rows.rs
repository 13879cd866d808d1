use chrono::{
  NaiveDate,
  Weekday
};

use crate::calendar::{
  add_calendar_months,
  add_days,
  start_of_week,
  start_of_year
};
use crate::scale::Scale;

pub const DEFAULT_SEGMENTS: usize = 24;

/// Axis labels drawn beside the grid,
/// always exactly `segments` of them.
///
/// Day rows are hours, week rows are
/// weekdays from the Monday of `start`,
/// month rows are numbered weeks and year
/// rows are months from January of
/// `start`'s year.
#[must_use]
pub fn row_labels(
  scale: Scale,
  start: NaiveDate,
  segments: usize
) -> Vec<String> {
  match scale {
    | Scale::Day => {
      (0..segments)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
    }
    | Scale::Week => {
      let monday =
        start_of_week(start, Weekday::Mon);
      (0..segments)
        .map(|offset| {
          add_days(
            monday,
            i64::try_from(offset)
              .unwrap_or(i64::MAX)
          )
            .format("%a")
            .to_string()
        })
        .collect()
    }
    | Scale::Month => {
      (1..=segments)
        .map(|week| format!("Week {week}"))
        .collect()
    }
    | Scale::Year => {
      let january = start_of_year(start);
      (0..segments)
        .map(|offset| {
          add_calendar_months(
            january,
            i64::try_from(offset)
              .unwrap_or(i64::MAX)
          )
          .format("%b")
          .to_string()
        })
        .collect()
    }
  }
}
