use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{
  add_calendar_months,
  add_calendar_years,
  add_days
};
use crate::range::DateRange;
use crate::scale::Scale;

/// Fixed per-column step of a scale.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq
)]
pub enum Increment {
  Days(i64),
  Months(i64),
  Years(i64)
}

impl Increment {
  #[must_use]
  pub fn of(scale: Scale) -> Self {
    match scale {
      | Scale::Day => Self::Days(1),
      | Scale::Week => Self::Days(7),
      | Scale::Month => Self::Months(1),
      | Scale::Year => Self::Years(1)
    }
  }

  /// Applies the step `times` over.
  #[must_use]
  pub fn advance(
    self,
    from: NaiveDate,
    times: i64
  ) -> NaiveDate {
    match self {
      | Self::Days(step) => {
        add_days(
          from,
          step.saturating_mul(times)
        )
      }
      | Self::Months(step) => {
        add_calendar_months(
          from,
          step.saturating_mul(times)
        )
      }
      | Self::Years(step) => {
        add_calendar_years(
          from,
          step.saturating_mul(times)
        )
      }
    }
  }
}

/// Remaps `range` for `to` so that the
/// same number of columns stays on screen.
/// The start is kept; the end becomes
/// `start + (column_count - 1)` steps of
/// the target scale. A count of zero is
/// treated as one column.
///
/// The range is not validated here.
#[tracing::instrument(level = "debug")]
#[must_use]
pub fn convert_scale(
  from: Scale,
  range: DateRange,
  column_count: u32,
  to: Scale
) -> DateRange {
  if from == to {
    return range;
  }

  let steps =
    i64::from(column_count.saturating_sub(1));
  let end =
    Increment::of(to).advance(range.start, steps);
  debug!(%from, %to, column_count, %end, "converted range");

  range.with_end(end)
}
