//! Splits a validated range into ordered
//! columns at day, week, month or year
//! granularity.
//!
//! Week, month and year share one
//! bucket-and-clip walk: start at the
//! natural boundary at or before
//! `range.start`, step to the next boundary
//! until a bucket begins after `range.end`,
//! and clip each bucket's end to
//! `range.end`.

use chrono::{
  Datelike,
  NaiveDate
};
use tracing::{
  debug,
  trace
};

use crate::calendar::{
  add_calendar_months,
  add_calendar_years,
  add_days,
  days_inclusive,
  end_of_month,
  end_of_year,
  start_of_month,
  start_of_week,
  start_of_year
};
use crate::column::Column;
use crate::error::InvalidRange;
use crate::filter::DayFilterMode;
use crate::range::{
  DateRange,
  validate
};
use crate::scale::Scale;
use crate::week::{
  WeekNumberingScheme,
  week_number
};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A natural period and its clipped end.
#[derive(Debug, Clone, Copy)]
struct Bucket {
  start:       NaiveDate,
  natural_end: NaiveDate,
  end:         NaiveDate
}

/// Entry point for the rendering layer.
/// Either every column comes back or the
/// range is rejected.
#[tracing::instrument(
  level = "debug",
  fields(range = %range)
)]
pub fn segment(
  range: DateRange,
  scale: Scale,
  scheme: WeekNumberingScheme,
  filter: DayFilterMode
) -> Result<Vec<Column>, InvalidRange> {
  let range = validate(range)?;

  let columns = match scale {
    | Scale::Day => {
      segment_days(range, filter)
    }
    | Scale::Week => {
      segment_weeks(range, scheme)
    }
    | Scale::Month => {
      segment_months(range)
    }
    | Scale::Year => segment_years(range)
  };

  debug!(
    %scale,
    %scheme,
    %filter,
    columns = columns.len(),
    "segmented range"
  );
  Ok(columns)
}

/// One column per surviving day. A filter
/// that removes every day yields an empty
/// list.
#[must_use]
pub fn segment_days(
  range: DateRange,
  filter: DayFilterMode
) -> Vec<Column> {
  days_inclusive(range.start, range.end)
    .filter(|date| filter.keep(*date))
    .map(day_column)
    .collect()
}

fn day_column(date: NaiveDate) -> Column {
  Column {
    label:       date
      .format("%B %d")
      .to_string(),
    sublabel:    date
      .format("%A")
      .to_string(),
    key:         date
      .format(KEY_FORMAT)
      .to_string(),
    start:       date,
    end:         date,
    natural_end: date,
    day_labels:  None
  }
}

#[must_use]
pub fn segment_weeks(
  range: DateRange,
  scheme: WeekNumberingScheme
) -> Vec<Column> {
  let first = start_of_week(
    range.start,
    scheme.week_start()
  );
  buckets(
    range,
    first,
    |start| add_days(start, 6),
    |start| add_days(start, 7)
  )
  .into_iter()
  .map(|bucket| week_column(bucket, scheme))
  .collect()
}

fn week_column(
  bucket: Bucket,
  scheme: WeekNumberingScheme
) -> Column {
  let number =
    week_number(bucket.start, scheme);
  let day_labels = (0..7)
    .map(|offset| {
      add_days(bucket.start, offset)
        .format("%a %d")
        .to_string()
    })
    .collect();

  Column {
    label:       format!("Week {number}"),
    sublabel:    String::new(),
    key:         format!(
      "{}_{}",
      bucket.start.format(KEY_FORMAT),
      bucket.end.format(KEY_FORMAT)
    ),
    start:       bucket.start,
    end:         bucket.end,
    natural_end: bucket.natural_end,
    day_labels:  Some(day_labels)
  }
}

#[must_use]
pub fn segment_months(
  range: DateRange
) -> Vec<Column> {
  buckets(
    range,
    start_of_month(range.start),
    end_of_month,
    |start| add_calendar_months(start, 1)
  )
  .into_iter()
  .map(month_column)
  .collect()
}

fn month_column(bucket: Bucket) -> Column {
  let year = if bucket.start.year()
    != bucket.end.year()
  {
    bucket.end.year()
  } else {
    bucket.start.year()
  };

  Column {
    label:       bucket
      .start
      .format("%B")
      .to_string(),
    sublabel:    format!("{year:04}"),
    key:         bucket
      .start
      .format("%Y-%m")
      .to_string(),
    start:       bucket.start,
    end:         bucket.end,
    natural_end: bucket.natural_end,
    day_labels:  None
  }
}

#[must_use]
pub fn segment_years(
  range: DateRange
) -> Vec<Column> {
  buckets(
    range,
    start_of_year(range.start),
    end_of_year,
    |start| add_calendar_years(start, 1)
  )
  .into_iter()
  .map(|bucket| {
    let year = format!(
      "{:04}",
      bucket.start.year()
    );
    Column {
      label:       year.clone(),
      sublabel:    String::new(),
      key:         year,
      start:       bucket.start,
      end:         bucket.end,
      natural_end: bucket.natural_end,
      day_labels:  None
    }
  })
  .collect()
}

fn buckets(
  range: DateRange,
  first: NaiveDate,
  natural_end: impl Fn(NaiveDate) -> NaiveDate,
  next_start: impl Fn(NaiveDate) -> NaiveDate
) -> Vec<Bucket> {
  let mut out = Vec::new();
  let mut current = first;

  while current <= range.end {
    let natural = natural_end(current);
    let bucket = Bucket {
      start:       current,
      natural_end: natural,
      end:         natural.min(range.end)
    };
    trace!(start = %bucket.start, end = %bucket.end, "bucket");
    out.push(bucket);

    if natural >= range.end {
      break;
    }
    let next = next_start(current);
    // Saturated arithmetic at the end of
    // the calendar stops advancing.
    if next <= current {
      break;
    }
    current = next;
  }

  out
}
