use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::warn;

use crate::error::{
  Bound,
  InvalidRange
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive span of calendar days. Edits
/// build a new value rather than mutating
/// one in place.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize
)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end:   NaiveDate
}

impl DateRange {
  /// Builds a range and rejects
  /// `start > end`.
  pub fn new(
    start: NaiveDate,
    end: NaiveDate
  ) -> Result<Self, InvalidRange> {
    validate(Self { start, end })
  }

  /// Parses both bounds as `YYYY-MM-DD`
  /// (surrounding whitespace ignored), then
  /// validates the ordering.
  pub fn parse(
    start: &str,
    end: &str
  ) -> Result<Self, InvalidRange> {
    let start =
      parse_bound(start, Bound::Start)?;
    let end = parse_bound(end, Bound::End)?;
    Self::new(start, end)
  }

  #[must_use]
  pub fn with_start(
    self,
    start: NaiveDate
  ) -> Self {
    Self { start, ..self }
  }

  #[must_use]
  pub fn with_end(
    self,
    end: NaiveDate
  ) -> Self {
    Self { end, ..self }
  }

  /// Inclusive day count; zero for an
  /// inverted range.
  #[must_use]
  pub fn len_days(&self) -> u64 {
    let days =
      (self.end - self.start).num_days();
    u64::try_from(days + 1).unwrap_or(0)
  }

  #[must_use]
  pub fn contains(
    &self,
    date: NaiveDate
  ) -> bool {
    self.start <= date && date <= self.end
  }

  /// Header text such as
  /// `January 01-January 07`.
  #[must_use]
  pub fn summary(&self) -> String {
    format!(
      "{}-{}",
      self.start.format("%B %d"),
      self.end.format("%B %d")
    )
  }
}

impl std::fmt::Display for DateRange {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    write!(
      f,
      "{}..{}",
      self.start.format(DATE_FORMAT),
      self.end.format(DATE_FORMAT)
    )
  }
}

fn parse_bound(
  raw: &str,
  bound: Bound
) -> Result<NaiveDate, InvalidRange> {
  NaiveDate::parse_from_str(
    raw.trim(),
    DATE_FORMAT
  )
  .map_err(|err| {
    warn!(%bound, input = raw, error = %err, "unparseable range bound");
    InvalidRange::Unparseable {
      bound,
      input: raw.to_string()
    }
  })
}

/// Passes a well-ordered range through
/// untouched.
pub fn validate(
  range: DateRange
) -> Result<DateRange, InvalidRange> {
  if range.start > range.end {
    warn!(start = %range.start, end = %range.end, "rejecting inverted range");
    return Err(InvalidRange::Inverted {
      start: range.start,
      end:   range.end
    });
  }
  Ok(range)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    DateRange,
    validate
  };
  use crate::error::{
    Bound,
    InvalidRange
  };

  fn d(
    y: i32,
    m: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day)
      .expect("valid date")
  }

  #[test]
  fn parses_iso_dates() {
    let range = DateRange::parse(
      " 2024-01-01",
      "2024-01-07 "
    )
    .expect("valid range");
    assert_eq!(range.start, d(2024, 1, 1));
    assert_eq!(range.end, d(2024, 1, 7));
    assert_eq!(range.len_days(), 7);
  }

  #[test]
  fn single_day_range_is_valid() {
    let range = DateRange::new(
      d(2024, 2, 29),
      d(2024, 2, 29)
    )
    .expect("single day");
    assert_eq!(range.len_days(), 1);
  }

  #[test]
  fn rejects_unparseable_start() {
    let err = DateRange::parse(
      "yesterday",
      "2024-01-07"
    )
    .expect_err("bad start");
    assert_eq!(
      err,
      InvalidRange::Unparseable {
        bound: Bound::Start,
        input: "yesterday".to_string()
      }
    );
  }

  #[test]
  fn rejects_impossible_calendar_date() {
    let err = DateRange::parse(
      "2023-01-01",
      "2023-02-29"
    )
    .expect_err("no leap day in 2023");
    assert!(matches!(
      err,
      InvalidRange::Unparseable {
        bound: Bound::End,
        ..
      }
    ));
  }

  #[test]
  fn rejects_inverted_range() {
    let err = validate(DateRange {
      start: d(2024, 3, 10),
      end:   d(2024, 3, 1)
    })
    .expect_err("inverted");
    assert!(matches!(
      err,
      InvalidRange::Inverted { .. }
    ));
  }

  #[test]
  fn summary_and_display() {
    let range = DateRange::new(
      d(2024, 1, 1),
      d(2024, 1, 7)
    )
    .expect("valid");
    assert_eq!(
      range.summary(),
      "January 01-January 07"
    );
    assert_eq!(
      range.to_string(),
      "2024-01-01..2024-01-07"
    );
    assert!(range.contains(d(2024, 1, 7)));
    assert!(!range.contains(d(2024, 1, 8)));
  }
}
