use chrono::NaiveDate;

/// Which side of a range a parse failure
/// came from.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq
)]
pub enum Bound {
  Start,
  End
}

impl std::fmt::Display for Bound {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    match self {
      | Bound::Start => f.write_str("start"),
      | Bound::End => f.write_str("end")
    }
  }
}

/// The only failure the segmentation
/// engine reports.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error
)]
pub enum InvalidRange {
  /// A bound is not a calendar date.
  #[error(
    "invalid {bound} date: {input:?}"
  )]
  Unparseable {
    bound: Bound,
    input: String
  },

  /// `start` falls after `end`.
  #[error(
    "range start {start} is after end \
     {end}"
  )]
  Inverted {
    start: NaiveDate,
    end:   NaiveDate
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    Bound,
    InvalidRange
  };

  #[test]
  fn unparseable_message_names_bound() {
    let err = InvalidRange::Unparseable {
      bound: Bound::End,
      input: "2024-13-01".to_string()
    };
    assert_eq!(
      err.to_string(),
      "invalid end date: \"2024-13-01\""
    );
  }

  #[test]
  fn inverted_message_shows_both_dates() {
    let err = InvalidRange::Inverted {
      start: NaiveDate::from_ymd_opt(
        2024, 3, 10
      )
      .expect("valid date"),
      end:   NaiveDate::from_ymd_opt(
        2024, 3, 1
      )
      .expect("valid date")
    };
    assert_eq!(
      err.to_string(),
      "range start 2024-03-10 is after \
       end 2024-03-01"
    );
  }

  #[test]
  fn error_is_send_sync_std_error() {
    fn assert_impl<
      T: std::error::Error + Send + Sync
    >() {
    }
    assert_impl::<InvalidRange>();
  }
}
