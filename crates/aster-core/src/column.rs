use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

/// One displayed time bucket.
///
/// `start` is the natural start of the
/// bucket and `end` is its natural end
/// clipped to the requested range.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize
)]
pub struct Column {
  pub label:       String,
  #[serde(default)]
  pub sublabel:    String,
  pub key:         String,
  pub start:       NaiveDate,
  pub end:         NaiveDate,
  pub natural_end: NaiveDate,
  /// Seven `Mon 01` style labels across the
  /// unclipped week; week columns only.
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub day_labels:  Option<Vec<String>>
}

impl Column {
  #[must_use]
  pub fn is_clipped(&self) -> bool {
    self.end < self.natural_end
  }
}
