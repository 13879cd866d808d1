use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{
  Datelike,
  NaiveDate,
  Weekday
};
use serde::{
  Deserialize,
  Serialize
};

/// Which days of the week survive on the
/// day scale.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum DayFilterMode {
  #[default]
  All,
  #[serde(rename = "business")]
  BusinessOnly,
  #[serde(rename = "weekend")]
  WeekendOnly
}

impl DayFilterMode {
  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::BusinessOnly => "business",
      | Self::WeekendOnly => "weekend"
    }
  }

  #[must_use]
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Some(Self::All),
      | "business" | "businessonly"
      | "workdays" | "weekdays" => {
        Some(Self::BusinessOnly)
      }
      | "weekend" | "weekendonly"
      | "weekends" => {
        Some(Self::WeekendOnly)
      }
      | _ => None
    }
  }

  #[must_use]
  pub fn keep(
    self,
    date: NaiveDate
  ) -> bool {
    keep(date, self)
  }
}

impl fmt::Display for DayFilterMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for DayFilterMode {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Self::from_key(s).ok_or_else(|| {
      anyhow!(
        "unknown day filter: {s} \
         (expected all, business or \
         weekend)"
      )
    })
  }
}

fn is_weekend(weekday: Weekday) -> bool {
  matches!(
    weekday,
    Weekday::Sat | Weekday::Sun
  )
}

#[must_use]
pub fn keep(
  date: NaiveDate,
  mode: DayFilterMode
) -> bool {
  match mode {
    | DayFilterMode::All => true,
    | DayFilterMode::BusinessOnly => {
      !is_weekend(date.weekday())
    }
    | DayFilterMode::WeekendOnly => {
      is_weekend(date.weekday())
    }
  }
}
