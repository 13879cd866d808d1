use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

/// Granularity of the displayed columns.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Default,
  Serialize,
  Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
  #[default]
  Day,
  Week,
  Month,
  Year
}

impl Scale {
  #[must_use]
  pub fn all() -> [Self; 4] {
    [
      Self::Day,
      Self::Week,
      Self::Month,
      Self::Year
    ]
  }

  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Week => "week",
      | Self::Month => "month",
      | Self::Year => "year"
    }
  }

  /// Accepts the key form, plurals, and
  /// `date` as an alias for the day scale.
  #[must_use]
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "day" | "date" | "days" => {
        Some(Self::Day)
      }
      | "week" | "weeks" => {
        Some(Self::Week)
      }
      | "month" | "months" => {
        Some(Self::Month)
      }
      | "year" | "years" => {
        Some(Self::Year)
      }
      | _ => None
    }
  }
}

impl fmt::Display for Scale {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for Scale {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Self::from_key(s).ok_or_else(|| {
      anyhow!(
        "unknown scale: {s} (expected \
         day, week, month or year)"
      )
    })
  }
}
