//! Week numbering under the ISO 8601 and
//! US conventions, plus the three-week
//! picker shown when a range is chosen by
//! week.

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
use tracing::trace;

use crate::calendar::{
  add_days,
  end_of_week,
  start_of_week
};

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
pub enum WeekNumberingScheme {
  /// Monday-start weeks; week 1 holds the
  /// year's first Thursday.
  #[default]
  Iso,
  /// Sunday-start weeks; week 1 holds
  /// January 1.
  Us
}

impl WeekNumberingScheme {
  #[must_use]
  pub fn week_start(self) -> Weekday {
    match self {
      | Self::Iso => Weekday::Mon,
      | Self::Us => Weekday::Sun
    }
  }

  #[must_use]
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Iso => "iso",
      | Self::Us => "us"
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
      | "iso" => Some(Self::Iso),
      | "us" => Some(Self::Us),
      | _ => None
    }
  }
}

impl fmt::Display for WeekNumberingScheme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl FromStr for WeekNumberingScheme {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Self::from_key(s).ok_or_else(|| {
      anyhow!(
        "unknown week numbering: {s} \
         (expected iso or us)"
      )
    })
  }
}

/// Parses `monday`/`sunday` (and their
/// short forms) into a week-start day.
pub fn parse_week_start(
  raw: &str
) -> anyhow::Result<Weekday> {
  match raw
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "monday" | "mon" => Ok(Weekday::Mon),
    | "sunday" | "sun" => Ok(Weekday::Sun),
    | other => {
      Err(anyhow!(
        "unsupported week start: \
         {other} (expected monday or \
         sunday)"
      ))
    }
  }
}

/// Ordinal of the week holding `date`,
/// always `>= 1`.
#[must_use]
pub fn week_number(
  date: NaiveDate,
  scheme: WeekNumberingScheme
) -> u32 {
  let number = match scheme {
    | WeekNumberingScheme::Iso => {
      iso_week_number(date)
    }
    | WeekNumberingScheme::Us => {
      us_week_number(date)
    }
  };
  trace!(%date, %scheme, number, "computed week number");
  number
}

fn whole_weeks_between(
  from: NaiveDate,
  to: NaiveDate
) -> u32 {
  let days = (to - from).num_days();
  u32::try_from(days.div_euclid(7))
    .unwrap_or(0)
}

fn iso_week_number(
  date: NaiveDate
) -> u32 {
  // The Thursday decides which year owns
  // the week.
  let thursday = add_days(
    start_of_week(date, Weekday::Mon),
    3
  );
  let Some(jan_fourth) =
    NaiveDate::from_ymd_opt(
      thursday.year(),
      1,
      4
    )
  else {
    return 1;
  };
  let week_one =
    start_of_week(jan_fourth, Weekday::Mon);
  whole_weeks_between(week_one, thursday)
    + 1
}

fn us_week_number(
  date: NaiveDate
) -> u32 {
  let Some(jan_first) =
    NaiveDate::from_ymd_opt(
      date.year(),
      1,
      1
    )
  else {
    return 1;
  };
  let week_one =
    start_of_week(jan_first, Weekday::Sun);
  let own =
    start_of_week(date, Weekday::Sun);
  whole_weeks_between(week_one, own) + 1
}

/// One entry of the week picker.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize
)]
pub struct WeekInfo {
  pub number: u32,
  pub start:  NaiveDate,
  pub end:    NaiveDate
}

impl WeekInfo {
  #[must_use]
  pub fn containing(
    date: NaiveDate
  ) -> Self {
    Self {
      number: week_number(
        date,
        WeekNumberingScheme::Iso
      ),
      start:  start_of_week(
        date,
        Weekday::Mon
      ),
      end:    end_of_week(
        date,
        Weekday::Mon
      )
    }
  }
}

/// Previous, current and next Monday-start
/// week around `center`, numbered the ISO
/// way.
#[must_use]
pub fn week_selector(
  center: NaiveDate
) -> [WeekInfo; 3] {
  [-1, 0, 1].map(|offset| {
    WeekInfo::containing(shift_week(
      center, offset
    ))
  })
}

#[must_use]
pub fn shift_week(
  center: NaiveDate,
  step: i64
) -> NaiveDate {
  add_days(center, step.saturating_mul(7))
}
