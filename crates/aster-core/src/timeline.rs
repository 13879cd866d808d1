//! Per-scale view state owned by the
//! caller: each scale remembers its own
//! range and column count, and switching
//! scale carries the count across.

use std::collections::BTreeMap;

use chrono::{
  NaiveDate,
  Weekday
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

use crate::calendar::{
  end_of_week,
  start_of_week
};
use crate::column::Column;
use crate::convert::convert_scale;
use crate::error::InvalidRange;
use crate::filter::DayFilterMode;
use crate::range::DateRange;
use crate::scale::Scale;
use crate::segment::segment;
use crate::week::WeekNumberingScheme;

/// The week containing `today`, starting
/// on `week_start`.
#[must_use]
pub fn default_range(
  today: NaiveDate,
  week_start: Weekday
) -> DateRange {
  DateRange {
    start: start_of_week(today, week_start),
    end:   end_of_week(today, week_start)
  }
}

/// How the range of a view was chosen.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
  Week,
  Custom
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize
)]
pub struct ScaleView {
  pub range_kind:   RangeKind,
  pub range:        DateRange,
  pub column_count: u32
}

fn default_view(
  scale: Scale,
  range: DateRange
) -> ScaleView {
  let (range_kind, column_count) =
    match scale {
      | Scale::Day => (RangeKind::Custom, 7),
      | Scale::Week => (RangeKind::Week, 4),
      | Scale::Month => {
        (RangeKind::Custom, 3)
      }
      | Scale::Year => (RangeKind::Custom, 2)
    };
  ScaleView {
    range_kind,
    range,
    column_count
  }
}

/// Partial update of the active view.
/// `None` fields keep their value; a
/// column count of zero is ignored.
#[derive(Debug, Clone, Default)]
pub struct ViewEdit {
  pub start:        Option<NaiveDate>,
  pub end:          Option<NaiveDate>,
  pub range_kind:   Option<RangeKind>,
  pub column_count: Option<u32>
}

/// Immutable snapshot of every scale's view
/// plus the active display settings.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize
)]
pub struct Timeline {
  pub active: Scale,
  pub scheme: WeekNumberingScheme,
  pub filter: DayFilterMode,
  views:      BTreeMap<Scale, ScaleView>
}

impl Timeline {
  /// Seeds every scale with the week
  /// containing `today`.
  #[tracing::instrument]
  #[must_use]
  pub fn new(
    today: NaiveDate,
    week_start: Weekday
  ) -> Self {
    let range =
      default_range(today, week_start);
    let views = Scale::all()
      .into_iter()
      .map(|scale| {
        (scale, default_view(scale, range))
      })
      .collect();
    info!(%range, "seeded timeline");
    Self {
      active: Scale::default(),
      scheme: WeekNumberingScheme::default(),
      filter: DayFilterMode::default(),
      views
    }
  }

  #[must_use]
  pub fn view(
    &self,
    scale: Scale
  ) -> ScaleView {
    self
      .views
      .get(&scale)
      .copied()
      .unwrap_or_else(|| {
        let seed = self.active_view().range;
        default_view(scale, seed)
      })
  }

  #[must_use]
  pub fn active_view(&self) -> ScaleView {
    let fallback = DateRange {
      start: NaiveDate::default(),
      end:   NaiveDate::default()
    };
    self
      .views
      .get(&self.active)
      .copied()
      .unwrap_or_else(|| {
        default_view(self.active, fallback)
      })
  }

  /// Makes `to` active. The target view
  /// takes the converted range and the
  /// column count of the previous scale;
  /// its range kind is kept.
  #[tracing::instrument(skip(self), fields(from = %self.active))]
  #[must_use]
  pub fn switch_scale(
    &self,
    to: Scale
  ) -> Self {
    if to == self.active {
      return self.clone();
    }

    let previous = self.active_view();
    let range = convert_scale(
      self.active,
      previous.range,
      previous.column_count,
      to
    );
    let target = ScaleView {
      range,
      column_count: previous.column_count,
      ..self.view(to)
    };
    debug!(%to, %range, column_count = target.column_count, "switched scale");

    let mut next = self.clone();
    next.views.insert(to, target);
    next.active = to;
    next
  }

  #[tracing::instrument(skip(self))]
  #[must_use]
  pub fn edit(
    &self,
    edit: ViewEdit
  ) -> Self {
    let current = self.active_view();
    let mut range = current.range;
    if let Some(start) = edit.start {
      range = range.with_start(start);
    }
    if let Some(end) = edit.end {
      range = range.with_end(end);
    }
    let column_count = edit
      .column_count
      .filter(|count| *count > 0)
      .unwrap_or(current.column_count);

    let updated = ScaleView {
      range_kind: edit
        .range_kind
        .unwrap_or(current.range_kind),
      range,
      column_count
    };

    let mut next = self.clone();
    next.views.insert(self.active, updated);
    next
  }

  #[must_use]
  pub fn with_scheme(
    &self,
    scheme: WeekNumberingScheme
  ) -> Self {
    Self {
      scheme,
      ..self.clone()
    }
  }

  #[must_use]
  pub fn with_filter(
    &self,
    filter: DayFilterMode
  ) -> Self {
    Self {
      filter,
      ..self.clone()
    }
  }

  /// Columns for the active view.
  pub fn columns(
    &self
  ) -> Result<Vec<Column>, InvalidRange> {
    segment(
      self.active_view().range,
      self.active,
      self.scheme,
      self.filter
    )
  }
}
