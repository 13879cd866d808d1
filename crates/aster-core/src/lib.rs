//! Date-range segmentation for calendar
//! column views.
//!
//! The engine ([`segment()`],
//! [`convert_scale`], [`week_number`]) is
//! pure: every call is a function of its
//! arguments alone. [`run`] wraps it in a
//! small CLI with rc-file config and
//! tracing.

pub mod calendar;
pub mod cli;
pub mod column;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod range;
pub mod render;
pub mod rows;
pub mod scale;
pub mod segment;
pub mod timeline;
pub mod week;

use std::ffi::OsString;

use anyhow::Context;
use chrono::{
  Local,
  NaiveDate
};
use clap::Parser;
use tracing::{
  debug,
  info
};

pub use crate::column::Column;
pub use crate::convert::convert_scale;
pub use crate::error::InvalidRange;
pub use crate::filter::DayFilterMode;
pub use crate::range::DateRange;
pub use crate::scale::Scale;
pub use crate::segment::segment;
pub use crate::timeline::Timeline;
pub use crate::week::{
  WeekNumberingScheme,
  week_number
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting aster CLI"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.asterrc.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );

  let defaults = cfg
    .engine_defaults()
    .context("invalid asterrc settings")?;
  let mut renderer =
    render::Renderer::new(&cfg, cli.json)?;

  dispatch(
    cli.command,
    &defaults,
    &mut renderer
  )?;

  info!("done");
  Ok(())
}

/// The wall clock is read here and nowhere
/// in the engine.
fn today() -> NaiveDate {
  Local::now().date_naive()
}

#[tracing::instrument(skip(
  defaults, renderer
))]
fn dispatch(
  command: cli::Command,
  defaults: &config::EngineDefaults,
  renderer: &mut render::Renderer
) -> anyhow::Result<()> {
  match command {
    | cli::Command::Columns {
      start,
      end,
      scale,
      scheme,
      filter
    } => {
      let range =
        DateRange::parse(&start, &end)?;
      let columns = segment(
        range,
        scale.unwrap_or(defaults.scale),
        scheme.unwrap_or(defaults.scheme),
        filter.unwrap_or(defaults.filter)
      )?;
      renderer.print_columns(&columns)
    }
    | cli::Command::Convert {
      from,
      to,
      start,
      end,
      columns
    } => {
      let range =
        DateRange::new(start, end)?;
      let converted = convert_scale(
        from, range, columns, to
      );
      renderer.print_range(&converted)
    }
    | cli::Command::WeekNumber {
      date,
      scheme
    } => {
      let number = week_number(
        date,
        scheme.unwrap_or(defaults.scheme)
      );
      renderer.print_week_number(number)
    }
    | cli::Command::DefaultRange {
      today: given,
      week_start
    } => {
      let week_start = match week_start {
        | Some(raw) => {
          week::parse_week_start(&raw)?
        }
        | None => defaults.week_start
      };
      let range = timeline::default_range(
        given.unwrap_or_else(today),
        week_start
      );
      renderer.print_range(&range)
    }
    | cli::Command::Rows {
      scale,
      start,
      segments
    } => {
      let labels = rows::row_labels(
        scale.unwrap_or(defaults.scale),
        start.unwrap_or_else(today),
        segments
          .unwrap_or(defaults.segments)
      );
      renderer.print_labels(&labels)
    }
    | cli::Command::Weeks { center } => {
      let weeks = week::week_selector(
        center.unwrap_or_else(today)
      );
      renderer.print_weeks(&weeks, 1)
    }
  }
}
