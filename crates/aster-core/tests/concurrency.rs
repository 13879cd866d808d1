use std::thread;

use aster_core::timeline::{RangeKind, ScaleView};
use aster_core::week::WeekInfo;
use aster_core::{
    Column, DateRange, DayFilterMode, InvalidRange, Scale, Timeline, WeekNumberingScheme,
    segment,
};
use chrono::NaiveDate;

fn assert_shareable<T: Clone + Send + Sync>() {}

#[test]
fn engine_types_are_shareable_across_threads() {
    assert_shareable::<Column>();
    assert_shareable::<DateRange>();
    assert_shareable::<Scale>();
    assert_shareable::<WeekNumberingScheme>();
    assert_shareable::<DayFilterMode>();
    assert_shareable::<InvalidRange>();
    assert_shareable::<Timeline>();
    assert_shareable::<ScaleView>();
    assert_shareable::<RangeKind>();
    assert_shareable::<WeekInfo>();
}

#[test]
fn parallel_segmentation_matches_single_threaded() {
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2023, 11, 15).expect("valid start"),
        NaiveDate::from_ymd_opt(2025, 2, 10).expect("valid end"),
    )
    .expect("valid range");

    for scale in Scale::all() {
        for scheme in [WeekNumberingScheme::Iso, WeekNumberingScheme::Us] {
            let baseline =
                segment(range, scale, scheme, DayFilterMode::BusinessOnly).expect("baseline");
            let workers: Vec<_> = (0..8)
                .map(|_| {
                    thread::spawn(move || {
                        segment(range, scale, scheme, DayFilterMode::BusinessOnly)
                    })
                })
                .collect();
            for worker in workers {
                let columns = worker
                    .join()
                    .expect("worker finished")
                    .expect("valid range");
                assert_eq!(columns, baseline, "{scale} {scheme}");
            }
        }
    }
}

#[test]
fn shared_timeline_yields_identical_columns() {
    let timeline = Timeline::new(
        NaiveDate::from_ymd_opt(2024, 5, 16).expect("valid today"),
        chrono::Weekday::Mon,
    )
    .switch_scale(Scale::Month);
    let baseline = timeline.columns().expect("baseline");

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| timeline.columns()))
            .collect();
        for handle in handles {
            let columns = handle
                .join()
                .expect("worker finished")
                .expect("valid range");
            assert_eq!(columns, baseline);
        }
    });
}
