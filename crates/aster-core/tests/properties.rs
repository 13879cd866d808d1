use aster_core::calendar::add_days;
use aster_core::{
    DateRange, DayFilterMode, Scale, WeekNumberingScheme, convert_scale, segment,
};
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid epoch")
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| add_days(epoch(), offset))
}

fn range(max_len: i64) -> impl Strategy<Value = DateRange> {
    (date(), 0i64..max_len).prop_map(|(start, len)| DateRange {
        start,
        end: add_days(start, len),
    })
}

fn scale() -> impl Strategy<Value = Scale> {
    prop_oneof![
        Just(Scale::Day),
        Just(Scale::Week),
        Just(Scale::Month),
        Just(Scale::Year),
    ]
}

fn scheme() -> impl Strategy<Value = WeekNumberingScheme> {
    prop_oneof![Just(WeekNumberingScheme::Iso), Just(WeekNumberingScheme::Us)]
}

fn filter() -> impl Strategy<Value = DayFilterMode> {
    prop_oneof![
        Just(DayFilterMode::All),
        Just(DayFilterMode::BusinessOnly),
        Just(DayFilterMode::WeekendOnly),
    ]
}

proptest! {
    #[test]
    fn segmentation_is_deterministic(
        r in range(900),
        s in scale(),
        w in scheme(),
        f in filter(),
    ) {
        let first = segment(r, s, w, f).expect("valid range");
        let second = segment(r, s, w, f).expect("valid range");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn day_columns_cover_every_day(r in range(400)) {
        let columns = segment(r, Scale::Day, WeekNumberingScheme::Iso, DayFilterMode::All)
            .expect("valid range");
        prop_assert_eq!(columns.len() as u64, r.len_days());
        for (offset, column) in columns.iter().enumerate() {
            prop_assert_eq!(column.start, add_days(r.start, offset as i64));
        }
    }

    #[test]
    fn day_filters_keep_the_right_weekdays(r in range(400)) {
        let business =
            segment(r, Scale::Day, WeekNumberingScheme::Iso, DayFilterMode::BusinessOnly)
                .expect("valid range");
        let weekend =
            segment(r, Scale::Day, WeekNumberingScheme::Iso, DayFilterMode::WeekendOnly)
                .expect("valid range");
        for column in &business {
            prop_assert!(!matches!(column.start.weekday(), Weekday::Sat | Weekday::Sun));
        }
        for column in &weekend {
            prop_assert!(matches!(column.start.weekday(), Weekday::Sat | Weekday::Sun));
        }
        prop_assert_eq!((business.len() + weekend.len()) as u64, r.len_days());
    }

    #[test]
    fn bucket_columns_are_clipped(
        r in range(2_000),
        s in prop_oneof![Just(Scale::Week), Just(Scale::Month), Just(Scale::Year)],
        w in scheme(),
    ) {
        let columns = segment(r, s, w, DayFilterMode::All).expect("valid range");
        let first = columns.first().expect("at least one column");
        prop_assert!(first.start <= r.start);
        prop_assert!(r.start <= first.natural_end);
        for column in &columns {
            prop_assert!(column.end <= r.end);
            prop_assert!(column.start <= column.end);
        }
        prop_assert_eq!(columns.last().map(|c| c.end), Some(r.end));
    }

    #[test]
    fn same_scale_conversion_is_identity(r in range(900), s in scale(), n in 0u32..60) {
        prop_assert_eq!(convert_scale(s, r, n, s), r);
    }

    #[test]
    fn conversion_preserves_column_count(
        r in range(900),
        from in scale(),
        to in scale(),
        w in scheme(),
        n in 1u32..40,
    ) {
        prop_assume!(from != to);
        let converted = convert_scale(from, r, n, to);
        prop_assert_eq!(converted.start, r.start);
        let columns = segment(converted, to, w, DayFilterMode::All).expect("valid range");
        prop_assert_eq!(columns.len(), n as usize);
    }
}
