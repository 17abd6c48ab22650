use std::collections::BTreeSet;

use chrono::NaiveDate;
use chrono::TimeDelta;
use proptest::prelude::*;

use crate::align::AlignedPoint;
use crate::align::align_to_axis;
use crate::axis::UnifiedDateAxis;
use crate::observation::DateKey;
use crate::observation::Metric;
use crate::observation::RawObservation;
use crate::range::RangeFilter;

fn day() -> impl Strategy<Value = NaiveDate> {
    (2023i32..=2024, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn date_key() -> impl Strategy<Value = DateKey> {
    day().prop_map(DateKey::from)
}

fn observation() -> impl Strategy<Value = RawObservation> {
    (
        date_key(),
        proptest::option::of(0.0f64..20_000.0),
        proptest::option::of(0.0f64..100.0),
        proptest::option::of(0.0f64..50.0),
    )
        .prop_map(|(date, steps, distance, eco)| RawObservation {
            date,
            steps,
            distance,
            eco,
        })
}

fn series() -> impl Strategy<Value = Vec<RawObservation>> {
    proptest::collection::vec(observation(), 0..24)
}

fn metric() -> impl Strategy<Value = Metric> {
    prop_oneof![Just(Metric::Steps), Just(Metric::Distance)]
}

fn points() -> impl Strategy<Value = Vec<AlignedPoint>> {
    proptest::collection::vec(
        (date_key(), 0.0f64..20_000.0, 0.0f64..50.0).prop_map(|(x, y, eco)| AlignedPoint {
            x,
            y,
            eco,
        }),
        0..24,
    )
}

proptest! {
    #[test]
    fn axis_is_the_sorted_union_of_both_series(first in series(), second in series()) {
        let axis = UnifiedDateAxis::build(&first, &second);
        let union: BTreeSet<&DateKey> = first.iter().chain(&second).map(|o| &o.date).collect();

        prop_assert_eq!(axis.len(), union.len());
        let dates = axis.as_slice();
        prop_assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(union.iter().all(|date| dates.binary_search(*date).is_ok()));
    }

    #[test]
    fn aligned_series_follows_the_axis(
        first in series(),
        second in series(),
        metric in metric(),
    ) {
        let axis = UnifiedDateAxis::build(&first, &second);

        for source in [&first, &second] {
            let aligned = align_to_axis(&axis, source, metric);

            prop_assert_eq!(aligned.len(), axis.len());

            for (point, date) in aligned.iter().zip(&axis) {
                prop_assert_eq!(&point.x, date);

                match source.iter().find(|o| &o.date == date) {
                    Some(observation) => {
                        prop_assert_eq!(point.y, metric.value(observation));
                        prop_assert_eq!(point.eco, observation.eco.unwrap_or_default());
                    }
                    None => {
                        prop_assert_eq!(point.y, 0.0);
                        prop_assert_eq!(point.eco, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn all_keeps_every_point(points in points(), today in day()) {
        prop_assert_eq!(RangeFilter::All.apply(points.clone(), today), points);
    }

    #[test]
    fn day_filter_is_idempotent(points in points(), days in -30i64..400, today in day()) {
        let filter = RangeFilter::LastDays(days);

        let once = filter.apply(points, today);
        let twice = filter.apply(once.clone(), today);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn day_filter_keeps_exactly_the_points_from_the_cutoff_on(
        points in points(),
        days in -30i64..400,
        today in day(),
    ) {
        let cutoff = DateKey::from(today - TimeDelta::days(days));
        let expected: Vec<AlignedPoint> =
            points.iter().filter(|p| p.x >= cutoff).cloned().collect();

        prop_assert_eq!(RangeFilter::LastDays(days).apply(points, today), expected);
    }
}
