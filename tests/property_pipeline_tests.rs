use proptest::prelude::*;

use quakeview::core::{
    CategoryToggles, EarthquakeRecord, MagnitudeCategory, SelectionRange, StackedSeries,
    YearDomain, aggregate_by_year, category_filter, filter_records, temporal_filter,
};

fn record_strategy() -> impl Strategy<Value = EarthquakeRecord> {
    (1960i32..2025, 3.0f64..9.8, -90.0f64..90.0, -180.0f64..180.0).prop_map(
        |(year, magnitude, latitude, longitude)| {
            EarthquakeRecord::new(format!("{year}/01/01 00:00:00"), latitude, longitude, magnitude)
        },
    )
}

fn toggles_strategy() -> impl Strategy<Value = CategoryToggles> {
    proptest::array::uniform4(any::<bool>()).prop_map(|flags| {
        MagnitudeCategory::ALL
            .into_iter()
            .zip(flags)
            .fold(CategoryToggles::none(), |toggles, (category, enabled)| {
                toggles.with(category, enabled)
            })
    })
}

proptest! {
    #[test]
    fn filter_order_does_not_matter(
        records in proptest::collection::vec(record_strategy(), 0..64),
        begin in 1960i32..2025,
        width in 0i32..20,
        toggles in toggles_strategy()
    ) {
        let range = SelectionRange::new(f64::from(begin), f64::from(begin + width));

        let time_first = category_filter(&temporal_filter(&records, range), toggles);
        let category_first = temporal_filter(&category_filter(&records, toggles), range);
        let combined = filter_records(&records, range, toggles);

        prop_assert_eq!(&time_first, &category_first);
        prop_assert_eq!(&time_first, &combined);
    }

    #[test]
    fn aggregation_is_dense_and_conserves_counts(
        records in proptest::collection::vec(record_strategy(), 0..64),
        min in 1960i32..2020,
        span in 0i32..30
    ) {
        let domain = YearDomain::new(min, min + span).expect("domain");
        let buckets = aggregate_by_year(&records, domain).expect("aggregate");

        prop_assert_eq!(buckets.len(), domain.len());
        for (bucket, year) in buckets.iter().zip(domain.years()) {
            prop_assert_eq!(bucket.year, year);
        }

        let in_domain = records
            .iter()
            .filter(|record| record.year().is_some_and(|year| domain.contains(year)))
            .count();
        let counted: u32 = buckets.iter().map(|bucket| bucket.total()).sum();
        prop_assert_eq!(counted as usize, in_domain);
    }

    #[test]
    fn stacked_layers_close_without_gaps(
        records in proptest::collection::vec(record_strategy(), 0..64)
    ) {
        let domain = YearDomain::new(1970, 2014).expect("domain");
        let buckets = aggregate_by_year(&records, domain).expect("aggregate");
        let stacked = StackedSeries::from_buckets(&buckets);

        for (index, bucket) in buckets.iter().enumerate() {
            let mut y = 0.0;
            for category in MagnitudeCategory::ALL {
                let band = stacked.layer(category)[index];
                prop_assert_eq!(band.y0, y);
                prop_assert_eq!(band.y1, band.y0 + f64::from(bucket.count(category)));
                y = band.y1;
            }
            prop_assert_eq!(y, f64::from(bucket.total()));
        }
    }
}
