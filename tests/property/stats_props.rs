//! Statistics and probe search properties.

use doclocate::bench::probe::{binary_search, galloping_search, sequential_search};
use doclocate::bench::summarize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_quartiles_ordered(mut samples in prop::collection::vec(0.0f64..1e6, 2..200)) {
        let summary = summarize(&mut samples).unwrap();
        let q = summary.quartiles;
        prop_assert!(q.windows(2).all(|w| w[0] <= w[1]), "{:?}", q);
        let slack = 1e-9 * q[4].abs().max(1.0);
        prop_assert!(summary.mean >= q[0] - slack && summary.mean <= q[4] + slack);
        prop_assert!(summary.stdev >= 0.0);
    }

    #[test]
    fn prop_extremes_are_min_and_max(mut samples in prop::collection::vec(-1e3f64..1e3, 2..100)) {
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let summary = summarize(&mut samples).unwrap();
        prop_assert_eq!(summary.quartiles[0], min);
        prop_assert_eq!(summary.quartiles[4], max);
    }

    #[test]
    fn prop_probe_searches_agree(
        values in prop::collection::btree_set(-1000i64..1000, 0..300),
        target in -1100i64..1100,
    ) {
        let data: Vec<i64> = values.into_iter().collect();
        let expected = sequential_search(&data, target);
        prop_assert_eq!(binary_search(&data, target), expected);
        prop_assert_eq!(galloping_search(&data, target), expected);
    }
}
