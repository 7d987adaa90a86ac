//! Property-based tests for first paint aggregation
//!
//! Core properties:
//! 1. Segment durations keep timeline order for monotonic trials
//! 2. Each mean lies between the smallest and largest per-trial delta
//! 3. Rows of any length other than five are rejected

use first_paint::dataset::{Dataset, Millis, TIMESTAMPS_PER_TRIAL};
use first_paint::segments::{aggregate, Segment};
use first_paint::FirstPaintError;
use proptest::prelude::*;

const EPS: Millis = 1e-2;

/// A monotonic row: start plus four non-negative cumulative increments
fn monotonic_row() -> impl Strategy<Value = Vec<Millis>> {
    (0.0f32..100.0, prop::collection::vec(0.0f32..500.0, 4)).prop_map(|(start, steps)| {
        let mut row = vec![start];
        let mut t = start;
        for step in steps {
            t += step;
            row.push(t);
        }
        row
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_segments_follow_timeline(
        rows in prop::collection::vec(monotonic_row(), 1..6),
    ) {
        let dataset = Dataset::from_rows(vec![("lib", rows)]).unwrap();
        let summary = &aggregate(&dataset).unwrap()[0];

        prop_assert!(summary.prepare_data >= -EPS);
        prop_assert!(summary.prepare_data <= summary.data_ready + EPS);
        prop_assert!(summary.data_ready <= summary.finish + EPS);
        prop_assert!(summary.finish <= summary.fmp + EPS);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_mean_within_trial_bounds(
        rows in prop::collection::vec(monotonic_row(), 1..6),
    ) {
        let dataset = Dataset::from_rows(vec![("lib", rows.clone())]).unwrap();
        let summary = &aggregate(&dataset).unwrap()[0];

        for segment in Segment::ALL {
            let i = segment.timestamp_index();
            let deltas: Vec<Millis> = rows.iter().map(|r| r[i] - r[0]).collect();
            let lo = deltas.iter().cloned().fold(Millis::INFINITY, Millis::min);
            let hi = deltas.iter().cloned().fold(Millis::NEG_INFINITY, Millis::max);
            let value = summary.get(segment);
            prop_assert!(value >= lo - EPS && value <= hi + EPS,
                "{:?} = {} outside [{}, {}]", segment, value, lo, hi);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_wrong_row_length_rejected(
        len in (0usize..12).prop_filter("not five", |l| *l != TIMESTAMPS_PER_TRIAL),
    ) {
        let row: Vec<Millis> = (0..len).map(|i| i as Millis).collect();
        let result = Dataset::from_rows(vec![
            ("ok", vec![vec![0.0, 1.0, 2.0, 3.0, 4.0]]),
            ("bad", vec![row]),
        ]);

        match result {
            Err(FirstPaintError::MalformedTrial { library, found, .. }) => {
                prop_assert_eq!(library, "bad");
                prop_assert_eq!(found, len);
            }
            other => prop_assert!(false, "expected MalformedTrial, got {:?}", other),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_label_order_matches_insertion(
        names in prop::collection::hash_set("[A-Za-z]{1,8}", 1..6),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let rows: Vec<(String, Vec<Vec<Millis>>)> = names
            .iter()
            .map(|n| (n.clone(), vec![vec![0.0, 1.0, 2.0, 3.0, 4.0]]))
            .collect();
        let summaries = aggregate(&Dataset::from_rows(rows).unwrap()).unwrap();
        let labels: Vec<String> = summaries.into_iter().map(|s| s.library).collect();
        prop_assert_eq!(labels, names);
    }
}
