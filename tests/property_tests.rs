//! Property-based tests for the divergence estimate and the pipeline
//!
//! - Mathematical invariants of `estimate`
//! - All-or-nothing validation
//! - Result order follows column order

use proptest::prelude::*;
use rusty_chaos::data::model::{CellValue, RawColumn, RawTable};
use rusty_chaos::{analyze, estimate, validate, ValidationError, DEFAULT_DELTA};

// ============================================================================
// Strategies
// ============================================================================

fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1000.0f64..1000.0, 1..=max_len)
}

fn arb_delta() -> impl Strategy<Value = f64> {
    prop_oneof![Just(DEFAULT_DELTA), 1e-8f64..1.0]
}

/// Start value and length; the series is built by repeatedly adding delta.
fn arb_delta_walk() -> impl Strategy<Value = (f64, f64, usize)> {
    (-1000.0f64..1000.0, arb_delta(), 1usize..50)
}

/// Columns with unique names.
fn arb_table() -> impl Strategy<Value = Vec<(String, Vec<f64>)>> {
    proptest::collection::hash_set("[a-z]{1,8}", 1..6).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let n = names.len();
        (Just(names), proptest::collection::vec(arb_series(20), n))
            .prop_map(|(names, series)| {
                names
                    .into_iter()
                    .zip(series)
                    .collect::<Vec<(String, Vec<f64>)>>()
            })
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a single sample has mean 0 and points [0]
    #[test]
    fn prop_single_sample_is_zero(x in -1e6f64..1e6, delta in arb_delta()) {
        let d = estimate(&[x], delta);
        prop_assert_eq!(d.points, vec![0.0]);
        prop_assert_eq!(d.mean, 0.0);
    }

    /// Property: steps of exactly delta give all-zero points
    #[test]
    fn prop_delta_walk_is_flat((start, delta, len) in arb_delta_walk()) {
        let mut series = vec![start];
        for _ in 1..len {
            let prev = series[series.len() - 1];
            series.push(prev + delta);
        }

        let d = estimate(&series, delta);
        prop_assert!(d.points.iter().all(|&p| p == 0.0));
        prop_assert_eq!(d.mean, 0.0);
    }

    /// Property: a gap wider than delta gives a strictly positive point
    #[test]
    fn prop_wide_gap_is_positive(
        a in -100.0f64..100.0,
        gap in 1e-3f64..100.0,
        downward in any::<bool>(),
    ) {
        let perturbed = a + DEFAULT_DELTA;
        let b = if downward { perturbed - gap } else { perturbed + gap };
        prop_assume!((perturbed - b).abs() > DEFAULT_DELTA);

        let d = estimate(&[a, b], DEFAULT_DELTA);
        prop_assert!(d.points[1] > 0.0);
    }

    /// Property: points are index-aligned and start at 0
    #[test]
    fn prop_points_align_with_series(series in arb_series(100), delta in arb_delta()) {
        let d = estimate(&series, delta);
        prop_assert_eq!(d.points.len(), series.len());
        prop_assert_eq!(d.points[0], 0.0);
    }

    /// Property: mean is the sum of points divided by N
    #[test]
    fn prop_mean_divides_by_length(series in arb_series(100)) {
        let d = estimate(&series, DEFAULT_DELTA);
        let expected = d.points.iter().sum::<f64>() / series.len() as f64;
        prop_assert_eq!(d.mean.to_bits(), expected.to_bits());
    }

    /// Property: estimate is pure (bit-identical on repeat)
    #[test]
    fn prop_estimate_is_idempotent(series in arb_series(100), delta in arb_delta()) {
        let first = estimate(&series, delta);
        let second = estimate(&series, delta);
        prop_assert_eq!(first.mean.to_bits(), second.mean.to_bits());
        let first_bits: Vec<u64> = first.points.iter().map(|p| p.to_bits()).collect();
        let second_bits: Vec<u64> = second.points.iter().map(|p| p.to_bits()).collect();
        prop_assert_eq!(first_bits, second_bits);
    }

    /// Property: one missing cell anywhere rejects the whole table
    #[test]
    fn prop_missing_cell_rejects_table(
        columns in arb_table(),
        col_pick in any::<prop::sample::Index>(),
        row_pick in any::<prop::sample::Index>(),
    ) {
        let mut table = RawTable::from_numbers(columns);
        let col = col_pick.index(table.columns.len());
        let row = row_pick.index(table.columns[col].cells.len());
        table.columns[col].cells[row] = CellValue::Missing;

        let is_missing_value = matches!(
            validate(&table),
            Err(ValidationError::MissingValue { .. })
        );
        prop_assert!(is_missing_value);
    }

    /// Property: clean tables validate and results follow column order
    #[test]
    fn prop_results_follow_column_order(columns in arb_table()) {
        let names: Vec<String> = columns.iter().map(|(n, _)| n.clone()).collect();
        let table = RawTable::from_numbers(columns);
        let dataset = validate(&table).unwrap();
        let results = analyze(&dataset);

        prop_assert_eq!(results.names(), names.iter().map(String::as_str).collect::<Vec<_>>());
        for r in &results {
            prop_assert_eq!(r.chaotic, r.mean_divergence > 0.0);
        }
    }
}

#[test]
fn test_zero_columns_rejected() {
    let table = RawTable::new(Vec::<RawColumn>::new());
    assert_eq!(validate(&table), Err(ValidationError::EmptySchema));
}
