//! Integration tests for the generic numeric helpers

mod common;

use proptest::prelude::*;

use sensetherm_core::numeric::{linear_fit, linear_interpolate, sort_indices};
use sensetherm_core::polynomial::poly_value;
use sensetherm_core::{NumericError, SortOrder};

use common::assert_close;

#[test]
fn test_sort_indices_both_directions() {
    let data = [3.0, 1.0, 2.0];
    assert_eq!(sort_indices(&data, SortOrder::Ascending).unwrap(), vec![1, 2, 0]);
    assert_eq!(sort_indices(&data, SortOrder::Descending).unwrap(), vec![0, 2, 1]);
    assert_eq!(data, [3.0, 1.0, 2.0]);
}

#[test]
fn test_two_point_fit() {
    let fit = linear_fit(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
    assert_eq!(fit.slope, 2.0);
    assert_eq!(fit.intercept, 0.0);
    assert_eq!(fit.correlation, Some(1.0));
}

#[test]
fn test_fit_calibration_line() {
    // Strain gauge bridge: output mV against applied load
    let load = [0.0, 10.0, 20.0, 30.0, 40.0];
    let output = [0.02, 1.01, 2.03, 2.98, 4.01];
    let fit = linear_fit(&load, &output).unwrap();
    assert_close(fit.slope, 0.0995, 1e-9, "slope");
    assert_close(fit.intercept, 0.02, 1e-9, "intercept");
    assert!(fit.correlation.unwrap() > 0.999);
}

#[test]
fn test_interpolate_spec_points() {
    assert_eq!(linear_interpolate(&[0.0, 10.0], &[0.0, 100.0], 5.0), Ok(50.0));
    assert_eq!(
        linear_interpolate(&[0.0, 10.0], &[0.0, 100.0], -1.0),
        Err(NumericError::BelowRange { value: -1.0, min: 0.0 })
    );
    assert_eq!(
        linear_interpolate(&[0.0, 10.0], &[0.0], 5.0),
        Err(NumericError::LengthMismatch { x_len: 2, y_len: 1 })
    );
}

#[test]
fn test_interpolate_unsorted_table() {
    let x = [40.0, 0.0, 20.0, 10.0];
    let y = [4.0, 0.0, 2.0, 1.0];
    for (q, expected) in [(5.0, 0.5), (15.0, 1.5), (30.0, 3.0), (40.0, 4.0)] {
        assert_close(linear_interpolate(&x, &y, q).unwrap(), expected, 1e-12, "lookup");
    }
}

#[test]
fn test_poly_value_orders() {
    let c = [1.0, 2.0, 3.0];
    assert_eq!(poly_value(&c, 3.0, 0), Ok(1.0));
    assert_eq!(poly_value(&c, 0.0, 2), Ok(1.0));
    assert_eq!(poly_value(&c, 2.0, -2), Ok(1.0 + 1.0 + 0.75));
    assert_eq!(poly_value(&c, 0.0, -2), Err(NumericError::UndefinedAtZero));
    assert!(matches!(poly_value(&c, 1.0, 3), Err(NumericError::InsufficientData { .. })));
}

proptest! {
    #[test]
    fn prop_sorted_output_is_monotonic(data in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let up = sort_indices(&data, SortOrder::Ascending).unwrap();
        let down = sort_indices(&data, SortOrder::Descending).unwrap();
        prop_assert_eq!(up.len(), data.len());
        for pair in up.windows(2) {
            prop_assert!(data[pair[0]] <= data[pair[1]]);
        }
        for pair in down.windows(2) {
            prop_assert!(data[pair[0]] >= data[pair[1]]);
        }
        let mut seen = up.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..data.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_interpolation_stays_within_bracket(q in 0.0f64..100.0) {
        let x = [0.0, 25.0, 50.0, 75.0, 100.0];
        let y = [10.0, 30.0, 20.0, 40.0, 0.0];
        let v = linear_interpolate(&x, &y, q).unwrap();
        prop_assert!((0.0..=40.0).contains(&v));
    }
}
