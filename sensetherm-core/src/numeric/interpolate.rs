//! Piecewise-linear lookup over unsorted samples.

use libm::fabs;

use super::sort::{sort_indices, SortOrder};
use crate::errors::{NumericError, NumericResult};

/// Neighbours closer than this are treated as the same abscissa.
const MIN_INTERVAL: f64 = 1.0e-40;

/// Interpolate `y` at `query` between the two nearest samples of `x`.
///
/// `x` need not be sorted; samples are visited through [`sort_indices`].
/// A query equal to the smallest `x` returns its `y`.
///
/// ```
/// use sensetherm_core::numeric::linear_interpolate;
///
/// assert_eq!(linear_interpolate(&[0.0, 10.0], &[0.0, 100.0], 5.0).unwrap(), 50.0);
/// assert!(linear_interpolate(&[0.0, 10.0], &[0.0, 100.0], -1.0).is_err());
/// ```
///
/// # Errors
///
/// - [`NumericError::LengthMismatch`] when the slices differ in length
/// - [`NumericError::InsufficientData`] for fewer than two samples
/// - [`NumericError::BelowRange`] / [`NumericError::AboveRange`] outside `x`
/// - [`NumericError::Degenerate`] when the bracketing samples share an abscissa
pub fn linear_interpolate(x: &[f64], y: &[f64], query: f64) -> NumericResult<f64> {
    if x.len() != y.len() {
        return Err(NumericError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(NumericError::InsufficientData { required: 2, available: x.len() });
    }

    let order = sort_indices(x, SortOrder::Ascending)?;
    let first = order[0];
    let last = order[order.len() - 1];
    if query < x[first] {
        return Err(NumericError::BelowRange { value: query, min: x[first] });
    }
    if query > x[last] {
        return Err(NumericError::AboveRange { value: query, max: x[last] });
    }
    if query == x[first] {
        return Ok(y[first]);
    }

    let upper = order
        .iter()
        .position(|&i| query <= x[i])
        .ok_or(NumericError::Degenerate { reason: "query not bracketed" })?;
    let (lo, hi) = (order[upper - 1], order[upper]);
    let (x1, x2) = (x[lo], x[hi]);
    if fabs(x2 - x1) < MIN_INTERVAL {
        return Err(NumericError::Degenerate { reason: "bracketing samples share an abscissa" });
    }
    Ok((query - x1) / (x2 - x1) * (y[hi] - y[lo]) + y[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_ends() {
        let x = [0.0, 10.0];
        let y = [0.0, 100.0];
        assert_eq!(linear_interpolate(&x, &y, 5.0), Ok(50.0));
        assert_eq!(linear_interpolate(&x, &y, 0.0), Ok(0.0));
        assert_eq!(linear_interpolate(&x, &y, 10.0), Ok(100.0));
    }

    #[test]
    fn unsorted_input() {
        let x = [30.0, 10.0, 20.0];
        let y = [3.0, 1.0, 2.0];
        let v = linear_interpolate(&x, &y, 25.0).unwrap();
        assert!((v - 2.5).abs() < 1e-12);
        assert_eq!(linear_interpolate(&x, &y, 10.0), Ok(1.0));
    }

    #[test]
    fn out_of_range() {
        let x = [0.0, 10.0];
        let y = [0.0, 100.0];
        assert_eq!(
            linear_interpolate(&x, &y, -1.0),
            Err(NumericError::BelowRange { value: -1.0, min: 0.0 })
        );
        assert_eq!(
            linear_interpolate(&x, &y, 11.0),
            Err(NumericError::AboveRange { value: 11.0, max: 10.0 })
        );
    }

    #[test]
    fn duplicate_abscissa_uses_nearest_side() {
        // Left of the step reads the first duplicate, right of it the last
        let x = [0.0, 5.0, 5.0, 10.0];
        let y = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(linear_interpolate(&x, &y, 5.0), Ok(1.0));
        assert_eq!(linear_interpolate(&x, &y, 7.5), Ok(2.5));
    }

    #[test]
    fn too_few_samples() {
        assert!(matches!(
            linear_interpolate(&[1.0], &[1.0], 1.0),
            Err(NumericError::InsufficientData { required: 2, available: 1 })
        ));
    }
}
