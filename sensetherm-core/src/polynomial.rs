//! Polynomial evaluation in forward and reciprocal powers
//!
//! Coefficients are stored lowest order first. A positive order evaluates
//! `c0 + c1·x + … + cn·xⁿ`; a negative order evaluates the reciprocal
//! expansion `c0 + c1/x + … + cn/xⁿ`.
//!
//! Powers are accumulated with a running product instead of `powf`, which
//! keeps results bit-compatible with the reference instrument firmware.

use crate::errors::{NumericError, NumericResult};

/// Evaluate `coefficients` at `x` up to `|order|`.
///
/// Only the first `|order| + 1` coefficients are read.
///
/// # Errors
///
/// - [`NumericError::InsufficientData`] when fewer than `|order| + 1`
///   coefficients are supplied
/// - [`NumericError::UndefinedAtZero`] for a negative order at `x == 0`
///
/// ```
/// use sensetherm_core::polynomial::poly_value;
///
/// // 1 + 2x + 3x² at x = 2
/// assert_eq!(poly_value(&[1.0, 2.0, 3.0], 2.0, 2).unwrap(), 17.0);
/// // 1 + 2/x at x = 4
/// assert_eq!(poly_value(&[1.0, 2.0], 4.0, -1).unwrap(), 1.5);
/// ```
pub fn poly_value(coefficients: &[f64], x: f64, order: i32) -> NumericResult<f64> {
    let degree = order.unsigned_abs() as usize;
    if coefficients.len() <= degree {
        return Err(NumericError::InsufficientData {
            required: degree + 1,
            available: coefficients.len(),
        });
    }

    let constant = coefficients[0];
    if order == 0 {
        return Ok(constant);
    }
    if x == 0.0 {
        return if order > 0 {
            Ok(constant)
        } else {
            Err(NumericError::UndefinedAtZero)
        };
    }

    let mut sum = constant;
    let mut power = 1.0;
    for &c in &coefficients[1..=degree] {
        power *= x;
        if order > 0 {
            sum += c * power;
        } else {
            sum += c / power;
        }
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_zero_returns_constant() {
        assert_eq!(poly_value(&[4.5, 100.0], 3.0, 0), Ok(4.5));
    }

    #[test]
    fn forward_at_zero_short_circuits() {
        assert_eq!(poly_value(&[-2.0, 1.0, 1.0], 0.0, 2), Ok(-2.0));
    }

    #[test]
    fn reciprocal_at_zero_is_undefined() {
        assert_eq!(poly_value(&[1.0, 1.0], 0.0, -1), Err(NumericError::UndefinedAtZero));
    }

    #[test]
    fn forward_cubic() {
        // 1 - x + 0.5x² + 2x³ at x = -2 → 1 + 2 + 2 - 16
        assert_eq!(poly_value(&[1.0, -1.0, 0.5, 2.0], -2.0, 3), Ok(-11.0));
    }

    #[test]
    fn reciprocal_quadratic() {
        // 3 + 4/x + 8/x² at x = 2 → 3 + 2 + 2
        assert_eq!(poly_value(&[3.0, 4.0, 8.0], 2.0, -2), Ok(7.0));
    }

    #[test]
    fn extra_coefficients_ignored() {
        assert_eq!(poly_value(&[1.0, 1.0, 1000.0], 2.0, 1), Ok(3.0));
    }

    #[test]
    fn too_few_coefficients() {
        assert_eq!(
            poly_value(&[1.0, 2.0], 1.0, 3),
            Err(NumericError::InsufficientData { required: 4, available: 2 })
        );
        assert!(poly_value(&[], 1.0, 0).is_err());
    }
}
