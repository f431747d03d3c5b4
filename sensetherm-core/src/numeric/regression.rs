//! Least-squares straight line fit.

use libm::sqrt;

use crate::errors::{NumericError, NumericResult};

/// Result of [`linear_fit`]: `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Value at `x = 0`
    pub intercept: f64,
    /// Pearson correlation coefficient, `None` when `y` has no spread
    pub correlation: Option<f64>,
}

impl LinearFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a straight line through paired samples.
///
/// Two points define the line exactly and report a correlation of `±1`
/// following the sign of the slope (`None` for a flat line).
///
/// ```
/// use sensetherm_core::numeric::linear_fit;
///
/// let fit = linear_fit(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
/// assert_eq!((fit.slope, fit.intercept, fit.correlation), (2.0, 0.0, Some(1.0)));
/// ```
///
/// # Errors
///
/// - [`NumericError::LengthMismatch`] when the slices differ in length
/// - [`NumericError::InsufficientData`] for fewer than two samples
/// - [`NumericError::Degenerate`] when every `x` is the same
pub fn linear_fit(x: &[f64], y: &[f64]) -> NumericResult<LinearFit> {
    if x.len() != y.len() {
        return Err(NumericError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(NumericError::InsufficientData { required: 2, available: x.len() });
    }

    if x.len() == 2 {
        if x[0] == x[1] {
            return Err(NumericError::Degenerate { reason: "x values coincide" });
        }
        let slope = (y[0] - y[1]) / (x[0] - x[1]);
        let correlation = if slope > 0.0 {
            Some(1.0)
        } else if slope < 0.0 {
            Some(-1.0)
        } else {
            None
        };
        return Ok(LinearFit { slope, intercept: y[0] - slope * x[0], correlation });
    }

    let n = x.len() as f64;
    let (mut sum_x, mut sum_x2, mut sum_y, mut sum_y2, mut sum_xy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_x2 += xi * xi;
        sum_y += yi;
        sum_y2 += yi * yi;
        sum_xy += xi * yi;
    }

    let spread_x = n * sum_x2 - sum_x * sum_x;
    if spread_x == 0.0 {
        return Err(NumericError::Degenerate { reason: "x values coincide" });
    }
    let covariance = n * sum_xy - sum_x * sum_y;
    let slope = covariance / spread_x;
    let intercept = sum_y / n - slope * (sum_x / n);

    let spread = (n * sum_y2 - sum_y * sum_y) * spread_x;
    let correlation = (spread > 0.0).then(|| covariance / sqrt(spread));

    Ok(LinearFit { slope, intercept, correlation })
}
