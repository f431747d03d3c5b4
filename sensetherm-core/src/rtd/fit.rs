//! Direct polynomial fit of temperature against `R/R0` for α = 0.00385 sensors.
//!
//! A 5th-order least-squares fit of the IEC 60751 curve, split at the ice
//! point. It avoids bisection below 0 °C at the cost of accuracy (worst case
//! about 0.0025 °C over -200..850 °C). Only valid for standard-coefficient sensors.

#![allow(clippy::excessive_precision)]

use crate::constants::{RTD_MAX_RATIO, RTD_MIN_RATIO};
use crate::errors::{ConversionError, ConversionResult};
use crate::polynomial::poly_value;
use crate::units::TemperatureUnit;

/// °C as a function of `R/R0` below the ice point.
const BELOW_ICE: [f64; 6] = [
    -242.01992875749800,
    222.28124921393300,
    2.58588550459902E+01,
    -4.82604183294947E+00,
    -2.81833863095458E+00,
    1.52425906434655E+00,
];

/// °C as a function of `R/R0` at and above the ice point.
const ABOVE_ICE: [f64; 6] = [
    -247.20591701840700,
    2.39445086335996E+02,
    6.74989295331761E+00,
    1.10818800562992E+00,
    -1.23766399221495E-01,
    2.43332658428699E-02,
];

/// Largest deviation of the fit from the exact inverse (°C).
pub const MAX_FIT_ERROR_C: f64 = 0.0025;

/// Temperature from resistance using the ratio fit.
///
/// # Errors
///
/// - [`ConversionError::InvalidCalibration`] for `r0 <= 0`
/// - [`ConversionError::OutOfRange`] for non-positive resistance or a ratio
///   outside the standard curve
pub fn temperature_from_ratio(ohms: f64, r0: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
    if r0 <= 0.0 {
        return Err(ConversionError::InvalidCalibration {
            reason: "reference resistance must be positive",
        });
    }
    let ratio = ohms / r0;
    if ohms <= 0.0 || !(RTD_MIN_RATIO..=RTD_MAX_RATIO).contains(&ratio) {
        return Err(ConversionError::OutOfRange {
            value: ohms,
            min: r0 * RTD_MIN_RATIO,
            max: r0 * RTD_MAX_RATIO,
        });
    }
    if ratio == 1.0 {
        return Ok(unit.ice_point());
    }

    let coefficients = if ratio < 1.0 { &BELOW_ICE } else { &ABOVE_ICE };
    let celsius = poly_value(coefficients, ratio, 5).map_err(|_| ConversionError::InvalidCalibration {
        reason: "ratio fit table incomplete",
    })?;
    Ok(unit.from_celsius(celsius))
}
