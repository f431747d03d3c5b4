//! Zero-sentinel entry points for legacy call sites.
//!
//! Instrument software built against the older engineering library expects
//! plain `f64` returns, with the domain zero (0 °F, 0 °C, 0 V, 0 Ω) standing in
//! for every failure. These wrappers reproduce that contract on top of the
//! `Result` API, quirks included:
//!
//! - 0 °F is rejected as an input wherever the legacy code rejected it
//! - a cold-junction reference of exactly 0 °F is treated as "unset"
//! - a reference offset of exactly 0 V fails the composed conversion
//! - `rtd_celsius_to_ohms` answers `R0` at 0 °C before validating `R0`
//!
//! The numeric helpers return the legacy integer status codes (`0` for
//! success, see [`crate::NumericError::code`]).
//!
//! New code should call the typed API directly; a returned `0.0` here cannot
//! be told apart from a genuine reading.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::ConversionResult;
use crate::numeric::{self, SortOrder};
use crate::polynomial;
use crate::rtd::{fit, CallendarVanDusen, PlatinumRtd, Rtd};
use crate::thermocouple::ThermocoupleType;
use crate::units::TemperatureUnit::{self, Celsius, Fahrenheit};

#[inline]
fn or_zero(result: ConversionResult<f64>) -> f64 {
    result.unwrap_or(0.0)
}

// Thermocouples

/// EMF (volts, ice-point reference) to °F; `0.0` on failure.
pub fn tc_volts_to_fahrenheit(tc: ThermocoupleType, volts: f64) -> f64 {
    or_zero(tc.volts_to_temperature(volts, Fahrenheit))
}

/// EMF (volts, ice-point reference) to °C; `0.0` on failure.
pub fn tc_volts_to_celsius(tc: ThermocoupleType, volts: f64) -> f64 {
    or_zero(tc.volts_to_temperature(volts, Celsius))
}

/// °F to EMF (volts); `0.0` on failure and at 0 °F.
pub fn tc_fahrenheit_to_volts(tc: ThermocoupleType, temperature: f64) -> f64 {
    if temperature == 0.0 {
        return 0.0;
    }
    or_zero(tc.temperature_to_volts(temperature, Fahrenheit))
}

/// °C to EMF (volts); `0.0` on failure.
pub fn tc_celsius_to_volts(tc: ThermocoupleType, temperature: f64) -> f64 {
    or_zero(tc.temperature_to_volts(temperature, Celsius))
}

/// EMF against a reference junction at `reference` °F, to °F.
///
/// Returns `0.0` when `reference` is `0.0` (unset), when `volts` is `0.0`, and
/// when the reference offset itself comes back as `0.0`.
pub fn tc_volts_to_fahrenheit_referenced(tc: ThermocoupleType, volts: f64, reference: f64) -> f64 {
    if reference == 0.0 || volts == 0.0 {
        return 0.0;
    }
    referenced(tc, volts, reference, Fahrenheit)
}

/// EMF against a reference junction at `reference` °C, to °C.
///
/// A `reference` of `0.0` is the ice point and converts directly.
pub fn tc_volts_to_celsius_referenced(tc: ThermocoupleType, volts: f64, reference: f64) -> f64 {
    if volts == 0.0 {
        return 0.0;
    }
    referenced(tc, volts, reference, Celsius)
}

fn referenced(tc: ThermocoupleType, volts: f64, reference: f64, unit: TemperatureUnit) -> f64 {
    if reference == unit.ice_point() {
        return or_zero(tc.volts_to_temperature(volts, unit));
    }
    let offset = match unit {
        Celsius => tc_celsius_to_volts(tc, reference),
        Fahrenheit => tc_fahrenheit_to_volts(tc, reference),
    };
    if offset == 0.0 {
        return 0.0;
    }
    or_zero(tc.volts_to_temperature(offset + volts, unit))
}

// Platinum RTDs

/// Callendar-Van Dusen resistance at `temperature` °C; `0.0` on failure.
///
/// 0 °C returns `r0` unchecked. All-zero coefficients select IEC 60751.
pub fn rtd_celsius_to_ohms(temperature: f64, r0: f64, a: f64, b: f64, c: f64) -> f64 {
    if temperature == 0.0 {
        return r0;
    }
    or_zero(Rtd::new(r0, CallendarVanDusen::new(a, b, c)).resistance(temperature, Celsius))
}

/// Callendar-Van Dusen resistance at `temperature` °F; `0.0` on failure and at 0 °F.
pub fn rtd_fahrenheit_to_ohms(temperature: f64, r0: f64, a: f64, b: f64, c: f64) -> f64 {
    if temperature == 0.0 {
        return 0.0;
    }
    or_zero(Rtd::new(r0, CallendarVanDusen::new(a, b, c)).resistance(temperature, Fahrenheit))
}

/// Temperature (°C) at `ohms`; `0.0` on failure, including non-convergence.
pub fn rtd_ohms_to_celsius(ohms: f64, r0: f64, a: f64, b: f64, c: f64) -> f64 {
    or_zero(Rtd::new(r0, CallendarVanDusen::new(a, b, c)).temperature(ohms, Celsius))
}

/// Temperature (°F) at `ohms`; `0.0` on failure, including non-convergence.
pub fn rtd_ohms_to_fahrenheit(ohms: f64, r0: f64, a: f64, b: f64, c: f64) -> f64 {
    or_zero(Rtd::new(r0, CallendarVanDusen::new(a, b, c)).temperature(ohms, Fahrenheit))
}

/// Standard sensor resistance at `temperature` °C; `0.0` on failure.
pub fn platinum_celsius_to_ohms(sensor: PlatinumRtd, temperature: f64) -> f64 {
    or_zero(sensor.resistance(temperature, Celsius))
}

/// Standard sensor resistance at `temperature` °F; `0.0` on failure and at 0 °F.
pub fn platinum_fahrenheit_to_ohms(sensor: PlatinumRtd, temperature: f64) -> f64 {
    if temperature == 0.0 {
        return 0.0;
    }
    or_zero(sensor.resistance(temperature, Fahrenheit))
}

/// Standard sensor temperature (°C) at `ohms`; `0.0` on failure.
pub fn platinum_ohms_to_celsius(sensor: PlatinumRtd, ohms: f64) -> f64 {
    or_zero(sensor.temperature(ohms, Celsius))
}

/// Standard sensor temperature (°F) at `ohms`; `0.0` on failure.
pub fn platinum_ohms_to_fahrenheit(sensor: PlatinumRtd, ohms: f64) -> f64 {
    or_zero(sensor.temperature(ohms, Fahrenheit))
}

/// α = 0.00385 ratio fit, °C; `0.0` on failure.
pub fn rtd_a385_ohms_to_celsius(ohms: f64, r0: f64) -> f64 {
    or_zero(fit::temperature_from_ratio(ohms, r0, Celsius))
}

/// α = 0.00385 ratio fit, °F; `0.0` on failure.
pub fn rtd_a385_ohms_to_fahrenheit(ohms: f64, r0: f64) -> f64 {
    or_zero(fit::temperature_from_ratio(ohms, r0, Fahrenheit))
}

// Numeric helpers

/// Polynomial value, `0.0` when undefined or under-specified.
pub fn poly_value(coefficients: &[f64], x: f64, order: i32) -> f64 {
    polynomial::poly_value(coefficients, x, order).unwrap_or(0.0)
}

/// Interpolated value and status code. The value is `0.0` unless the code is `0`.
pub fn linear_lookup(x: &[f64], y: &[f64], query: f64) -> (f64, i32) {
    match numeric::linear_interpolate(x, y, query) {
        Ok(value) => (value, 0),
        Err(err) => (0.0, err.code()),
    }
}

/// Sorted index order and status code for a legacy `'a'`/`'d'` flag.
///
/// The index list is empty unless the code is `0`.
pub fn sort_indices(data: &[f64], flag: char) -> (Vec<usize>, i32) {
    match SortOrder::try_from(flag).and_then(|order| numeric::sort_indices(data, order)) {
        Ok(index) => (index, 0),
        Err(err) => (Vec::new(), err.code()),
    }
}

/// Least-squares line as `(slope, intercept, r, code)`.
///
/// Every failure reports `-1`. When `y` has no spread the slope and intercept
/// are still filled in, with `r = 0` and code `-1`. Two points always report
/// `r = 1`.
pub fn linear_fit(x: &[f64], y: &[f64]) -> (f64, f64, f64, i32) {
    match numeric::linear_fit(x, y) {
        Ok(fit) if x.len() == 2 => (fit.slope, fit.intercept, 1.0, 0),
        Ok(fit) => match fit.correlation {
            Some(r) => (fit.slope, fit.intercept, r, 0),
            None => (fit.slope, fit.intercept, 0.0, -1),
        },
        Err(_) => (0.0, 0.0, 0.0, -1),
    }
}
