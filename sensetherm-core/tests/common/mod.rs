//! Shared fixtures for the integration tests
//!
//! - Interior temperature ranges where each thermocouple round trip is tight
//! - NIST table spot values
//! - Tolerance assertions with useful failure messages

#![allow(dead_code)]

use sensetherm_core::ThermocoupleType;

/// Round-trip accuracy inside [`interior_celsius`] (°C).
pub const ROUND_TRIP_TOLERANCE_C: f64 = 0.05;

/// Margin kept away from the ends of each table (°C).
pub const EDGE_MARGIN_C: f64 = 5.0;

/// Range where the forward and inverse NIST functions are both defined.
///
/// Type B starts at 250 °C: below that the EMF table switches to the coarser
/// low-range curve fits.
pub fn interior_celsius(tc: ThermocoupleType) -> (f64, f64) {
    let (low, high) = match tc {
        ThermocoupleType::B => (250.0, 1820.0),
        ThermocoupleType::E => (-200.0, 1000.0),
        ThermocoupleType::J => (-210.0, 1200.0),
        ThermocoupleType::K => (-200.0, 1372.0),
        ThermocoupleType::N => (-200.0, 1300.0),
        ThermocoupleType::R | ThermocoupleType::S => (-50.0, 1768.1),
        ThermocoupleType::T => (-200.0, 400.0),
    };
    (low + EDGE_MARGIN_C, high - EDGE_MARGIN_C)
}

/// NIST ITS-90 table values: (type, °C, mV).
pub const NIST_POINTS: &[(ThermocoupleType, f64, f64)] = &[
    (ThermocoupleType::K, -100.0, -3.554),
    (ThermocoupleType::K, 100.0, 4.096),
    (ThermocoupleType::K, 1000.0, 41.276),
    (ThermocoupleType::J, 100.0, 5.269),
    (ThermocoupleType::T, 100.0, 4.279),
    (ThermocoupleType::E, 100.0, 6.319),
    (ThermocoupleType::N, 100.0, 2.774),
    (ThermocoupleType::R, 100.0, 0.647),
    (ThermocoupleType::S, 100.0, 0.646),
    (ThermocoupleType::B, 1000.0, 4.834),
];

/// Assert `|actual - expected| <= tolerance`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Evenly spaced points from `low` to `high` inclusive.
pub fn grid(low: f64, high: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((high - low) / step).floor() as usize;
    (0..=count).map(move |i| low + step * i as f64)
}
