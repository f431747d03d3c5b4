//! Temperature Scale Constants
//!
//! Fixed points and scale factors shared by every conversion in the crate.
//! All values are exact by definition of the scales involved.

// ===== SCALE CONVERSION =====

/// Size of one Celsius degree expressed in Fahrenheit degrees.
///
/// `°F = °C × 1.8 + 32`
///
/// Source: ITS-90 / NIST SP 811, Appendix B.8
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Offset between the Celsius and Fahrenheit zero points (°F).
///
/// Source: NIST SP 811, Appendix B.8
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

// ===== FIXED POINTS =====

/// Ice point in Celsius (°C).
///
/// Standard reference-junction temperature for every ITS-90 thermocouple
/// table and the defining point (`R0`) of a platinum RTD.
///
/// Source: ITS-90
pub const ICE_POINT_C: f64 = 0.0;

/// Ice point in Fahrenheit (°F).
///
/// Source: ITS-90
pub const ICE_POINT_F: f64 = 32.0;

/// Absolute zero in Celsius (°C).
///
/// No conversion in this crate produces or accepts a temperature below this value.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

// ===== SIGNAL SCALING =====

/// Millivolts per volt.
///
/// Thermocouple reference functions are tabulated in millivolts while the
/// public API speaks SI volts.
pub const MILLIVOLTS_PER_VOLT: f64 = 1000.0;
