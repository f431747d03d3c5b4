//! Error Types for Conversion and Numeric Failures
//!
//! ## Design
//!
//! Instrument firmware historically reported every failure as the domain zero
//! point (0 °F, 0 V, 0 Ω). A caller then cannot tell "the junction really is at
//! the ice point" from "the reading was out of range". SenseTherm returns a
//! `Result` everywhere instead:
//!
//! 1. **Small Size**: variants carry scalars and `&'static str` only, so errors
//!    are `Copy` and cheap to return from hot conversion loops.
//!
//! 2. **No Heap Allocation**: usable on `no_std` targets without an allocator.
//!
//! 3. **Coarse Status**: [`ConversionError::status`] collapses the detailed
//!    error to the four-way [`ConversionStatus`] that instrument front-ends
//!    display.
//!
//! The zero-sentinel behaviour is still available in [`crate::compat`] for
//! drop-in replacement of legacy call sites.
//!
//! ## Error Categories
//!
//! ### Conversion errors ([`ConversionError`])
//! - `OutOfRange`: input outside the tabulated range of the sensor model
//! - `NoSignal`: exactly 0 V at the input, treated as a disconnected sensor
//! - `ReferenceOutOfRange`: cold-junction temperature outside the inverse table
//! - `InvalidCalibration`: coefficients that cannot describe the requested region
//! - `NonConvergent`: bisection exhausted its iteration budget
//!
//! ### Numeric utility errors ([`NumericError`])
//!
//! Each variant maps onto the integer status code legacy call sites expect
//! through [`NumericError::code`].
//!
//! ```rust
//! use sensetherm_core::{ConversionError, ConversionStatus, ThermocoupleType, TemperatureUnit};
//!
//! match ThermocoupleType::K.volts_to_temperature(0.0, TemperatureUnit::Celsius) {
//!     Ok(_) => unreachable!(),
//!     Err(err) => {
//!         assert_eq!(err, ConversionError::NoSignal);
//!         assert_eq!(err.status(), ConversionStatus::OutOfRange);
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sensor conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for the generic numeric utilities
pub type NumericResult<T> = Result<T, NumericError>;

/// Coarse outcome of a conversion, as shown by instrument front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionStatus {
    /// Conversion produced a value
    Ok,
    /// Input (or reference) outside the model's range
    OutOfRange,
    /// Calibration coefficients unusable for the input
    InvalidCalibration,
    /// Iterative inversion did not converge
    NonConvergent,
}

impl ConversionStatus {
    /// Status of a finished conversion.
    pub fn of<T>(result: &ConversionResult<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }
}

/// Conversion errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Input outside the model's valid range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Offending input, in the caller's units
        value: f64,
        /// Lowest accepted input
        min: f64,
        /// Highest accepted input
        max: f64,
    },

    /// Exactly zero volts, read as an open or disconnected junction
    #[error("No signal: input is exactly 0 V")]
    NoSignal,

    /// Cold-junction temperature cannot be converted to an EMF offset
    #[error("Reference junction temperature {reference} outside the inverse table")]
    ReferenceOutOfRange {
        /// Reference temperature, in the caller's units
        reference: f64,
    },

    /// Calibration cannot describe the requested region
    #[error("Invalid calibration: {reason}")]
    InvalidCalibration {
        /// Why the coefficients were rejected
        reason: &'static str,
    },

    /// Bisection exhausted its iteration budget
    #[error("No convergence after {iterations} iterations (last estimate {estimate})")]
    NonConvergent {
        /// Iterations spent
        iterations: u32,
        /// Midpoint of the final bracket
        estimate: f64,
    },
}

impl ConversionError {
    /// Collapse to the four-way status reported by instrument front-ends.
    pub fn status(&self) -> ConversionStatus {
        match self {
            Self::OutOfRange { .. } | Self::NoSignal | Self::ReferenceOutOfRange { .. } => {
                ConversionStatus::OutOfRange
            }
            Self::InvalidCalibration { .. } => ConversionStatus::InvalidCalibration,
            Self::NonConvergent { .. } => ConversionStatus::NonConvergent,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::NoSignal =>
                defmt::write!(fmt, "No signal"),
            Self::ReferenceOutOfRange { reference } =>
                defmt::write!(fmt, "Reference {} out of range", reference),
            Self::InvalidCalibration { reason } =>
                defmt::write!(fmt, "Invalid calibration: {}", reason),
            Self::NonConvergent { iterations, estimate } =>
                defmt::write!(fmt, "No convergence after {} (at {})", iterations, estimate),
        }
    }
}

/// Errors from the generic numeric utilities
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Not enough samples for the operation
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples
        required: usize,
        /// Samples supplied
        available: usize,
    },

    /// Paired slices have different lengths
    #[error("Length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch {
        /// Length of the abscissa slice
        x_len: usize,
        /// Length of the ordinate slice
        y_len: usize,
    },

    /// Query below the smallest abscissa
    #[error("Value {value} below table minimum {min}")]
    BelowRange {
        /// Query value
        value: f64,
        /// Smallest abscissa
        min: f64,
    },

    /// Query above the largest abscissa
    #[error("Value {value} above table maximum {max}")]
    AboveRange {
        /// Query value
        value: f64,
        /// Largest abscissa
        max: f64,
    },

    /// Data cannot define the requested quantity
    #[error("Degenerate data: {reason}")]
    Degenerate {
        /// What made the data unusable
        reason: &'static str,
    },

    /// Negative-order polynomial evaluated at zero
    #[error("Reciprocal polynomial undefined at zero")]
    UndefinedAtZero,

    /// Sort flag other than a/A/d/D
    #[error("Invalid sort order flag")]
    InvalidSortOrder,
}

impl NumericError {
    /// Legacy integer status code.
    ///
    /// | code | meaning |
    /// |------|---------|
    /// | -1 | insufficient data or bad argument |
    /// | -2 | below range |
    /// | -3 | above range |
    /// | -5 | degenerate data |
    ///
    /// The legacy line fit reports every failure as -1; see
    /// [`crate::compat::linear_fit`].
    pub fn code(&self) -> i32 {
        match self {
            Self::InsufficientData { .. }
            | Self::LengthMismatch { .. }
            | Self::UndefinedAtZero
            | Self::InvalidSortOrder => -1,
            Self::BelowRange { .. } => -2,
            Self::AboveRange { .. } => -3,
            Self::Degenerate { .. } => -5,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NumericError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::LengthMismatch { x_len, y_len } =>
                defmt::write!(fmt, "Length mismatch {} vs {}", x_len, y_len),
            Self::BelowRange { value, min } =>
                defmt::write!(fmt, "{} below {}", value, min),
            Self::AboveRange { value, max } =>
                defmt::write!(fmt, "{} above {}", value, max),
            Self::Degenerate { reason } =>
                defmt::write!(fmt, "Degenerate: {}", reason),
            Self::UndefinedAtZero =>
                defmt::write!(fmt, "Undefined at zero"),
            Self::InvalidSortOrder =>
                defmt::write!(fmt, "Invalid sort order"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let out = ConversionError::OutOfRange { value: 1.0, min: 0.0, max: 0.5 };
        assert_eq!(out.status(), ConversionStatus::OutOfRange);
        assert_eq!(ConversionError::NoSignal.status(), ConversionStatus::OutOfRange);
        assert_eq!(
            ConversionError::ReferenceOutOfRange { reference: 5000.0 }.status(),
            ConversionStatus::OutOfRange
        );
        assert_eq!(
            ConversionError::InvalidCalibration { reason: "r0" }.status(),
            ConversionStatus::InvalidCalibration
        );
        assert_eq!(
            ConversionError::NonConvergent { iterations: 30, estimate: -10.0 }.status(),
            ConversionStatus::NonConvergent
        );
    }

    #[test]
    fn status_of_result() {
        let ok: ConversionResult<f64> = Ok(1.0);
        assert_eq!(ConversionStatus::of(&ok), ConversionStatus::Ok);
        let err: ConversionResult<f64> = Err(ConversionError::NoSignal);
        assert_eq!(ConversionStatus::of(&err), ConversionStatus::OutOfRange);
    }

    #[test]
    fn legacy_codes() {
        assert_eq!(NumericError::InsufficientData { required: 2, available: 1 }.code(), -1);
        assert_eq!(NumericError::BelowRange { value: -1.0, min: 0.0 }.code(), -2);
        assert_eq!(NumericError::AboveRange { value: 11.0, max: 10.0 }.code(), -3);
        assert_eq!(NumericError::Degenerate { reason: "x" }.code(), -5);
        assert_eq!(NumericError::InvalidSortOrder.code(), -1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err = ConversionError::OutOfRange { value: 2.0, min: 0.0, max: 1.0 };
        assert_eq!(err.to_string(), "Value 2 outside range [0, 1]");
        assert_eq!(
            NumericError::InsufficientData { required: 2, available: 0 }.to_string(),
            "Insufficient data: need 2, have 0"
        );
    }
}
