//! Core conversion engine for SenseTherm
//!
//! Converts thermocouple EMF and platinum RTD resistance to and from
//! temperature, following the NIST ITS-90 thermocouple reference functions
//! and the IEC 60751 Callendar-Van Dusen equation.
//!
//! Key constraints:
//! - Every conversion is a pure function over `'static` coefficient tables
//! - No heap allocation outside the numeric helpers
//! - Builds `no_std` for instrument firmware
//!
//! ```no_run
//! use sensetherm_core::{PlatinumRtd, TemperatureUnit, ThermocoupleType};
//!
//! // Type K junction reading 4.096 mV against an ice-point reference
//! match ThermocoupleType::K.volts_to_temperature(4.096e-3, TemperatureUnit::Celsius) {
//!     Ok(t) => {}, // ~100 °C
//!     Err(e) => {}, // Out of range or disconnected
//! }
//!
//! // PT100 element
//! let t = PlatinumRtd::Pt100.temperature(119.4, TemperatureUnit::Fahrenheit);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod compat;
pub mod constants;
pub mod errors;
pub mod numeric;
pub mod polynomial;
pub mod rtd;
pub mod segment;
pub mod thermocouple;
pub mod timecode;
pub mod units;

// Public API
pub use errors::{ConversionError, ConversionResult, ConversionStatus, NumericError, NumericResult};
pub use numeric::{LinearFit, SortOrder};
pub use rtd::{Bisection, CallendarVanDusen, PlatinumRtd, Rtd};
pub use thermocouple::ThermocoupleType;
pub use timecode::TimeCode;
pub use units::TemperatureUnit;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
