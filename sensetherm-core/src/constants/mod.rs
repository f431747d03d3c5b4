//! Constants for SenseTherm Core
//!
//! Centralized, documented constants used by the conversion engine. Every
//! numeric value that is not part of a coefficient table lives here together
//! with its source.
//!
//! ## Organization
//!
//! - **Physics**: temperature scale factors and fixed points
//! - **RTD**: Callendar-Van Dusen coefficients, limits and solver budget
//! - **Thermocouple**: type-specific limits and correction terms
//!
//! Coefficient tables themselves are kept next to the models that use them
//! (`thermocouple::emf`, `thermocouple::reference`, `rtd::fit`).

/// Temperature scale factors and fixed points.
pub mod physics;

/// Platinum RTD coefficients, validity limits and inversion parameters.
pub mod rtd;

/// Thermocouple-specific limits and correction terms.
pub mod thermocouple;

// Re-export commonly used constants for convenience
pub use physics::{
    FAHRENHEIT_PER_CELSIUS, FAHRENHEIT_OFFSET,
    ICE_POINT_C, ICE_POINT_F, MILLIVOLTS_PER_VOLT,
};

pub use rtd::{
    IEC_60751_A, IEC_60751_B, IEC_60751_C,
    RTD_MIN_TEMP_C, RTD_MAX_TEMP_C, RTD_MIN_RATIO, RTD_MAX_RATIO,
    BISECTION_MAX_ITERATIONS, BISECTION_RELATIVE_TOLERANCE,
};

pub use thermocouple::{TYPE_B_DEAD_ZONE_CEILING_F, TYPE_B_DOUBLE_VALUED_MAX_MV};
