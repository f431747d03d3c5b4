//! Platinum RTD Constants
//!
//! Callendar-Van Dusen coefficients and validity limits for industrial
//! platinum resistance thermometers with α = 0.00385 Ω/Ω/°C.

// ===== CALLENDAR-VAN DUSEN COEFFICIENTS =====

/// Standard linear coefficient A (1/°C).
///
/// Source: IEC 60751:2008, Section 4.2
pub const IEC_60751_A: f64 = 3.9083e-3;

/// Standard quadratic coefficient B (1/°C²).
///
/// Source: IEC 60751:2008, Section 4.2
pub const IEC_60751_B: f64 = -5.775e-7;

/// Standard cubic coefficient C (1/°C⁴), active below 0 °C only.
///
/// Source: IEC 60751:2008, Section 4.2
pub const IEC_60751_C: f64 = -4.183e-12;

/// Temperature where the C term's `(T - 100)` factor is anchored (°C).
pub const CVD_C_TERM_PIVOT_C: f64 = 100.0;

// ===== VALIDITY LIMITS =====

/// Lowest temperature covered by the Callendar-Van Dusen equation (°C).
///
/// Source: IEC 60751:2008
pub const RTD_MIN_TEMP_C: f64 = -200.0;

/// Highest temperature covered by the Callendar-Van Dusen equation (°C).
///
/// Source: IEC 60751:2008
pub const RTD_MAX_TEMP_C: f64 = 850.0;

/// Smallest accepted `R/R0` ratio.
///
/// Matches the standard curve at -200 °C with a small margin.
pub const RTD_MIN_RATIO: f64 = 0.1852007;

/// Largest accepted `R/R0` ratio.
///
/// Matches the standard curve at 850 °C.
pub const RTD_MAX_RATIO: f64 = 3.90481126;

// ===== NOMINAL RESISTANCES =====

/// PT100 nominal resistance at 0 °C (Ω).
pub const PT100_R0_OHMS: f64 = 100.0;

/// PT500 nominal resistance at 0 °C (Ω).
pub const PT500_R0_OHMS: f64 = 500.0;

/// PT1000 nominal resistance at 0 °C (Ω).
pub const PT1000_R0_OHMS: f64 = 1000.0;

// ===== INVERSION =====

/// Iteration budget for the sub-zero bisection search.
///
/// Halving a 1050 °C bracket 30 times leaves a width below 1e-6 °C.
pub const BISECTION_MAX_ITERATIONS: u32 = 30;

/// Relative resistance tolerance accepted by the bisection search.
pub const BISECTION_RELATIVE_TOLERANCE: f64 = 1e-6;
