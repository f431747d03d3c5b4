//! Thermocouple Constants

/// Lowest temperature where the Type B low-range curve fits are valid (°F).
///
/// Source: NIST ITS-90 Type B table, fit by the instrument vendor
pub const TYPE_B_DEAD_ZONE_CEILING_F: f64 = 72.0;

/// Upper end of the double-valued Type B EMF region (mV).
///
/// Type B EMF dips to -0.002585 mV near 21 °C and only returns to zero near
/// 41.6 °C, so every EMF at or below this value has two solutions. The
/// curve fit always returns the upper one (at least 72 °F): a junction colder
/// than [`TYPE_B_DEAD_ZONE_CEILING_F`] is misread.
///
/// Source: NIST ITS-90 Type B table
pub const TYPE_B_DOUBLE_VALUED_MAX_MV: f64 = 0.0;

/// Center of the Type K Gaussian correction term (°C).
///
/// Source: NIST Monograph 175, Type K reference function
pub const TYPE_K_CORRECTION_CENTER_C: f64 = 126.9686;

/// Amplitude of the Type K Gaussian correction term (mV).
///
/// Source: NIST Monograph 175, Type K reference function
pub const TYPE_K_CORRECTION_AMPLITUDE_MV: f64 = 0.118597600000;

/// Exponent scale of the Type K Gaussian correction term (1/°C²).
///
/// Source: NIST Monograph 175, Type K reference function
pub const TYPE_K_CORRECTION_EXPONENT: f64 = -0.118343200000e-3;
