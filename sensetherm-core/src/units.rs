//! Temperature units and scale conversion

use core::fmt;

use crate::constants::{FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, ICE_POINT_C, ICE_POINT_F};

/// Temperature scale used at an API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value in this unit to °C.
    #[inline]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }

    /// Express a °C value in this unit.
    #[inline]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Ice point (0 °C / 32 °F) in this unit.
    #[inline]
    pub fn ice_point(self) -> f64 {
        match self {
            Self::Celsius => ICE_POINT_C,
            Self::Fahrenheit => ICE_POINT_F,
        }
    }

    /// Unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `°F = °C × 1.8 + 32`
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_OFFSET
}

/// `°C = (°F - 32) / 1.8`
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS
}
