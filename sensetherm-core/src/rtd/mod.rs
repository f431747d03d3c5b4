//! Platinum RTD Resistance / Temperature Conversion
//!
//! ## Callendar-Van Dusen Equation
//!
//! ```text
//! T ≥ 0 °C:  R(T) = R0 · (1 + A·T + B·T²)
//! T < 0 °C:  R(T) = R0 · (1 + A·T + B·T² + C·(T - 100)·T³)
//! ```
//!
//! The forward direction is a direct evaluation. The inverse depends on the
//! region:
//!
//! - **At or above 0 °C** the equation is quadratic in `T` and is solved in
//!   closed form: `T = (-A + √(A² - 4B + 4B·R/R0)) / 2B`.
//! - **Below 0 °C** the quartic `C` term has no convenient closed form, so the
//!   curve is inverted by bounded bisection over -200..850 °C
//!   (see [`Bisection`]).
//!
//! ## Coefficients
//!
//! A model whose `A`, `B` and `C` are all zero stands for the IEC 60751
//! standard curve. The substitution happens when the model is evaluated; the
//! stored coefficients are never changed. A model with `C == 0` only covers
//! 0 °C and above.
//!
//! ```rust
//! use sensetherm_core::{PlatinumRtd, TemperatureUnit};
//!
//! let pt100 = PlatinumRtd::Pt100;
//! let ohms = pt100.resistance(100.0, TemperatureUnit::Celsius).unwrap();
//! assert!((ohms - 138.5055).abs() < 1e-4);
//!
//! let t = pt100.temperature(ohms, TemperatureUnit::Celsius).unwrap();
//! assert!((t - 100.0).abs() < 1e-9);
//! ```

pub mod fit;
mod solver;

pub use solver::{Bisection, Root};

use libm::sqrt;

use crate::constants::rtd::{
    CVD_C_TERM_PIVOT_C, PT1000_R0_OHMS, PT100_R0_OHMS, PT500_R0_OHMS,
};
use crate::constants::{
    IEC_60751_A, IEC_60751_B, IEC_60751_C, RTD_MAX_RATIO, RTD_MAX_TEMP_C, RTD_MIN_RATIO,
    RTD_MIN_TEMP_C,
};
use crate::errors::{ConversionError, ConversionResult};
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};

/// Callendar-Van Dusen coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallendarVanDusen {
    /// Linear coefficient (1/°C)
    pub a: f64,
    /// Quadratic coefficient (1/°C²)
    pub b: f64,
    /// Quartic coefficient below 0 °C (1/°C⁴)
    pub c: f64,
}

impl CallendarVanDusen {
    /// IEC 60751 standard curve (α = 0.00385).
    pub const IEC_60751: Self = Self {
        a: IEC_60751_A,
        b: IEC_60751_B,
        c: IEC_60751_C,
    };

    /// All-zero coefficients, resolved to [`Self::IEC_60751`] on use.
    pub const STANDARD: Self = Self { a: 0.0, b: 0.0, c: 0.0 };

    /// Coefficients from a calibration certificate.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Whether all three coefficients are zero.
    pub fn is_unset(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    /// Coefficients actually used for evaluation.
    pub fn resolved(self) -> Self {
        if self.is_unset() {
            Self::IEC_60751
        } else {
            self
        }
    }
}

/// A platinum RTD: reference resistance plus curve coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rtd {
    /// Resistance at 0 °C (Ω)
    pub r0: f64,
    /// Curve coefficients
    pub coefficients: CallendarVanDusen,
}

impl Rtd {
    /// Sensor with certificate coefficients.
    pub const fn new(r0: f64, coefficients: CallendarVanDusen) -> Self {
        Self { r0, coefficients }
    }

    /// Sensor following the IEC 60751 curve.
    pub const fn standard(r0: f64) -> Self {
        Self::new(r0, CallendarVanDusen::STANDARD)
    }

    /// Resistance at `temperature`.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::InvalidCalibration`] for `r0 <= 0`, or for a
    ///   temperature below 0 °C when the resolved `C` is zero
    /// - [`ConversionError::OutOfRange`] outside -200..850 °C
    pub fn resistance(&self, temperature: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        self.check_r0()?;
        let celsius = unit.to_celsius(temperature);
        if celsius == 0.0 {
            return Ok(self.r0);
        }
        if !(RTD_MIN_TEMP_C..=RTD_MAX_TEMP_C).contains(&celsius) {
            return Err(ConversionError::OutOfRange {
                value: temperature,
                min: unit.from_celsius(RTD_MIN_TEMP_C),
                max: unit.from_celsius(RTD_MAX_TEMP_C),
            });
        }

        let CallendarVanDusen { a, b, c } = self.coefficients.resolved();
        let t = celsius;
        if t < 0.0 {
            if c == 0.0 {
                return Err(ConversionError::InvalidCalibration {
                    reason: "quadratic-only coefficients do not cover temperatures below 0 °C",
                });
            }
            return Ok(self.r0 * (1.0 + a * t + b * t * t + c * (t - CVD_C_TERM_PIVOT_C) * t * t * t));
        }
        Ok(self.r0 * (1.0 + a * t + b * t * t))
    }

    /// Temperature at `ohms`, using the default [`Bisection`] below 0 °C.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::InvalidCalibration`] for `r0 <= 0`, coefficients
    ///   with no real or non-negative quadratic root, or `C == 0` below 0 °C
    /// - [`ConversionError::OutOfRange`] for non-positive resistance or a
    ///   ratio `ohms / r0` outside the standard curve
    /// - [`ConversionError::NonConvergent`] if bisection runs out of iterations
    pub fn temperature(&self, ohms: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        self.temperature_with(ohms, unit, &Bisection::default())
    }

    /// [`Self::temperature`] with explicit bisection settings.
    pub fn temperature_with(
        &self,
        ohms: f64,
        unit: TemperatureUnit,
        solver: &Bisection,
    ) -> ConversionResult<f64> {
        self.check_r0()?;
        let ratio = ohms / self.r0;
        if ohms <= 0.0 || !(RTD_MIN_RATIO..=RTD_MAX_RATIO).contains(&ratio) {
            return Err(ConversionError::OutOfRange {
                value: ohms,
                min: self.r0 * RTD_MIN_RATIO,
                max: self.r0 * RTD_MAX_RATIO,
            });
        }
        if ratio == 1.0 {
            return Ok(unit.ice_point());
        }

        let coefficients = self.coefficients.resolved();
        if ratio >= 1.0 {
            return Self::quadratic_root(coefficients, ratio).map(|t| unit.from_celsius(t));
        }
        if coefficients.c == 0.0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "quadratic-only coefficients do not cover resistances below R0",
            });
        }

        let root = match unit {
            TemperatureUnit::Celsius => solver.solve(RTD_MIN_TEMP_C, RTD_MAX_TEMP_C, ohms, |t| {
                self.resistance(t, TemperatureUnit::Celsius)
            })?,
            // Bracket stays in °C, each probe is evaluated in °F
            TemperatureUnit::Fahrenheit => solver.solve_mapped(
                RTD_MIN_TEMP_C,
                RTD_MAX_TEMP_C,
                ohms,
                celsius_to_fahrenheit,
                fahrenheit_to_celsius,
                |t| self.resistance(t, TemperatureUnit::Fahrenheit),
            )?,
        };
        Ok(root.value)
    }

    fn quadratic_root(coefficients: CallendarVanDusen, ratio: f64) -> ConversionResult<f64> {
        let CallendarVanDusen { a, b, .. } = coefficients;
        if b == 0.0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "B coefficient is zero",
            });
        }
        let discriminant = a * a - 4.0 * b + 4.0 * b * ratio;
        if discriminant < 0.0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "no real solution for these coefficients",
            });
        }
        let celsius = (-a + sqrt(discriminant)) / (2.0 * b);
        if celsius < 0.0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "coefficients give a negative temperature above R0",
            });
        }
        Ok(celsius)
    }

    fn check_r0(&self) -> ConversionResult<()> {
        if self.r0 > 0.0 {
            Ok(())
        } else {
            Err(ConversionError::InvalidCalibration {
                reason: "reference resistance must be positive",
            })
        }
    }
}

/// Standard α = 0.00385 platinum sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatinumRtd {
    /// 100 Ω at 0 °C
    Pt100,
    /// 500 Ω at 0 °C
    Pt500,
    /// 1000 Ω at 0 °C
    Pt1000,
}

impl PlatinumRtd {
    /// Nominal resistance at 0 °C (Ω).
    pub fn r0(self) -> f64 {
        match self {
            Self::Pt100 => PT100_R0_OHMS,
            Self::Pt500 => PT500_R0_OHMS,
            Self::Pt1000 => PT1000_R0_OHMS,
        }
    }

    /// The generic model for this sensor.
    pub fn model(self) -> Rtd {
        Rtd::standard(self.r0())
    }

    /// Resistance at `temperature`; the ice point returns `R0` exactly.
    pub fn resistance(self, temperature: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        if temperature == unit.ice_point() {
            return Ok(self.r0());
        }
        self.model().resistance(temperature, unit)
    }

    /// Temperature at `ohms`; exactly `R0` returns the ice point.
    pub fn temperature(self, ohms: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        if ohms == self.r0() {
            return Ok(unit.ice_point());
        }
        self.model().temperature(ohms, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit};

    const QUADRATIC_ONLY: CallendarVanDusen = CallendarVanDusen::new(IEC_60751_A, IEC_60751_B, 0.0);

    #[test]
    fn unset_coefficients_resolve_to_standard() {
        assert_eq!(CallendarVanDusen::STANDARD.resolved(), CallendarVanDusen::IEC_60751);
        assert_eq!(QUADRATIC_ONLY.resolved(), QUADRATIC_ONLY);
        assert!(CallendarVanDusen::default().is_unset());
    }

    #[test]
    fn ice_point_returns_r0() {
        for r0 in [10.0, 100.0, 1000.0, 0.5] {
            let rtd = Rtd::standard(r0);
            assert_eq!(rtd.resistance(0.0, Celsius), Ok(r0));
            assert_eq!(rtd.resistance(32.0, Fahrenheit), Ok(r0));
            assert_eq!(rtd.temperature(r0, Celsius), Ok(0.0));
            assert_eq!(rtd.temperature(r0, Fahrenheit), Ok(32.0));
        }
    }

    #[test]
    fn standard_table_values() {
        // IEC 60751 PT100 table
        let pt100 = Rtd::standard(100.0);
        let cases = [(-200.0, 18.5201), (-100.0, 60.2558), (100.0, 138.5055), (850.0, 390.4811)];
        for (t, ohms) in cases {
            let r = pt100.resistance(t, Celsius).unwrap();
            assert!((r - ohms).abs() < 1e-4, "{t}: {r}");
        }
    }

    #[test]
    fn forward_rejections() {
        let pt100 = Rtd::standard(100.0);
        assert!(matches!(pt100.resistance(-200.5, Celsius), Err(ConversionError::OutOfRange { .. })));
        assert!(matches!(pt100.resistance(851.0, Celsius), Err(ConversionError::OutOfRange { .. })));
        assert!(matches!(
            Rtd::standard(0.0).resistance(10.0, Celsius),
            Err(ConversionError::InvalidCalibration { .. })
        ));
        assert!(matches!(
            Rtd::new(100.0, QUADRATIC_ONLY).resistance(-10.0, Celsius),
            Err(ConversionError::InvalidCalibration { .. })
        ));
    }

    #[test]
    fn quadratic_inverse_is_closed_form() {
        let pt100 = Rtd::standard(100.0);
        let t = pt100.temperature(138.5055, Celsius).unwrap();
        assert!((t - 100.0).abs() < 1e-3);
        let f = pt100.temperature(138.5055, Fahrenheit).unwrap();
        assert!((f - 212.0).abs() < 2e-3);
    }

    #[test]
    fn bisection_below_zero() {
        let pt100 = Rtd::standard(100.0);
        let ohms = pt100.resistance(-150.0, Celsius).unwrap();
        let t = pt100.temperature(ohms, Celsius).unwrap();
        assert!((t + 150.0).abs() < 1e-4);

        let f = pt100.temperature(ohms, Fahrenheit).unwrap();
        assert!((f + 238.0).abs() < 2e-4);
    }

    #[test]
    fn inverse_rejections() {
        let pt100 = Rtd::standard(100.0);
        assert!(matches!(pt100.temperature(0.0, Celsius), Err(ConversionError::OutOfRange { .. })));
        assert!(matches!(pt100.temperature(18.0, Celsius), Err(ConversionError::OutOfRange { .. })));
        assert!(matches!(pt100.temperature(391.0, Celsius), Err(ConversionError::OutOfRange { .. })));
        assert!(matches!(
            Rtd::new(100.0, QUADRATIC_ONLY).temperature(90.0, Celsius),
            Err(ConversionError::InvalidCalibration { .. })
        ));
        assert!(matches!(
            Rtd::new(100.0, CallendarVanDusen::new(3.9e-3, 0.0, 0.0)).temperature(120.0, Celsius),
            Err(ConversionError::InvalidCalibration { .. })
        ));
    }

    #[test]
    fn starved_solver_reports_non_convergence() {
        let solver = Bisection { max_iterations: 5, ..Bisection::default() };
        let err = Rtd::standard(100.0)
            .temperature_with(50.0, Celsius, &solver)
            .unwrap_err();
        assert!(matches!(err, ConversionError::NonConvergent { iterations: 5, .. }));
    }

    #[test]
    fn platinum_shortcuts() {
        assert_eq!(PlatinumRtd::Pt500.temperature(500.0, Fahrenheit), Ok(32.0));
        assert_eq!(PlatinumRtd::Pt1000.resistance(32.0, Fahrenheit), Ok(1000.0));
        assert_eq!(PlatinumRtd::Pt100.model(), Rtd::standard(100.0));
        let r = PlatinumRtd::Pt1000.resistance(-100.0, Celsius).unwrap();
        assert!((r - 602.5584).abs() < 1e-4);
    }
}
