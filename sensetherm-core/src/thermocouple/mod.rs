//! Thermocouple EMF / Temperature Conversion
//!
//! ## Physics Background
//!
//! A thermocouple produces an EMF that depends on the temperature difference
//! between its measuring junction and its reference (cold) junction. NIST
//! tabulates that EMF for the standard letter types with the reference
//! junction held at 0 °C, as two families of piecewise polynomials:
//!
//! ```text
//! reference function:  E = Σ cᵢ·tⁱ        t in °C, E in mV
//! inverse function:    t = Σ dᵢ·Eⁱ        E in mV, t in °C
//! ```
//!
//! Both directions are stored as [`SegmentTable`]s (see [`crate::segment`]).
//!
//! ## Cold-Junction Compensation
//!
//! When the reference junction sits at some temperature `t_ref` other than
//! 0 °C, the law of intermediate temperatures gives
//!
//! ```text
//! E(t, 0) = E(t, t_ref) + E(t_ref, 0)
//! ```
//!
//! so the measured EMF is shifted by the reference function at `t_ref` and
//! then inverted. There is no closed form for the composed curve; the two
//! tables are simply chained.
//!
//! ## Usage
//!
//! ```rust
//! use sensetherm_core::{ThermocoupleType, TemperatureUnit};
//!
//! let k = ThermocoupleType::K;
//! let volts = k.temperature_to_volts(100.0, TemperatureUnit::Celsius).unwrap();
//! assert!((volts - 4.096e-3).abs() < 1e-6);
//!
//! let back = k.volts_to_temperature(volts, TemperatureUnit::Celsius).unwrap();
//! assert!((back - 100.0).abs() < 0.05);
//!
//! // Same reading with the cold junction at 25 °C
//! let hot = k
//!     .volts_to_temperature_referenced(volts, 25.0, TemperatureUnit::Celsius)
//!     .unwrap();
//! assert!(hot > 124.0 && hot < 126.0);
//! ```

mod emf;
mod reference;

use core::fmt;

use crate::constants::{MILLIVOLTS_PER_VOLT, TYPE_B_DOUBLE_VALUED_MAX_MV};
use crate::errors::{ConversionError, ConversionResult};
use crate::segment::SegmentTable;
use crate::units::{fahrenheit_to_celsius, TemperatureUnit};

/// Standard thermocouple letter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThermocoupleType {
    /// Pt-30%Rh / Pt-6%Rh
    B,
    /// Chromel / Constantan
    E,
    /// Iron / Constantan
    J,
    /// Chromel / Alumel
    K,
    /// Nicrosil / Nisil
    N,
    /// Pt-13%Rh / Pt
    R,
    /// Pt-10%Rh / Pt
    S,
    /// Copper / Constantan
    T,
}

impl ThermocoupleType {
    /// Every supported type, in letter order.
    pub const ALL: [Self; 8] = [
        Self::B, Self::E, Self::J, Self::K, Self::N, Self::R, Self::S, Self::T,
    ];

    /// Parse a type letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'B' => Some(Self::B),
            'E' => Some(Self::E),
            'J' => Some(Self::J),
            'K' => Some(Self::K),
            'N' => Some(Self::N),
            'R' => Some(Self::R),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Type letter.
    pub fn letter(self) -> char {
        match self {
            Self::B => 'B',
            Self::E => 'E',
            Self::J => 'J',
            Self::K => 'K',
            Self::N => 'N',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
        }
    }

    /// EMF → temperature table, keyed on millivolts.
    pub fn emf_table(self) -> &'static SegmentTable {
        match self {
            Self::B => &emf::TYPE_B,
            Self::E => &emf::TYPE_E,
            Self::J => &emf::TYPE_J,
            Self::K => &emf::TYPE_K,
            Self::N => &emf::TYPE_N,
            Self::R => &emf::TYPE_R,
            Self::S => &emf::TYPE_S,
            Self::T => &emf::TYPE_T,
        }
    }

    /// Temperature → EMF table, keyed on °C.
    pub fn reference_table(self) -> &'static SegmentTable {
        match self {
            Self::B => &reference::TYPE_B,
            Self::E => &reference::TYPE_E,
            Self::J => &reference::TYPE_J,
            Self::K => &reference::TYPE_K,
            Self::N => &reference::TYPE_N,
            Self::R => &reference::TYPE_R,
            Self::S => &reference::TYPE_S,
            Self::T => &reference::TYPE_T,
        }
    }

    /// Accepted input range of [`Self::volts_to_temperature`], in volts.
    pub fn voltage_range(self) -> (f64, f64) {
        let table = self.emf_table();
        (table.min / MILLIVOLTS_PER_VOLT, table.max / MILLIVOLTS_PER_VOLT)
    }

    /// Accepted input range of [`Self::temperature_to_volts`] in `unit`.
    pub fn temperature_range(self, unit: TemperatureUnit) -> (f64, f64) {
        let table = self.reference_table();
        (unit.from_celsius(table.min), unit.from_celsius(table.max))
    }

    /// Convert an EMF (volts, reference junction at the ice point) to temperature.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::OutOfRange`] outside [`Self::voltage_range`]
    /// - [`ConversionError::NoSignal`] for exactly 0 V
    pub fn volts_to_temperature(self, volts: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        let millivolts = volts * MILLIVOLTS_PER_VOLT;
        if !self.emf_table().in_range(millivolts) {
            return Err(self.voltage_out_of_range(volts));
        }
        if volts == 0.0 {
            return Err(ConversionError::NoSignal);
        }
        self.millivolts_to_celsius(millivolts)
            .map(|celsius| unit.from_celsius(celsius))
            .map_err(|_| self.voltage_out_of_range(volts))
    }

    /// Convert a temperature to the EMF (volts) it produces against an
    /// ice-point reference junction.
    ///
    /// The ice point itself returns exactly 0 V.
    ///
    /// # Errors
    ///
    /// [`ConversionError::OutOfRange`] outside [`Self::temperature_range`].
    pub fn temperature_to_volts(self, temperature: f64, unit: TemperatureUnit) -> ConversionResult<f64> {
        let table = self.reference_table();
        let celsius = unit.to_celsius(temperature);
        let out_of_range = || {
            let (min, max) = self.temperature_range(unit);
            ConversionError::OutOfRange { value: temperature, min, max }
        };

        if !table.in_range(celsius) {
            return Err(out_of_range());
        }
        if temperature == unit.ice_point() {
            return Ok(0.0);
        }
        let segment = table.select(celsius).ok_or_else(out_of_range)?;
        Ok(segment.evaluate(celsius) / MILLIVOLTS_PER_VOLT)
    }

    /// Convert an EMF measured against a reference junction at `reference`
    /// (same unit as the result).
    ///
    /// The reference temperature is turned into its equivalent EMF, added to
    /// the measurement, and the sum converted as an ice-point reading.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::NoSignal`] for exactly 0 V
    /// - [`ConversionError::ReferenceOutOfRange`] when `reference` has no
    ///   tabulated EMF
    /// - [`ConversionError::OutOfRange`] when the compensated EMF leaves the table
    pub fn volts_to_temperature_referenced(
        self,
        volts: f64,
        reference: f64,
        unit: TemperatureUnit,
    ) -> ConversionResult<f64> {
        if volts == 0.0 {
            return Err(ConversionError::NoSignal);
        }
        if reference == unit.ice_point() {
            return self.volts_to_temperature(volts, unit);
        }

        let offset = self.temperature_to_volts(reference, unit).map_err(|_| {
            log_warn!("Type {}: reference junction {} {} has no EMF", self, reference, unit);
            ConversionError::ReferenceOutOfRange { reference }
        })?;

        let compensated = offset + volts;
        let millivolts = compensated * MILLIVOLTS_PER_VOLT;
        if !self.emf_table().in_range(millivolts) {
            return Err(self.voltage_out_of_range(compensated));
        }
        self.millivolts_to_celsius(millivolts)
            .map(|celsius| unit.from_celsius(celsius))
            .map_err(|_| self.voltage_out_of_range(compensated))
    }

    /// Whether an ice-point EMF lies in the double-valued Type B region.
    ///
    /// Such readings convert to the upper solution (72 °F or warmer) even if
    /// the junction is colder. Always `false` for other types.
    pub fn in_dead_zone(self, volts: f64) -> bool {
        let millivolts = volts * MILLIVOLTS_PER_VOLT;
        self == Self::B
            && self.emf_table().in_range(millivolts)
            && millivolts <= TYPE_B_DOUBLE_VALUED_MAX_MV
    }

    fn millivolts_to_celsius(self, millivolts: f64) -> ConversionResult<f64> {
        let table = self.emf_table();
        let segment = table.select(millivolts).ok_or(ConversionError::OutOfRange {
            value: millivolts,
            min: table.min,
            max: table.max,
        })?;

        let raw = segment.evaluate(millivolts);
        let celsius = match segment.unit {
            TemperatureUnit::Celsius => raw,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(raw),
        };

        if self == Self::B && millivolts <= TYPE_B_DOUBLE_VALUED_MAX_MV {
            log_debug!("Type B: {} mV is double valued, taking the upper root", millivolts);
        }
        Ok(celsius)
    }

    fn voltage_out_of_range(self, volts: f64) -> ConversionError {
        let (min, max) = self.voltage_range();
        ConversionError::OutOfRange { value: volts, min, max }
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit};

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn reference_values_at_100c() {
        // NIST ITS-90 tables, mV at 100 °C
        let expected = [
            (ThermocoupleType::E, 6.319),
            (ThermocoupleType::J, 5.269),
            (ThermocoupleType::K, 4.096),
            (ThermocoupleType::N, 2.774),
            (ThermocoupleType::R, 0.647),
            (ThermocoupleType::S, 0.646),
            (ThermocoupleType::T, 4.279),
        ];
        for (tc, mv) in expected {
            let volts = tc.temperature_to_volts(100.0, Celsius).unwrap();
            assert!(close(volts * 1000.0, mv, 0.001), "{tc}: {volts}");
        }
        let b = ThermocoupleType::B.temperature_to_volts(1000.0, Celsius).unwrap();
        assert!(close(b * 1000.0, 4.834, 0.001));
    }

    #[test]
    fn type_k_gaussian_term_applies_above_zero() {
        // 1000 °C = 41.276 mV only with the correction term included
        let volts = ThermocoupleType::K.temperature_to_volts(1000.0, Celsius).unwrap();
        assert!(close(volts * 1000.0, 41.276, 0.001));
    }

    #[test]
    fn zero_volts_is_no_signal() {
        for tc in ThermocoupleType::ALL {
            assert_eq!(tc.volts_to_temperature(0.0, Fahrenheit), Err(ConversionError::NoSignal));
        }
    }

    #[test]
    fn type_k_lower_bound_is_inclusive() {
        let t = ThermocoupleType::K.volts_to_temperature(-5.891e-3, Celsius).unwrap();
        assert!(close(t, -200.0, 0.1));
        assert!(matches!(
            ThermocoupleType::K.volts_to_temperature(-5.892e-3, Celsius),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn unmatched_edge_is_out_of_range() {
        // 69.55318e-3 V scales to slightly above the last J breakpoint
        assert!(ThermocoupleType::J.volts_to_temperature(69.55318e-3, Celsius).is_err());
        assert!(ThermocoupleType::J.volts_to_temperature(69.55e-3, Celsius).is_ok());
    }

    #[test]
    fn forward_units_agree() {
        let c = ThermocoupleType::K.volts_to_temperature(10e-3, Celsius).unwrap();
        let f = ThermocoupleType::K.volts_to_temperature(10e-3, Fahrenheit).unwrap();
        assert!(close(c, 246.222, 0.001));
        assert!(close(f, c * 1.8 + 32.0, 1e-9));
    }

    #[test]
    fn ice_point_gives_zero_volts() {
        for tc in ThermocoupleType::ALL {
            assert_eq!(tc.temperature_to_volts(0.0, Celsius), Ok(0.0));
            assert_eq!(tc.temperature_to_volts(32.0, Fahrenheit), Ok(0.0));
        }
    }

    #[test]
    fn inverse_range_checked_in_callers_unit() {
        let err = ThermocoupleType::T.temperature_to_volts(800.0, Fahrenheit).unwrap_err();
        match err {
            ConversionError::OutOfRange { value, min, max } => {
                assert_eq!(value, 800.0);
                assert!(close(min, -454.0, 1e-9));
                assert!(close(max, 752.0, 1e-9));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(ThermocoupleType::B.temperature_to_volts(-1.0, Celsius).is_err());
    }

    #[test]
    fn type_b_low_range_fits_yield_fahrenheit() {
        // 300 °F sits in the 200-482 °F curve fit
        let tc = ThermocoupleType::B;
        let volts = tc.temperature_to_volts(300.0, Fahrenheit).unwrap();
        let back = tc.volts_to_temperature(volts, Fahrenheit).unwrap();
        assert!(close(back, 300.0, 0.25));
    }

    #[test]
    fn type_b_dead_zone_detection() {
        let tc = ThermocoupleType::B;
        assert!(tc.in_dead_zone(-0.00258e-3));
        assert!(!tc.in_dead_zone(0.1e-3));
        assert!(!tc.in_dead_zone(-0.003e-3));
        assert!(!ThermocoupleType::K.in_dead_zone(-0.00258e-3));
    }

    #[test]
    fn type_b_double_valued_region_reads_upper_root() {
        // 10 °C and ~33 °C share this EMF; the fit answers with the warmer one
        let tc = ThermocoupleType::B;
        let cold = tc.temperature_to_volts(10.0, Celsius).unwrap();
        assert!(tc.in_dead_zone(cold));
        let read = tc.volts_to_temperature(cold, Fahrenheit).unwrap();
        assert!(read > crate::constants::TYPE_B_DEAD_ZONE_CEILING_F);
        assert!(close(read, 90.15, 0.05));
    }

    #[test]
    fn cold_junction_at_ice_point_delegates() {
        let tc = ThermocoupleType::J;
        let direct = tc.volts_to_temperature(12e-3, Fahrenheit).unwrap();
        let referenced = tc.volts_to_temperature_referenced(12e-3, 32.0, Fahrenheit).unwrap();
        assert_eq!(direct, referenced);
    }

    #[test]
    fn cold_junction_adds_reference_emf() {
        let tc = ThermocoupleType::K;
        let hot = tc.temperature_to_volts(300.0, Celsius).unwrap();
        let cold = tc.temperature_to_volts(25.0, Celsius).unwrap();
        let t = tc.volts_to_temperature_referenced(hot - cold, 25.0, Celsius).unwrap();
        assert!(close(t, 300.0, 0.05));
    }

    #[test]
    fn cold_junction_errors() {
        let tc = ThermocoupleType::K;
        assert_eq!(
            tc.volts_to_temperature_referenced(0.0, 25.0, Celsius),
            Err(ConversionError::NoSignal)
        );
        assert_eq!(
            tc.volts_to_temperature_referenced(1e-3, 5000.0, Fahrenheit),
            Err(ConversionError::ReferenceOutOfRange { reference: 5000.0 })
        );
        assert!(matches!(
            tc.volts_to_temperature_referenced(54e-3, 300.0, Celsius),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn tables_stay_above_absolute_zero() {
        for tc in ThermocoupleType::ALL {
            let (min, max) = tc.temperature_range(Celsius);
            assert!(min > crate::constants::physics::ABSOLUTE_ZERO_C);
            assert!(min < max);
        }
    }

    #[test]
    fn letters_round_trip() {
        for tc in ThermocoupleType::ALL {
            assert_eq!(ThermocoupleType::from_letter(tc.letter()), Some(tc));
        }
        assert_eq!(ThermocoupleType::from_letter('k'), Some(ThermocoupleType::K));
        assert_eq!(ThermocoupleType::from_letter('X'), None);
    }
}
