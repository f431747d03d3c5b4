//! Piecewise Polynomial Segments
//!
//! ## Motivation
//!
//! Every reference function used by the conversion engine is piecewise: NIST
//! publishes a separate polynomial for each sub-range of a thermocouple's EMF
//! (or temperature) domain. Writing each of these out as inline arithmetic
//! duplicates the evaluation logic dozens of times. Instead each sub-range is a
//! [`Segment`] of `'static` data and a single evaluator walks a
//! [`SegmentTable`].
//!
//! ## Breakpoints
//!
//! Adjacent segments share their breakpoint. Which side owns the breakpoint is
//! part of the published reference function, so every bound records whether it
//! is inclusive. Selection returns the *first* segment that contains the input:
//!
//! ```text
//! Type K EMF (mV):   [-5.891 ─── 0.0] (0.0 ─── 20.644] (20.644 ─── 54.886]
//!                     segment 0        segment 1        segment 2
//! ```
//!
//! ## Evaluation
//!
//! Coefficients are lowest order first. The evaluator keeps a running power
//! of `x` and adds `cᵢ·xⁱ` term by term, the same summation order as the
//! published tables. Segments may add a Gaussian correction term (Type K
//! reference function above 0 °C).

use libm::exp;

use crate::units::TemperatureUnit;

/// One end of a segment interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Endpoint belongs to the segment
    Inclusive(f64),
    /// Endpoint belongs to the neighbouring segment
    Exclusive(f64),
    /// Open-ended; limited only by the table's total range
    Unbounded,
}

impl Bound {
    #[inline]
    fn admits_above(self, x: f64) -> bool {
        match self {
            Self::Inclusive(low) => x >= low,
            Self::Exclusive(low) => x > low,
            Self::Unbounded => true,
        }
    }

    #[inline]
    fn admits_below(self, x: f64) -> bool {
        match self {
            Self::Inclusive(high) => x <= high,
            Self::Exclusive(high) => x < high,
            Self::Unbounded => true,
        }
    }
}

/// Gaussian term `amplitude · exp(exponent · (x - center)²)` added to a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCorrection {
    /// Peak height
    pub amplitude: f64,
    /// Exponent scale, negative for a decaying term
    pub exponent: f64,
    /// Input value at the peak
    pub center: f64,
}

impl GaussianCorrection {
    /// Evaluate the term at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let d = x - self.center;
        self.amplitude * exp(self.exponent * d * d)
    }
}

/// A polynomial valid on one sub-range of a reference function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Lower end of the sub-range
    pub low: Bound,
    /// Upper end of the sub-range
    pub high: Bound,
    /// Coefficients, lowest order first
    pub coefficients: &'static [f64],
    /// Temperature scale of the polynomial's input or output
    pub unit: TemperatureUnit,
    /// Optional additive correction
    pub correction: Option<GaussianCorrection>,
}

impl Segment {
    /// Celsius-scaled segment without correction.
    pub const fn new(low: Bound, high: Bound, coefficients: &'static [f64]) -> Self {
        Self {
            low,
            high,
            coefficients,
            unit: TemperatureUnit::Celsius,
            correction: None,
        }
    }

    /// Same segment, with a polynomial scaled in °F.
    pub const fn in_fahrenheit(mut self) -> Self {
        self.unit = TemperatureUnit::Fahrenheit;
        self
    }

    /// Same segment, with an additive Gaussian correction.
    pub const fn with_correction(mut self, correction: GaussianCorrection) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Whether `x` falls inside this segment.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.low.admits_above(x) && self.high.admits_below(x)
    }

    /// Evaluate the segment polynomial (plus correction) at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut terms = self.coefficients.iter();
        let mut sum = terms.next().copied().unwrap_or(0.0);
        let mut power = 1.0;
        for &c in terms {
            power *= x;
            sum += c * power;
        }
        if let Some(correction) = &self.correction {
            sum += correction.evaluate(x);
        }
        sum
    }
}

/// Ordered segments covering one direction of a reference function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTable {
    /// Lowest accepted input
    pub min: f64,
    /// Highest accepted input
    pub max: f64,
    /// Segments in selection order
    pub segments: &'static [Segment],
}

impl SegmentTable {
    /// Whether `x` lies within the table's total range (both ends inclusive).
    #[inline]
    pub fn in_range(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// First segment containing `x`.
    ///
    /// Returns `None` outside the total range, and also for inputs the
    /// segment bounds leave uncovered (the published breakpoints do not
    /// always meet the total range exactly in floating point).
    pub fn select(&self, x: f64) -> Option<&'static Segment> {
        if !self.in_range(x) {
            return None;
        }
        self.segments.iter().find(|segment| segment.contains(x))
    }

    /// Index of the segment containing `x`.
    pub fn segment_index(&self, x: f64) -> Option<usize> {
        if !self.in_range(x) {
            return None;
        }
        self.segments.iter().position(|segment| segment.contains(x))
    }
}
