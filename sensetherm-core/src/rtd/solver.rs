//! Bounded bisection for inverting monotonic sensor curves.

use crate::constants::{BISECTION_MAX_ITERATIONS, BISECTION_RELATIVE_TOLERANCE};
use crate::errors::{ConversionError, ConversionResult};

/// Bisection settings.
///
/// ```
/// use sensetherm_core::rtd::Bisection;
///
/// let tight = Bisection { max_iterations: 60, ..Bisection::default() };
/// assert_eq!(tight.relative_tolerance, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bisection {
    /// Probes evaluated before giving up
    pub max_iterations: u32,
    /// Accepted `|f(x) - target| / |target|`
    pub relative_tolerance: f64,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            max_iterations: BISECTION_MAX_ITERATIONS,
            relative_tolerance: BISECTION_RELATIVE_TOLERANCE,
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa where the tolerance was met
    pub value: f64,
    /// Probes evaluated, including the accepting one
    pub iterations: u32,
}

impl Bisection {
    /// Find `x` in `[low, high]` with `model(x) ≈ target`, for a model that
    /// increases with `x`.
    ///
    /// # Errors
    ///
    /// - any error returned by `model`, which aborts the search
    /// - [`ConversionError::NonConvergent`] when the budget runs out
    pub fn solve<F>(&self, low: f64, high: f64, target: f64, model: F) -> ConversionResult<Root>
    where
        F: FnMut(f64) -> ConversionResult<f64>,
    {
        self.solve_mapped(low, high, target, |x| x, |x| x, model)
    }

    /// Bisection with the bracket kept in one scale and the model probed in another.
    ///
    /// Each midpoint is mapped through `to_probe` before evaluation. The probe
    /// is mapped back through `from_probe` when it replaces a bracket end. The
    /// returned root is the accepted probe. Both maps must be increasing.
    pub fn solve_mapped<F, P, Q>(
        &self,
        low: f64,
        high: f64,
        target: f64,
        to_probe: P,
        from_probe: Q,
        mut model: F,
    ) -> ConversionResult<Root>
    where
        F: FnMut(f64) -> ConversionResult<f64>,
        P: Fn(f64) -> f64,
        Q: Fn(f64) -> f64,
    {
        let (mut low, mut high) = (low, high);

        for iteration in 1..=self.max_iterations {
            let probe = to_probe((low + high) / 2.0);
            let residual = model(probe)? - target;

            if libm::fabs(residual / target) <= self.relative_tolerance {
                return Ok(Root { value: probe, iterations: iteration });
            }
            if residual < 0.0 {
                low = from_probe(probe);
            } else {
                high = from_probe(probe);
            }
        }

        let estimate = to_probe((low + high) / 2.0);
        log_warn!(
            "Bisection stopped after {} iterations near {} (target {})",
            self.max_iterations, estimate, target
        );
        Err(ConversionError::NonConvergent {
            iterations: self.max_iterations,
            estimate,
        })
    }
}
