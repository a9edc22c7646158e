//! Ordinary least-squares parameter estimation.
//!
//! ## Purpose
//!
//! This module turns summary statistics into a [`FitDescription`]: the slope
//! (incline), intercept (shift) and their standard errors.
//!
//! ## Design notes
//!
//! * **Closed form**: Slope is `cov(x, y) / var(x)` using population moments.
//! * **Residual variance**: Degrees-of-freedom corrected by `n - 2`.
//! * **Degeneracy**: A zero abscissa variance is an error, never NaN/Inf output.
//!
//! ## Invariants
//!
//! * Returned error fields are finite and non-negative.
//! * `n >= 3` (guaranteed by the engine), so `n - 2 > 0`.
//!
//! ## Non-goals
//!
//! * This module does not support weighted or multivariate fits.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::math::statistics::SummaryStatistics;
use crate::primitives::errors::LsmError;

// ============================================================================
// Fit Description
// ============================================================================

/// Result of a least-squares line fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitDescription<T> {
    /// Estimated slope.
    pub incline: T,

    /// Estimated intercept.
    pub shift: T,

    /// Standard error of the slope.
    pub incline_error: T,

    /// Standard error of the intercept.
    pub shift_error: T,
}

impl<T: Float> FitDescription<T> {
    /// Value of the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.incline * x + self.shift
    }

    /// Value of the upper error-bound line at `x`.
    #[inline]
    pub fn upper(&self, x: T) -> T {
        (self.incline + self.incline_error) * x + (self.shift + self.shift_error)
    }

    /// Value of the lower error-bound line at `x`.
    #[inline]
    pub fn lower(&self, x: T) -> T {
        (self.incline - self.incline_error) * x + (self.shift - self.shift_error)
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Derives a [`FitDescription`] from paired samples.
pub struct DescriptionEstimator;

impl DescriptionEstimator {
    /// Estimate slope, intercept and their errors.
    ///
    /// `x` and `y` must be the same samples `stats` was computed from.
    pub fn estimate<T: Float>(
        stats: &SummaryStatistics<T>,
        x: &[T],
        y: &[T],
    ) -> Result<FitDescription<T>, LsmError> {
        let n = x.len();
        let n_t = T::from(n).unwrap_or_else(T::nan);
        let dof = T::from(n.saturating_sub(2)).unwrap_or_else(T::nan);

        let variance = stats.abscissa_variance();
        if !(variance > Self::degeneracy_tolerance(stats, n_t)) {
            return Err(LsmError::DegenerateFit {
                variance: variance.to_f64().unwrap_or(f64::NAN),
            });
        }

        let incline = stats.covariance() / variance;
        let shift = stats.ordinate_mean - incline * stats.abscissa_mean;

        let rss = x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
            let r = yi - incline * xi - shift;
            acc + r * r
        });
        let residual_variance = rss / dof;

        let incline_error = (residual_variance / n_t / variance).sqrt();
        let shift_error = (residual_variance * stats.abs_squared_mean / n_t / variance).sqrt();

        let description = FitDescription {
            incline,
            shift,
            incline_error,
            shift_error,
        };

        if [incline, shift, incline_error, shift_error]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(LsmError::DegenerateFit {
                variance: variance.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(description)
    }

    /// Smallest abscissa variance distinguishable from rounding noise.
    ///
    /// `mean(x²) - mean(x)²` cancels catastrophically for constant abscissas,
    /// so exact zero cannot be relied on; the bound scales with `mean(x²)`
    /// and the sample count.
    #[inline]
    pub fn degeneracy_tolerance<T: Float>(stats: &SummaryStatistics<T>, n: T) -> T {
        T::epsilon() * stats.abs_squared_mean.abs() * n
    }
}
