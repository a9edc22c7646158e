//! Summary statistics for the closed-form least-squares solution.
//!
//! ## Purpose
//!
//! This module computes the four sample means the ordinary least-squares
//! estimator needs: `mean(x)`, `mean(y)`, `mean(x·y)` and `mean(x²)`.
//!
//! ## Design notes
//!
//! * **Single pass**: All four sums are accumulated in one traversal.
//! * **No caching**: Statistics are recomputed on every call.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Inputs have equal, non-zero length (guaranteed by the engine).

use num_traits::Float;

// ============================================================================
// Summary Statistics
// ============================================================================

/// Sample means used by the least-squares estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics<T> {
    /// `mean(x)`.
    pub abscissa_mean: T,

    /// `mean(y)`.
    pub ordinate_mean: T,

    /// `mean(x·y)`.
    pub product_mean: T,

    /// `mean(x²)`.
    pub abs_squared_mean: T,
}

impl<T: Float> SummaryStatistics<T> {
    /// Compute the statistics over paired samples.
    pub fn compute(x: &[T], y: &[T]) -> Self {
        debug_assert_eq!(x.len(), y.len(), "SummaryStatistics: unequal lengths");
        debug_assert!(!x.is_empty(), "SummaryStatistics: empty input");

        let (sum_x, sum_y, sum_xy, sum_xx) = x.iter().zip(y.iter()).fold(
            (T::zero(), T::zero(), T::zero(), T::zero()),
            |(sx, sy, sxy, sxx), (&xi, &yi)| (sx + xi, sy + yi, sxy + xi * yi, sxx + xi * xi),
        );

        let n = T::from(x.len()).unwrap_or_else(T::nan);

        Self {
            abscissa_mean: sum_x / n,
            ordinate_mean: sum_y / n,
            product_mean: sum_xy / n,
            abs_squared_mean: sum_xx / n,
        }
    }

    /// Denominator of the estimator: `mean(x²) - mean(x)²`.
    #[inline]
    pub fn abscissa_variance(&self) -> T {
        self.abs_squared_mean - self.abscissa_mean * self.abscissa_mean
    }

    /// Numerator of the estimator: `mean(x·y) - mean(x)·mean(y)`.
    #[inline]
    pub fn covariance(&self) -> T {
        self.product_mean - self.abscissa_mean * self.ordinate_mean
    }
}
