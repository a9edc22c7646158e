//! Input validation for least-squares data and configuration.
//!
//! ## Purpose
//!
//! This module checks that samples are real numbers, that enough samples are
//! present, that supplied descriptions are well formed and that configuration
//! values are within bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not log; the executor logs rejected inputs.
//! * This module does not truncate or reorder data.

use num_traits::Float;

use crate::algorithms::estimator::FitDescription;
use crate::primitives::errors::LsmError;

/// Minimum samples for a defined residual variance (`n - 2 > 0`).
pub const MIN_POINTS: usize = 3;

/// Largest supported report precision.
pub const MAX_PRECISION: usize = 15;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for least-squares inputs and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate that every sample of both sequences is a finite real number.
    pub fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), LsmError> {
        Self::validate_finite(x, "abscissa")?;
        Self::validate_finite(y, "ordinates")
    }

    /// Validate that every value of `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), LsmError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(LsmError::InputValue(format!(
                "{}[{}]={}",
                name,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Validate that both sequences carry at least [`MIN_POINTS`] samples.
    pub fn validate_sample_count(x_len: usize, y_len: usize) -> Result<(), LsmError> {
        let got = x_len.min(y_len);
        if got < MIN_POINTS {
            return Err(LsmError::TooFewPoints {
                got,
                min: MIN_POINTS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Description Validation
    // ========================================================================

    /// Validate a caller-supplied description.
    pub fn validate_description<T: Float>(description: &FitDescription<T>) -> Result<(), LsmError> {
        let fields = [
            ("incline", description.incline),
            ("shift", description.shift),
            ("incline_error", description.incline_error),
            ("shift_error", description.shift_error),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LsmError::MalformedDescription(format!(
                    "{} is not finite",
                    name
                )));
            }
        }

        for (name, value) in &fields[2..] {
            if *value < T::zero() {
                return Err(LsmError::MalformedDescription(format!(
                    "{} is negative",
                    name
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the report precision.
    pub fn validate_precision(precision: usize) -> Result<(), LsmError> {
        if precision > MAX_PRECISION {
            return Err(LsmError::InvalidPrecision(precision));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LsmError> {
        if let Some(param) = duplicate_param {
            return Err(LsmError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
