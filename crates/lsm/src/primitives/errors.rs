//! Error types for least-squares operations.
//!
//! ## Purpose
//!
//! This module defines every error condition that can occur while fitting a
//! line: input conversion, sample-count and length checks, mismatch policy,
//! degenerate abscissa, malformed descriptions, and report persistence.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Comparable**: `Clone + PartialEq` so callers can match and compare errors.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-sequence inputs, non-real elements.
//! 2. **Shape validation**: Too few samples, unequal lengths, unknown policy.
//! 3. **Numeric validity**: Zero-variance abscissa.
//! 4. **Boundaries**: Malformed descriptions, failed report writes, builder misuse.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not log; the engine logs before returning an error.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for least-squares operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LsmError {
    /// Input cannot be treated as an ordered sequence of values.
    InputType(String),

    /// Input contains an element that is not a real number.
    InputValue(String),

    /// A fit needs at least 3 samples to yield a defined residual variance.
    TooFewPoints {
        /// Number of samples in the shorter input.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// Abscissa and ordinates have different lengths under the `Fail` strategy.
    MismatchedInputs {
        /// Number of abscissa samples.
        x_len: usize,
        /// Number of ordinate samples.
        y_len: usize,
    },

    /// Mismatch strategy name is not one of the known strategies.
    UnknownStrategy(String),

    /// Abscissa has zero effective variance; the fit is undefined.
    DegenerateFit {
        /// The computed `mean(x²) - mean(x)²`.
        variance: f64,
    },

    /// A supplied description is not a well-formed fit description.
    MalformedDescription(String),

    /// Writing the report to its destination failed.
    Persistence {
        /// Destination path.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// Report precision exceeds the supported number of decimal places.
    InvalidPrecision(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LsmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InputType(msg) => write!(f, "Input is not a sequence: {msg}"),
            Self::InputValue(msg) => write!(f, "Input contains a non-real value: {msg}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "Length mismatch: abscissa has {x_len} points, ordinates have {y_len}"
                )
            }
            Self::UnknownStrategy(name) => {
                write!(
                    f,
                    "Unknown mismatch strategy: '{name}' (expected 'fail' or 'truncate')"
                )
            }
            Self::DegenerateFit { variance } => {
                write!(
                    f,
                    "Degenerate fit: abscissa variance is {variance} (must be > 0)"
                )
            }
            Self::MalformedDescription(msg) => write!(f, "Malformed fit description: {msg}"),
            Self::Persistence { path, reason } => {
                write!(f, "Failed to write report to '{path}': {reason}")
            }
            Self::InvalidPrecision(p) => {
                write!(f, "Invalid precision: {p} (must be at most 15)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for LsmError {}
