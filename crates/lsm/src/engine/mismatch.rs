//! Sample-count enforcement and length-mismatch resolution.
//!
//! ## Purpose
//!
//! This module reconciles abscissa and ordinates of unequal length according
//! to a [`MismatchStrategy`] after enforcing the minimum sample count.
//!
//! ## Key concepts
//!
//! * **Fail**: Unequal lengths are an error (default).
//! * **Truncate**: Both sequences are cut to the shorter length, keeping
//!   their leading prefixes.
//!
//! ## Invariants
//!
//! * Resolved sequences have equal length of at least 3.
//! * Resolved sequences are prefixes of the inputs; nothing is reordered.
//!
//! ## Non-goals
//!
//! * This module does not align samples by value or resample.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::validator::Validator;
use crate::primitives::errors::LsmError;

// ============================================================================
// Mismatch Strategy
// ============================================================================

/// Policy for inputs of unequal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchStrategy {
    /// Reject unequal lengths (default).
    #[default]
    Fail,

    /// Cut the longer sequence to the length of the shorter.
    Truncate,
}

impl MismatchStrategy {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Truncate => "truncate",
        }
    }
}

impl Display for MismatchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MismatchStrategy {
    type Err = LsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" | "fall" => Ok(Self::Fail),
            "truncate" | "cut" => Ok(Self::Truncate),
            _ => Err(LsmError::UnknownStrategy(s.to_string())),
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Equal-length views of the input samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a, T> {
    /// Resolved abscissa.
    pub abscissa: &'a [T],

    /// Resolved ordinates.
    pub ordinates: &'a [T],

    /// Original `(x_len, y_len)` when truncation happened.
    pub truncated_from: Option<(usize, usize)>,
}

impl<T> Resolved<'_, T> {
    /// Resolved sample count.
    pub fn len(&self) -> usize {
        self.abscissa.len()
    }

    /// Whether the resolved samples are empty (never true after resolution).
    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty()
    }
}

/// Applies a [`MismatchStrategy`] to paired samples.
pub struct MismatchResolver;

impl MismatchResolver {
    /// Enforce the minimum sample count and reconcile lengths.
    pub fn resolve<'a, T>(
        x: &'a [T],
        y: &'a [T],
        strategy: MismatchStrategy,
    ) -> Result<Resolved<'a, T>, LsmError> {
        Validator::validate_sample_count(x.len(), y.len())?;

        if x.len() == y.len() {
            return Ok(Resolved {
                abscissa: x,
                ordinates: y,
                truncated_from: None,
            });
        }

        match strategy {
            MismatchStrategy::Fail => Err(LsmError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            }),
            MismatchStrategy::Truncate => {
                let n = x.len().min(y.len());
                Ok(Resolved {
                    abscissa: &x[..n],
                    ordinates: &y[..n],
                    truncated_from: Some((x.len(), y.len())),
                })
            }
        }
    }
}
