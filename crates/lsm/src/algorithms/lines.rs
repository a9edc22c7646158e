//! Fitted and error-bound line generation.
//!
//! ## Purpose
//!
//! This module evaluates a [`FitDescription`] over the abscissa, producing the
//! predicted line and the two lines obtained by shifting slope and intercept
//! by their standard errors.
//!
//! ## Invariants
//!
//! * All five output sequences have the length of the abscissa.
//! * Output order matches input order.

use std::fmt::{Display, Formatter, Result};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algorithms::estimator::FitDescription;

// ============================================================================
// Fit Lines
// ============================================================================

/// Sample data together with the fitted line and its error bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitLines<T> {
    /// Abscissa the lines were evaluated at.
    pub abscissa: Vec<T>,

    /// Observed ordinates.
    pub ordinates: Vec<T>,

    /// `incline * x + shift`.
    pub line_predicted: Vec<T>,

    /// `(incline + incline_error) * x + (shift + shift_error)`.
    pub line_above: Vec<T>,

    /// `(incline - incline_error) * x + (shift - shift_error)`.
    pub line_under: Vec<T>,
}

impl<T> FitLines<T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.abscissa.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty()
    }
}

impl<T: Float> FitLines<T> {
    /// Observed minus predicted ordinates.
    pub fn residuals(&self) -> Vec<T> {
        self.ordinates
            .iter()
            .zip(self.line_predicted.iter())
            .map(|(&y, &p)| y - p)
            .collect()
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Evaluates a description over an abscissa.
pub struct LineGenerator;

impl LineGenerator {
    /// Generate the three lines for `description` over `x`.
    pub fn generate<T: Float>(x: &[T], y: &[T], description: &FitDescription<T>) -> FitLines<T> {
        FitLines {
            abscissa: x.to_vec(),
            ordinates: y.to_vec(),
            line_predicted: x.iter().map(|&xi| description.predict(xi)).collect(),
            line_above: x.iter().map(|&xi| description.upper(xi)).collect(),
            line_under: x.iter().map(|&xi| description.lower(xi)).collect(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitLines<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fitted Lines:")?;
        writeln!(
            f,
            "{:>10} {:>12} {:>12} {:>12} {:>12}",
            "X", "Y", "Predicted", "Above", "Under"
        )?;
        writeln!(f, "{:-<62}", "")?;

        // Show first 10 and last 10 rows when there are more than 20
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.4} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                self.abscissa[idx],
                self.ordinates[idx],
                self.line_predicted[idx],
                self.line_above[idx],
                self.line_under[idx]
            )?;
        }

        Ok(())
    }
}
