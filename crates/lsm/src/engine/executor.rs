//! Pipeline orchestration for least-squares operations.
//!
//! ## Purpose
//!
//! This module wires the layers together: validation, mismatch resolution,
//! statistics, estimation, line generation and reporting. It is the only
//! place that talks to the logging sink and the report storage.
//!
//! ## Design notes
//!
//! * **Validate first**: All checks complete before any arithmetic.
//! * **All-or-nothing**: No partial description or lines escape on failure.
//! * **Log, then return**: Every error is logged at error severity before it
//!   is returned; truncation is logged as a warning and is not an error.
//!
//! ## Key concepts
//!
//! * **Preparation**: `validate -> resolve` yields equal-length views.
//! * **Estimation**: `statistics -> estimator` yields a description.
//! * **Supplied-or-computed**: Line generation uses a supplied description if
//!   present, otherwise estimates one from the same samples.
//!
//! ## Non-goals
//!
//! * This module does not convert untyped inputs (see `input`).

use std::path::Path;

use num_traits::Float;

use crate::algorithms::estimator::{DescriptionEstimator, FitDescription};
use crate::algorithms::lines::{FitLines, LineGenerator};
use crate::engine::context::FitContext;
use crate::engine::mismatch::{MismatchResolver, MismatchStrategy, Resolved};
use crate::engine::report::ReportFormatter;
use crate::engine::validator::{Validator, MIN_POINTS};
use crate::math::statistics::SummaryStatistics;
use crate::primitives::errors::LsmError;

// ============================================================================
// Executor
// ============================================================================

/// Runs the fitting pipeline against a [`FitContext`].
pub struct FitExecutor;

impl FitExecutor {
    // ========================================================================
    // Public Passes
    // ========================================================================

    /// Validate, resolve and estimate a description.
    pub fn describe<T: Float>(
        x: &[T],
        y: &[T],
        strategy: MismatchStrategy,
        ctx: &FitContext,
    ) -> Result<FitDescription<T>, LsmError> {
        let resolved = Self::prepare(x, y, strategy, ctx)?;
        Self::estimate(&resolved, ctx)
    }

    /// Validate, resolve and evaluate the fitted and bound lines.
    pub fn lines<T: Float>(
        x: &[T],
        y: &[T],
        description: Option<&FitDescription<T>>,
        strategy: MismatchStrategy,
        ctx: &FitContext,
    ) -> Result<FitLines<T>, LsmError> {
        Self::fit(x, y, description, strategy, ctx).map(|(_, lines)| lines)
    }

    /// Like [`Self::lines`], also returning the description that was used.
    pub fn fit<T: Float>(
        x: &[T],
        y: &[T],
        description: Option<&FitDescription<T>>,
        strategy: MismatchStrategy,
        ctx: &FitContext,
    ) -> Result<(FitDescription<T>, FitLines<T>), LsmError> {
        let resolved = Self::prepare(x, y, strategy, ctx)?;

        let description = match description {
            Some(supplied) => {
                Validator::validate_description(supplied).map_err(|e| ctx.reject(e))?;
                *supplied
            }
            None => Self::estimate(&resolved, ctx)?,
        };

        ctx.sink().info("Generating fit lines");
        let lines = LineGenerator::generate(resolved.abscissa, resolved.ordinates, &description);
        Ok((description, lines))
    }

    /// Render the report and optionally persist it.
    pub fn report<T: Float>(
        description: &FitDescription<T>,
        destination: Option<&Path>,
        ctx: &FitContext,
    ) -> Result<String, LsmError> {
        let text = ReportFormatter::render(description, ctx.precision(), ctx.banner_width());

        if let Some(path) = destination {
            ctx.storage().write(path, &text).map_err(|e| {
                ctx.reject(LsmError::Persistence {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            })?;
            ctx.sink()
                .info(&format!("Report saved to {}", path.display()));
        }

        Ok(text)
    }

    // ========================================================================
    // Internal Passes
    // ========================================================================

    /// Validate samples and reconcile their lengths.
    fn prepare<'a, T: Float>(
        x: &'a [T],
        y: &'a [T],
        strategy: MismatchStrategy,
        ctx: &FitContext,
    ) -> Result<Resolved<'a, T>, LsmError> {
        let sink = ctx.sink();
        sink.info("Validating input data");

        Validator::validate_samples(x, y).map_err(|e| ctx.reject(e))?;
        let resolved = MismatchResolver::resolve(x, y, strategy).map_err(|e| ctx.reject(e))?;

        if let Some((x_len, y_len)) = resolved.truncated_from {
            sink.warning(&format!(
                "Lengths of the arguments are not equal (abscissa: {}, ordinates: {}), truncating both to {}",
                x_len,
                y_len,
                resolved.len()
            ));
        }

        if resolved.len() == MIN_POINTS {
            sink.warning(&format!(
                "Only {} samples: error estimates rest on a single degree of freedom",
                MIN_POINTS
            ));
        }

        sink.info("Validation passed");
        Ok(resolved)
    }

    /// Compute statistics and estimate the description.
    fn estimate<T: Float>(
        resolved: &Resolved<'_, T>,
        ctx: &FitContext,
    ) -> Result<FitDescription<T>, LsmError> {
        ctx.sink().info("Calculating coefficients started");

        let stats = SummaryStatistics::compute(resolved.abscissa, resolved.ordinates);
        let description =
            DescriptionEstimator::estimate(&stats, resolved.abscissa, resolved.ordinates)
                .map_err(|e| ctx.reject(e))?;

        ctx.sink().info("Calculating coefficients completed");
        Ok(description)
    }
}
