//! High-level API for least-squares line fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: three free functions
//! taking an explicit [`FitContext`], and a fluent builder that bundles the
//! context with a mismatch strategy.
//!
//! ## Design notes
//!
//! * **Explicit context**: Logging sink, storage and precision are passed in, never global.
//! * **Flexible inputs**: Any [`LsmInput`] (slices, vectors, ndarray, JSON) is accepted.
//! * **Validated**: Builder parameters are validated when `.build()` is called.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LsmBuilder`] via `Lsm::new()`.
//! 2. Chain configuration methods (`.mismatch_strategy()`, `.precision()`, etc.).
//! 3. Call `.build()` to obtain an [`LsmModel`].

use std::path::Path;
use std::sync::Arc;

use num_traits::Float;

use crate::engine::context::FitContext;
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::input::LsmInput;
use crate::request::{FitOutcome, FitRequest};

// Publicly re-exported types
pub use crate::algorithms::estimator::FitDescription;
pub use crate::algorithms::lines::FitLines;
pub use crate::engine::context::FitContextBuilder;
pub use crate::engine::mismatch::MismatchStrategy;
pub use crate::primitives::errors::LsmError;
pub use crate::primitives::sink::{LogSink, MemorySink, NullSink, Severity, TracingSink};
pub use crate::primitives::storage::{FileStorage, MemoryStorage, ReportStorage};

// ============================================================================
// Free Functions
// ============================================================================

/// Estimate slope, intercept and their standard errors.
pub fn estimate_fit<T, X, Y>(
    abscissa: &X,
    ordinates: &Y,
    mismatch_strategy: MismatchStrategy,
    ctx: &FitContext,
) -> Result<FitDescription<T>, LsmError>
where
    T: Float,
    X: LsmInput<T> + ?Sized,
    Y: LsmInput<T> + ?Sized,
{
    let x = abscissa.to_samples().map_err(|e| ctx.reject(e))?;
    let y = ordinates.to_samples().map_err(|e| ctx.reject(e))?;
    FitExecutor::describe(&x, &y, mismatch_strategy, ctx)
}

/// Evaluate the fitted line and its error bounds over the abscissa.
///
/// Uses `description` when given, otherwise estimates one from the same
/// samples with the default (`Fail`) mismatch strategy.
pub fn compute_lines<T, X, Y>(
    abscissa: &X,
    ordinates: &Y,
    description: Option<&FitDescription<T>>,
    ctx: &FitContext,
) -> Result<FitLines<T>, LsmError>
where
    T: Float,
    X: LsmInput<T> + ?Sized,
    Y: LsmInput<T> + ?Sized,
{
    let x = abscissa.to_samples().map_err(|e| ctx.reject(e))?;
    let y = ordinates.to_samples().map_err(|e| ctx.reject(e))?;
    FitExecutor::lines(&x, &y, description, MismatchStrategy::default(), ctx)
}

/// Render the text report, writing it to `destination` when given.
pub fn render_report<T: Float>(
    description: &FitDescription<T>,
    destination: Option<&Path>,
    ctx: &FitContext,
) -> Result<String, LsmError> {
    FitExecutor::report(description, destination, ctx)
}

/// Parse and run a JSON fit request.
pub fn fit_json(request: &str, ctx: &FitContext) -> Result<FitOutcome, LsmError> {
    let request = FitRequest::from_json(request).map_err(|e| ctx.reject(e))?;
    request.run(ctx)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a configured least-squares model.
#[derive(Clone, Default)]
pub struct LsmBuilder {
    /// Length-mismatch policy.
    pub mismatch_strategy: Option<MismatchStrategy>,

    /// Context settings.
    context: FitContextBuilder,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    seen: Seen,
}

#[derive(Clone, Copy, Default)]
struct Seen {
    sink: bool,
    storage: bool,
    precision: bool,
    banner_width: bool,
}

impl LsmBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn mark(&mut self, already_set: bool, name: &'static str) {
        if already_set {
            self.duplicate_param = Some(name);
        }
    }

    /// Set the length-mismatch policy.
    pub fn mismatch_strategy(mut self, strategy: MismatchStrategy) -> Self {
        self.mark(self.mismatch_strategy.is_some(), "mismatch_strategy");
        self.mismatch_strategy = Some(strategy);
        self
    }

    /// Set the number of decimal places in reports.
    pub fn precision(mut self, precision: usize) -> Self {
        self.mark(self.seen.precision, "precision");
        self.seen.precision = true;
        self.context = self.context.precision(precision);
        self
    }

    /// Set the width of the report banner.
    pub fn banner_width(mut self, width: usize) -> Self {
        self.mark(self.seen.banner_width, "banner_width");
        self.seen.banner_width = true;
        self.context = self.context.banner_width(width);
        self
    }

    /// Set the logging sink.
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.mark(self.seen.sink, "sink");
        self.seen.sink = true;
        self.context = self.context.sink(sink);
        self
    }

    /// Set the report storage.
    pub fn storage(mut self, storage: Arc<dyn ReportStorage>) -> Self {
        self.mark(self.seen.storage, "storage");
        self.seen.storage = true;
        self.context = self.context.storage(storage);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LsmModel, LsmError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LsmModel {
            strategy: self.mismatch_strategy.unwrap_or_default(),
            context: self.context.build()?,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured least-squares model.
#[derive(Debug, Clone)]
pub struct LsmModel {
    strategy: MismatchStrategy,
    context: FitContext,
}

impl LsmModel {
    /// Configured mismatch strategy.
    pub fn strategy(&self) -> MismatchStrategy {
        self.strategy
    }

    /// Configured context.
    pub fn context(&self) -> &FitContext {
        &self.context
    }

    /// Estimate a description.
    pub fn describe<T, X, Y>(&self, abscissa: &X, ordinates: &Y) -> Result<FitDescription<T>, LsmError>
    where
        T: Float,
        X: LsmInput<T> + ?Sized,
        Y: LsmInput<T> + ?Sized,
    {
        estimate_fit(abscissa, ordinates, self.strategy, &self.context)
    }

    /// Generate lines, estimating a description unless one is supplied.
    pub fn lines<T, X, Y>(
        &self,
        abscissa: &X,
        ordinates: &Y,
        description: Option<&FitDescription<T>>,
    ) -> Result<FitLines<T>, LsmError>
    where
        T: Float,
        X: LsmInput<T> + ?Sized,
        Y: LsmInput<T> + ?Sized,
    {
        let x = abscissa.to_samples().map_err(|e| self.context.reject(e))?;
        let y = ordinates.to_samples().map_err(|e| self.context.reject(e))?;
        FitExecutor::lines(&x, &y, description, self.strategy, &self.context)
    }

    /// Render (and optionally persist) the report of a description.
    pub fn report<T: Float>(
        &self,
        description: &FitDescription<T>,
        destination: Option<&Path>,
    ) -> Result<String, LsmError> {
        render_report(description, destination, &self.context)
    }
}
