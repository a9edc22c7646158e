//! Fit context: the collaborators and settings every operation receives.
//!
//! ## Purpose
//!
//! A [`FitContext`] carries the logging sink, the report storage and the
//! display settings. It is passed explicitly to each public operation so no
//! process-wide state is involved.
//!
//! ## Invariants
//!
//! * A context is immutable once built; it can be shared across calls and threads.
//! * `precision` never exceeds [`MAX_PRECISION`](crate::engine::validator::MAX_PRECISION).

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::engine::validator::Validator;
use crate::primitives::errors::LsmError;
use crate::primitives::sink::{LogSink, TracingSink};
use crate::primitives::storage::{FileStorage, ReportStorage};

/// Default number of decimal places in reports.
pub const DEFAULT_PRECISION: usize = 3;

/// Default width of the report banner.
pub const DEFAULT_BANNER_WIDTH: usize = 100;

// ============================================================================
// Context
// ============================================================================

/// Collaborators and settings for least-squares operations.
#[derive(Clone)]
pub struct FitContext {
    sink: Arc<dyn LogSink>,
    storage: Arc<dyn ReportStorage>,
    precision: usize,
    banner_width: usize,
}

impl Default for FitContext {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink),
            storage: Arc::new(FileStorage),
            precision: DEFAULT_PRECISION,
            banner_width: DEFAULT_BANNER_WIDTH,
        }
    }
}

impl Debug for FitContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitContext")
            .field("precision", &self.precision)
            .field("banner_width", &self.banner_width)
            .finish_non_exhaustive()
    }
}

impl FitContext {
    /// Start building a context from the defaults.
    pub fn builder() -> FitContextBuilder {
        FitContextBuilder::default()
    }

    /// Logging sink.
    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    /// Report storage.
    pub fn storage(&self) -> &dyn ReportStorage {
        self.storage.as_ref()
    }

    /// Decimal places used in reports.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Width of the report banner.
    pub fn banner_width(&self) -> usize {
        self.banner_width
    }

    /// Log `err` at error severity and hand it back for returning.
    pub(crate) fn reject(&self, err: LsmError) -> LsmError {
        self.sink.error(&err.to_string());
        err
    }
}

// ============================================================================
// Context Builder
// ============================================================================

/// Builder for [`FitContext`].
#[derive(Clone, Default)]
pub struct FitContextBuilder {
    sink: Option<Arc<dyn LogSink>>,
    storage: Option<Arc<dyn ReportStorage>>,
    precision: Option<usize>,
    banner_width: Option<usize>,
}

impl FitContextBuilder {
    /// Set the logging sink.
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the report storage.
    pub fn storage(mut self, storage: Arc<dyn ReportStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the number of decimal places in reports.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the width of the report banner.
    pub fn banner_width(mut self, width: usize) -> Self {
        self.banner_width = Some(width);
        self
    }

    /// Validate settings and build the context.
    pub fn build(self) -> Result<FitContext, LsmError> {
        let defaults = FitContext::default();
        let precision = self.precision.unwrap_or(defaults.precision);
        Validator::validate_precision(precision)?;

        Ok(FitContext {
            sink: self.sink.unwrap_or(defaults.sink),
            storage: self.storage.unwrap_or(defaults.storage),
            precision,
            banner_width: self.banner_width.unwrap_or(defaults.banner_width),
        })
    }
}
