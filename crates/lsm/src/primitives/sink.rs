//! Logging sinks for pipeline events.
//!
//! ## Purpose
//!
//! The fitting pipeline reports progress and failures through a [`LogSink`]
//! supplied by the caller inside the fit context. This module defines the
//! trait and three sinks: one forwarding to `tracing`, one recording in
//! memory, and one discarding everything.
//!
//! ## Invariants
//!
//! * Messages are plain text; no formatting contract beyond that.
//! * Sinks never fail and never return a value.
//!
//! ## Non-goals
//!
//! * This module does not install a `tracing` subscriber.

use std::fmt::{Display, Formatter, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

// ============================================================================
// Severity
// ============================================================================

/// Severity of a pipeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Progress of a normal run.
    Info,

    /// Recoverable condition, e.g. input truncation.
    Warning,

    /// A failure that is about to be returned to the caller.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

// ============================================================================
// Sink Trait
// ============================================================================

/// Destination for pipeline log events.
pub trait LogSink: Send + Sync {
    /// Record one event.
    fn log(&self, severity: Severity, message: &str);

    /// Record an info event.
    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Record a warning event.
    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Record an error event.
    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Forwards events to the `tracing` facade under the `lsm` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "lsm", "{}", message),
            Severity::Warning => tracing::warn!(target: "lsm", "{}", message),
            Severity::Error => tracing::error!(target: "lsm", "{}", message),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _severity: Severity, _message: &str) {}
}

/// Records events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Recorded messages of one severity.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Number of recorded events of one severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|(s, _)| *s == severity).count()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking reader cannot leave the event list half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<(Severity, String)>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, message: &str) {
        self.lock().push((severity, message.to_string()));
    }
}
