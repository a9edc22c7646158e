//! # LSM — Ordinary Least-Squares Line Fitting for Rust
//!
//! Fit a straight line `y = incline · x + shift` to paired samples, estimate
//! the standard errors of both parameters, evaluate the fitted line together
//! with its error-bound lines, and render a fixed-precision text report.
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use lsm::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.9, 6.2, 7.8, 10.1];
//!
//! let ctx = FitContext::default();
//!
//! let description = estimate_fit(&x, &y, Fail, &ctx)?;
//! let lines = compute_lines(&x, &y, Some(&description), &ctx)?;
//! let report = render_report(&description, None, &ctx)?;
//!
//! assert_eq!(lines.len(), 5);
//! println!("{}", report);
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ```text
//! ========================================LSM computing result========================================
//!
//! [INFO]: incline: 1.990;
//! [INFO]: shift: 0.050;
//! [INFO]: incline error: 0.060;
//! [INFO]: shift error: 0.198;
//!
//! ====================================================================================================
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use std::sync::Arc;
//! use lsm::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![1.0, 2.0, 3.0];
//!
//! let sink = Arc::new(MemorySink::new());
//! let model = Lsm::new()
//!     .mismatch_strategy(Truncate)  // Cut both inputs to the shorter length
//!     .precision(4)                 // Four decimals in reports
//!     .sink(sink.clone())           // Capture pipeline events
//!     .build()?;
//!
//! let description = model.describe(&x, &y)?;
//! assert!(!sink.messages(Severity::Warning).is_empty());
//! println!("{}", model.report(&description, None)?);
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, LsmError>`. Before an error is
//! returned it is logged at error severity through the context's sink.
//!
//! ```rust
//! use lsm::prelude::*;
//!
//! let ctx = FitContext::builder().sink(std::sync::Arc::new(NullSink)).build()?;
//!
//! match estimate_fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], Fail, &ctx) {
//!     Ok(d) => println!("incline = {}", d.incline),
//!     Err(LsmError::DegenerateFit { variance }) => eprintln!("flat abscissa: {variance}"),
//!     Err(e) => eprintln!("fit failed: {e}"),
//! }
//! # Result::<(), LsmError>::Ok(())
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

// Layer 1: Primitives - errors and collaborator abstractions.
mod primitives;

// Layer 2: Math - summary statistics.
mod math;

// Layer 3: Algorithms - estimator and line generator.
mod algorithms;

// Layer 4: Engine - validation, resolution, reporting and orchestration.
mod engine;

// Input conversion from typed and untyped containers.
mod input;

// JSON request boundary.
mod request;

// High-level API.
mod api;

// Standard LSM prelude.
pub mod prelude {
    pub use crate::api::{
        compute_lines, estimate_fit, fit_json, render_report, FileStorage, FitDescription,
        FitLines, LogSink, LsmBuilder as Lsm, LsmError, LsmModel, MemorySink, MemoryStorage,
        MismatchStrategy,
        MismatchStrategy::Fail,
        MismatchStrategy::Truncate,
        NullSink, ReportStorage, Severity, TracingSink,
    };
    pub use crate::engine::context::{FitContext, FitContextBuilder};
    pub use crate::input::{coerce, LsmInput};
    pub use crate::request::{FitOutcome, FitRequest};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
