//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the least-squares estimator and the line generator
//! on top of the math layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Slope/intercept estimation.
pub mod estimator;

/// Predicted and error-bound lines.
pub mod lines;
