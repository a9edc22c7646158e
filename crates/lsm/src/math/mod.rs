//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numerical building blocks with no knowledge of validation, logging
//! or reporting.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample means for the closed-form solution.
pub mod statistics;
