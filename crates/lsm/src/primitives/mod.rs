//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type and the collaborator abstractions
//! (logging sink, report storage) used throughout the crate. It has zero
//! internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Logging sinks.
pub mod sink;

/// Report storage.
pub mod storage;
