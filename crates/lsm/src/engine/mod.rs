//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates and reconciles inputs, drives
//! the algorithms, renders reports and owns the interaction with the logging
//! sink and report storage carried by the [`context::FitContext`].
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline orchestration.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Mismatch policy and resolution.
pub mod mismatch;

/// Collaborators and settings.
pub mod context;

/// Report rendering.
pub mod report;
