//! Input abstractions for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for fit inputs, allowing the
//! public operations to accept slices, vectors, arrays, `ndarray` vectors and
//! untyped JSON arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Typed containers lend their buffer directly.
//! * **Interoperability**: Bridges Rust collections, `ndarray` and `serde_json`.
//! * **Fail-fast conversion**: Untyped inputs are checked element by element.
//!
//! ## Key concepts
//!
//! * **LsmInput Trait**: Types that can present themselves as an ordered run of samples.
//! * **Sequence vs. element errors**: A container that is not a sequence is an
//!   `InputType` error; a sequence with a non-numeric element is an `InputValue` error.
//!
//! ## Invariants
//!
//! * Returned samples preserve the order and count of the input container.
//!
//! ## Non-goals
//!
//! * This module does not check finiteness (see the validator).
//! * This module does not reconcile lengths (see the mismatch resolver).

use std::borrow::Cow;

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::{Float, ToPrimitive};
use serde_json::Value;

use crate::primitives::errors::LsmError;

/// Trait for types that can be used as abscissa or ordinates.
pub trait LsmInput<T: Float> {
    /// Present the input as an ordered sequence of samples.
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError>;
}

impl<T: Float> LsmInput<T> for [T] {
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float> LsmInput<T> for Vec<T> {
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Float, const N: usize> LsmInput<T> for [T; N] {
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Float, S> LsmInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError> {
        match self.as_slice() {
            Some(slice) => Ok(Cow::Borrowed(slice)),
            None => Err(LsmError::InputType(
                "ndarray input must be contiguous in memory".to_string(),
            )),
        }
    }
}

impl<T: Float> LsmInput<T> for Value {
    fn to_samples(&self) -> Result<Cow<'_, [T]>, LsmError> {
        let items = self.as_array().ok_or_else(|| {
            LsmError::InputType(format!("expected a JSON array, found {}", json_kind(self)))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_f64()
                    .and_then(|v| T::from(v))
                    .ok_or_else(|| {
                        LsmError::InputValue(format!("[{}] is {}", i, json_kind(item)))
                    })
            })
            .collect::<Result<Vec<T>, LsmError>>()
            .map(Cow::Owned)
    }
}

/// Convert any primitive numeric samples (e.g. integers) into floats.
pub fn coerce<T, V>(values: &[V]) -> Result<Vec<T>, LsmError>
where
    T: Float,
    V: ToPrimitive,
{
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.to_f64()
                .and_then(|v| T::from(v))
                .ok_or_else(|| LsmError::InputValue(format!("[{i}] is not representable")))
        })
        .collect()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
