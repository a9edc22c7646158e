//! JSON request boundary.
//!
//! ## Purpose
//!
//! This module parses untyped fit requests of the form
//!
//! ```json
//! {
//!   "abscissa": [1, 2, 3, 4],
//!   "ordinates": [2.1, 3.9, 6.2, 7.8],
//!   "mismatch_strategy": "truncate",
//!   "description": { "incline": 2.0, "shift": 0.0, "incline_error": 0.1, "shift_error": 0.2 }
//! }
//! ```
//!
//! and maps every malformed part onto the crate's error taxonomy.
//!
//! ## Key concepts
//!
//! * **Sequences**: `abscissa`/`ordinates` must be arrays (`InputType`) of
//!   numbers (`InputValue`).
//! * **Strategy**: optional; an unknown name is `UnknownStrategy`.
//! * **Description**: optional; a malformed object is `MalformedDescription`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithms::estimator::FitDescription;
use crate::algorithms::lines::FitLines;
use crate::engine::context::FitContext;
use crate::engine::executor::FitExecutor;
use crate::engine::mismatch::MismatchStrategy;
use crate::input::{json_kind, LsmInput};
use crate::primitives::errors::LsmError;

// ============================================================================
// Request / Outcome
// ============================================================================

/// A parsed fit request.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    /// Independent variable samples.
    pub abscissa: Vec<f64>,

    /// Dependent variable samples.
    pub ordinates: Vec<f64>,

    /// Length-mismatch policy (default: `Fail`).
    pub mismatch_strategy: MismatchStrategy,

    /// Description to use instead of estimating one.
    pub description: Option<FitDescription<f64>>,
}

/// Description and lines produced by a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitOutcome {
    /// The description the lines were generated from.
    pub description: FitDescription<f64>,

    /// Fitted and bound lines.
    pub lines: FitLines<f64>,
}

impl FitRequest {
    /// Parse a request from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LsmError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| LsmError::InputType(format!("invalid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Parse a request from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self, LsmError> {
        let object = value.as_object().ok_or_else(|| {
            LsmError::InputType(format!("request must be an object, found {}", json_kind(value)))
        })?;

        let abscissa = samples(object.get("abscissa"), "abscissa")?;
        let ordinates = samples(object.get("ordinates"), "ordinates")?;

        let mismatch_strategy = match object.get("mismatch_strategy") {
            None | Some(Value::Null) => MismatchStrategy::default(),
            Some(Value::String(name)) => name.parse::<MismatchStrategy>()?,
            Some(other) => return Err(LsmError::UnknownStrategy(other.to_string())),
        };

        let description = match object.get("description") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                FitDescription::<f64>::deserialize(raw)
                    .map_err(|e| LsmError::MalformedDescription(e.to_string()))?,
            ),
        };

        Ok(Self {
            abscissa,
            ordinates,
            mismatch_strategy,
            description,
        })
    }

    /// Run the request: estimate (unless supplied) and generate lines.
    pub fn run(&self, ctx: &FitContext) -> Result<FitOutcome, LsmError> {
        let (description, lines) = FitExecutor::fit(
            &self.abscissa,
            &self.ordinates,
            self.description.as_ref(),
            self.mismatch_strategy,
            ctx,
        )?;

        Ok(FitOutcome { description, lines })
    }
}

fn samples(field: Option<&Value>, name: &str) -> Result<Vec<f64>, LsmError> {
    let value =
        field.ok_or_else(|| LsmError::InputType(format!("missing field '{name}'")))?;

    let converted: Result<Cow<'_, [f64]>, LsmError> = value.to_samples();
    match converted {
        Ok(samples) => Ok(samples.into_owned()),
        Err(LsmError::InputType(msg)) => Err(LsmError::InputType(format!("{name}: {msg}"))),
        Err(LsmError::InputValue(msg)) => Err(LsmError::InputValue(format!("{name}{msg}"))),
        Err(other) => Err(other),
    }
}
