//! Tests for the public least-squares API.
//!
//! These tests verify the user-facing operations exported by the prelude:
//! - `estimate_fit` on exact, noisy, truncated and invalid data
//! - `compute_lines` with supplied and computed descriptions
//! - `render_report` formatting and persistence
//! - The fluent builder and the JSON request boundary
//!
//! ## Test Organization
//!
//! 1. **Scenarios** - Concrete input/output pairs
//! 2. **Properties** - Invariants over families of inputs
//! 3. **Lines** - Supplied-or-computed descriptions
//! 4. **Reports** - Formatting and persistence
//! 5. **Builder** - Configuration and validation
//! 6. **Inputs** - ndarray, JSON and integer inputs
//! 7. **Logging** - Events emitted through the sink

use std::fs;
use std::sync::Arc;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array1;
use serde_json::json;

use lsm::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn quiet() -> FitContext {
    FitContext::builder()
        .sink(Arc::new(NullSink))
        .storage(Arc::new(MemoryStorage::new()))
        .build()
        .unwrap()
}

fn recording() -> (FitContext, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let ctx = FitContext::builder()
        .sink(sink.clone())
        .storage(Arc::new(MemoryStorage::new()))
        .build()
        .unwrap();
    (ctx, sink)
}

/// Deterministic noise in [-0.5, 0.5).
fn noise(seed: u64, n: usize) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) - 0.5
        })
        .collect()
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test exact collinear data.
///
/// Verifies slope 2, intercept 0 and zero errors for y = 2x.
#[test]
fn test_collinear_three_points() {
    let ctx = quiet();
    let d = estimate_fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], Fail, &ctx).unwrap();

    assert_relative_eq!(d.incline, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.shift, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.incline_error, 0.0, epsilon = 1e-7);
    assert_abs_diff_eq!(d.shift_error, 0.0, epsilon = 1e-7);

    let report = render_report(&d, None, &ctx).unwrap();
    assert!(report.contains("[INFO]: incline: 2.000;"));
    assert!(report.contains("[INFO]: shift: 0.000;"));
    assert!(report.contains("[INFO]: incline error: 0.000;"));
    assert!(report.contains("[INFO]: shift error: 0.000;"));
}

/// Test truncation of the longer input.
///
/// Verifies both sequences are resolved to their 3-element prefixes.
#[test]
fn test_truncate_to_shorter_prefix() {
    let ctx = quiet();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.0, 2.0, 3.0];

    let lines = Lsm::new()
        .mismatch_strategy(Truncate)
        .sink(Arc::new(NullSink))
        .build()
        .unwrap()
        .lines(&x, &y, None)
        .unwrap();

    assert_eq!(lines.abscissa, vec![1.0, 2.0, 3.0]);
    assert_eq!(lines.ordinates, vec![1.0, 2.0, 3.0]);

    let d = estimate_fit(&x, &y, Truncate, &ctx).unwrap();
    assert_relative_eq!(d.incline, 1.0, epsilon = 1e-12);
}

/// Test too few samples.
///
/// Verifies two points produce a length error.
#[test]
fn test_two_points_is_length_error() {
    let res = estimate_fit(&[1.0, 2.0], &[1.0, 2.0], Fail, &quiet());
    assert_eq!(res, Err(LsmError::TooFewPoints { got: 2, min: 3 }));
}

/// Test length mismatch under the default strategy.
///
/// Verifies unequal lengths produce a mismatch error.
#[test]
fn test_mismatch_fails_by_default() {
    let res = estimate_fit(
        &[1.0, 2.0, 3.0],
        &[1.0, 2.0, 3.0, 4.0],
        MismatchStrategy::default(),
        &quiet(),
    );
    assert_eq!(res, Err(LsmError::MismatchedInputs { x_len: 3, y_len: 4 }));
}

/// Test zero-variance abscissa.
///
/// Verifies identical abscissa values produce a degenerate-fit error.
#[test]
fn test_constant_abscissa_is_degenerate() {
    let res = estimate_fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], Fail, &quiet());
    assert!(matches!(res, Err(LsmError::DegenerateFit { .. })));
}

/// Test report rounding.
///
/// Verifies values are rounded to three decimals.
#[test]
fn test_report_rounds_incline() {
    let d = FitDescription {
        incline: 1.23456,
        shift: 0.0,
        incline_error: 0.0,
        shift_error: 0.0,
    };
    let report = render_report(&d, None, &quiet()).unwrap();
    assert!(report.contains("incline: 1.235;"));
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test recovery of exact lines.
///
/// Verifies several (a, b) pairs are recovered from noiseless data.
#[test]
fn test_noiseless_lines_are_recovered() {
    let ctx = quiet();
    let x: Vec<f64> = (0..25).map(|i| i as f64 * 0.4 - 3.0).collect();

    for &(a, b) in &[(2.0, 1.0), (-0.5, 10.0), (0.0, -4.0), (123.0, 0.25)] {
        let y: Vec<f64> = x.iter().map(|&xi| a * xi + b).collect();
        let d = estimate_fit(&x, &y, Fail, &ctx).unwrap();

        assert_abs_diff_eq!(d.incline, a, epsilon = 1e-9);
        assert_abs_diff_eq!(d.shift, b, epsilon = 1e-9);
        assert_abs_diff_eq!(d.incline_error, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(d.shift_error, 0.0, epsilon = 1e-6);
    }
}

/// Test error non-negativity.
///
/// Verifies errors are non-negative and finite for noisy inputs.
#[test]
fn test_errors_are_non_negative() {
    let ctx = quiet();
    for seed in 1..20u64 {
        let n = 3 + (seed as usize % 17);
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = noise(seed, n)
            .iter()
            .zip(x.iter())
            .map(|(e, xi)| 0.7 * xi - 2.0 + 3.0 * e)
            .collect();

        let d = estimate_fit(&x, &y, Fail, &ctx).unwrap();
        assert!(d.incline_error >= 0.0 && d.incline_error.is_finite());
        assert!(d.shift_error >= 0.0 && d.shift_error.is_finite());
    }
}

/// Test truncation always yields prefixes.
///
/// Verifies the resolved length is the minimum length for various shapes.
#[test]
fn test_truncation_yields_prefixes() {
    let ctx = quiet();
    for (nx, ny) in [(3, 7), (8, 4), (5, 5), (12, 3)] {
        let x: Vec<f64> = (0..nx).map(|i| (i * i) as f64).collect();
        let y: Vec<f64> = (0..ny).map(|i| i as f64 * 1.5).collect();

        let model = Lsm::new()
            .mismatch_strategy(Truncate)
            .sink(Arc::new(NullSink))
            .build()
            .unwrap();
        let lines = model.lines(&x, &y, None).unwrap();

        let n = nx.min(ny);
        assert_eq!(lines.len(), n);
        assert_eq!(lines.abscissa[..], x[..n]);
        assert_eq!(lines.ordinates[..], y[..n]);
        assert!(estimate_fit(&x, &y, Truncate, &ctx).is_ok());
    }
}

// ============================================================================
// Line Tests
// ============================================================================

/// Test computed and supplied descriptions agree.
///
/// Verifies compute_lines without a description matches an explicit one.
#[test]
fn test_lines_computed_equals_supplied() {
    let ctx = quiet();
    let x = vec![0.5, 1.5, 2.0, 3.25, 4.0, 6.5];
    let y = vec![1.1, 2.8, 4.2, 6.1, 8.3, 12.9];

    let d = estimate_fit(&x, &y, Fail, &ctx).unwrap();
    let explicit = compute_lines(&x, &y, Some(&d), &ctx).unwrap();
    let computed = compute_lines(&x, &y, None, &ctx).unwrap();

    assert_eq!(explicit, computed);
}

/// Test line shapes and ordering.
///
/// Verifies all five sequences share the input length and ordering, and the
/// bound lines follow the error-shifted parameters.
#[test]
fn test_lines_shape_and_bounds() {
    let ctx = quiet();
    let x = vec![4.0, 1.0, 3.0, 2.0];
    let y = vec![8.5, 2.1, 6.4, 3.7];

    let lines = compute_lines(&x, &y, None, &ctx).unwrap();
    let d = estimate_fit(&x, &y, Fail, &ctx).unwrap();

    assert_eq!(lines.abscissa, x);
    assert_eq!(lines.ordinates, y);
    for i in 0..x.len() {
        assert_relative_eq!(lines.line_predicted[i], d.incline * x[i] + d.shift);
        assert_relative_eq!(
            lines.line_above[i],
            (d.incline + d.incline_error) * x[i] + (d.shift + d.shift_error)
        );
        assert_relative_eq!(
            lines.line_under[i],
            (d.incline - d.incline_error) * x[i] + (d.shift - d.shift_error)
        );
    }
}

/// Test malformed supplied description.
///
/// Verifies a negative error field is rejected.
#[test]
fn test_lines_reject_malformed_description() {
    let d = FitDescription {
        incline: 1.0,
        shift: 0.0,
        incline_error: 0.0,
        shift_error: -1.0,
    };
    let res = compute_lines(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], Some(&d), &quiet());
    assert!(matches!(res, Err(LsmError::MalformedDescription(_))));
}

/// Test that lines still validate their inputs with a supplied description.
#[test]
fn test_lines_validate_inputs_with_description() {
    let d = FitDescription {
        incline: 1.0,
        shift: 0.0,
        incline_error: 0.0,
        shift_error: 0.0,
    };
    let res = compute_lines(&[1.0, 2.0], &[1.0, 2.0], Some(&d), &quiet());
    assert!(matches!(res, Err(LsmError::TooFewPoints { .. })));
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test report determinism.
#[test]
fn test_report_is_deterministic() {
    let ctx = quiet();
    let d = estimate_fit(&[1.0, 2.0, 3.0, 4.0], &[1.3, 1.9, 3.2, 3.8], Fail, &ctx).unwrap();

    let first = render_report(&d, None, &ctx).unwrap();
    let second = render_report(&d, None, &ctx).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

/// Test report persistence to disk.
///
/// Verifies the file holds exactly the returned text and is overwritten.
#[test]
fn test_report_persists_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "stale content that is much longer than nothing at all ".repeat(100)).unwrap();

    let ctx = FitContext::builder().sink(Arc::new(NullSink)).build().unwrap();
    let d = FitDescription {
        incline: 0.5,
        shift: -2.0,
        incline_error: 0.01,
        shift_error: 0.02,
    };

    let text = render_report(&d, Some(&path), &ctx).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
    assert!(text.contains("[INFO]: shift: -2.000;"));
}

/// Test persistence failures.
///
/// Verifies an unwritable destination produces a persistence error.
#[test]
fn test_report_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");

    let sink = Arc::new(MemorySink::new());
    let ctx = FitContext::builder().sink(sink.clone()).build().unwrap();
    let d = FitDescription {
        incline: 1.0,
        shift: 1.0,
        incline_error: 0.0,
        shift_error: 0.0,
    };

    let res = render_report(&d, Some(&path), &ctx);
    assert!(matches!(res, Err(LsmError::Persistence { .. })));
    assert_eq!(sink.count(Severity::Error), 1);
}

/// Test custom storage and precision.
#[test]
fn test_report_custom_storage_and_precision() {
    let storage = Arc::new(MemoryStorage::new());
    let model = Lsm::new()
        .precision(5)
        .storage(storage.clone())
        .sink(Arc::new(NullSink))
        .build()
        .unwrap();

    let d = FitDescription {
        incline: 1.0 / 3.0,
        shift: 0.0,
        incline_error: 0.0,
        shift_error: 0.0,
    };
    let path = std::path::Path::new("memory/report.txt");
    let text = model.report(&d, Some(path)).unwrap();

    assert!(text.contains("incline: 0.33333;"));
    assert_eq!(storage.read(path), Some(text));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Lsm::new().precision(2).precision(4).build();
    assert!(matches!(
        res,
        Err(LsmError::DuplicateParameter {
            parameter: "precision"
        })
    ));

    let res = Lsm::new().mismatch_strategy(Fail).mismatch_strategy(Truncate).build();
    assert!(matches!(
        res,
        Err(LsmError::DuplicateParameter {
            parameter: "mismatch_strategy"
        })
    ));
}

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let model = Lsm::new().build().unwrap();
    assert_eq!(model.strategy(), Fail);
    assert_eq!(model.context().precision(), 3);
}

/// Test builder precision validation.
#[test]
fn test_builder_invalid_precision() {
    assert_eq!(
        Lsm::new().precision(99).build().err(),
        Some(LsmError::InvalidPrecision(99))
    );
}

// ============================================================================
// Input Tests
// ============================================================================

/// Test ndarray and f32 inputs.
#[test]
fn test_ndarray_and_f32_inputs() {
    let ctx = quiet();
    let x = Array1::from(vec![1.0f32, 2.0, 3.0, 4.0]);
    let y = Array1::from(vec![3.0f32, 5.0, 7.0, 9.0]);

    let d = estimate_fit(&x, &y, Fail, &ctx).unwrap();
    assert_relative_eq!(d.incline, 2.0f32, epsilon = 1e-4);
    assert_relative_eq!(d.shift, 1.0f32, epsilon = 1e-4);
}

/// Test integer inputs via coercion.
#[test]
fn test_integer_inputs() {
    let x: Vec<f64> = coerce(&[1i64, 2, 3, 4]).unwrap();
    let y: Vec<f64> = coerce(&[2u8, 4, 6, 8]).unwrap();
    let d = estimate_fit(&x, &y, Fail, &quiet()).unwrap();
    assert_relative_eq!(d.incline, 2.0, epsilon = 1e-12);
}

/// Test JSON inputs.
///
/// Verifies JSON arrays qualify and non-arrays or non-numbers are rejected.
#[test]
fn test_json_inputs() {
    let ctx = quiet();

    let d: FitDescription<f64> =
        estimate_fit(&json!([1, 2, 3]), &json!([2.0, 4.0, 6.0]), Fail, &ctx).unwrap();
    assert_relative_eq!(d.incline, 2.0, epsilon = 1e-12);

    let res: Result<FitDescription<f64>, _> =
        estimate_fit(&json!("1, 2, 3"), &json!([1, 2, 3]), Fail, &ctx);
    assert!(matches!(res, Err(LsmError::InputType(_))));

    let res: Result<FitDescription<f64>, _> =
        estimate_fit(&json!([1, 2, 3]), &json!([1, "x", 3]), Fail, &ctx);
    assert!(matches!(res, Err(LsmError::InputValue(_))));
}

/// Test non-finite inputs.
#[test]
fn test_non_finite_inputs_rejected() {
    let res = estimate_fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0], Fail, &quiet());
    assert!(matches!(res, Err(LsmError::InputValue(_))));
}

/// Test a complete JSON request.
#[test]
fn test_fit_json_request() {
    let (ctx, sink) = recording();
    let outcome = fit_json(
        r#"{"abscissa": [1, 2, 3, 4, 5], "ordinates": [2, 4, 6], "mismatch_strategy": "truncate"}"#,
        &ctx,
    )
    .unwrap();

    assert_relative_eq!(outcome.description.incline, 2.0, epsilon = 1e-12);
    assert_eq!(outcome.lines.len(), 3);
    assert_eq!(sink.count(Severity::Error), 0);

    let encoded = serde_json::to_value(&outcome).unwrap();
    assert_eq!(encoded["lines"]["abscissa"], json!([1.0, 2.0, 3.0]));

    let res = fit_json(r#"{"abscissa": [1, 2, 3], "ordinates": [1, 2, 3], "mismatch_strategy": 7}"#, &ctx);
    assert!(matches!(res, Err(LsmError::UnknownStrategy(_))));
    assert_eq!(sink.count(Severity::Error), 1);
}

// ============================================================================
// Logging Tests
// ============================================================================

/// Test every failure is logged at error severity.
#[test]
fn test_failures_are_logged() {
    let (ctx, sink) = recording();

    let _ = estimate_fit(&[1.0, 2.0], &[1.0, 2.0], Fail, &ctx);
    let _ = estimate_fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0], Fail, &ctx);
    let _ = estimate_fit(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], Fail, &ctx);

    let errors = sink.messages(Severity::Error);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("Too few points"));
    assert!(errors[1].contains("Length mismatch"));
    assert!(errors[2].contains("Degenerate fit"));
}

/// Test truncation is a warning, not an error.
#[test]
fn test_truncation_logs_warning() {
    let (ctx, sink) = recording();
    estimate_fit(
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[1.0, 2.0, 3.0, 4.5],
        Truncate,
        &ctx,
    )
    .unwrap();

    assert_eq!(sink.count(Severity::Error), 0);
    let warnings = sink.messages(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("not equal"));
}
