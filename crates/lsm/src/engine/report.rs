//! Textual report of a fit description.
//!
//! ## Purpose
//!
//! This module renders a [`FitDescription`] as a banner-framed, fixed
//! precision report:
//!
//! ```text
//! ========================================LSM computing result========================================
//!
//! [INFO]: incline: 2.000;
//! [INFO]: shift: 0.000;
//! [INFO]: incline error: 0.000;
//! [INFO]: shift error: 0.000;
//!
//! ====================================================================================================
//! ```
//!
//! ## Invariants
//!
//! * Output is a pure function of the description, precision and width.
//! * Values that round to zero never carry a minus sign.
//! * Lines are separated by `\n`; there is no trailing newline.

use num_traits::Float;

use crate::algorithms::estimator::FitDescription;

/// Title centered in the opening banner.
pub const REPORT_TITLE: &str = "LSM computing result";

/// Renders fit descriptions as text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render `description` with `precision` decimals inside banners of `width`.
    pub fn render<T: Float>(description: &FitDescription<T>, precision: usize, width: usize) -> String {
        let field = |label: &str, value: T| {
            format!("[INFO]: {}: {};", label, Self::fixed(value, precision))
        };

        [
            format!("{:=^width$}", REPORT_TITLE, width = width),
            String::new(),
            field("incline", description.incline),
            field("shift", description.shift),
            field("incline error", description.incline_error),
            field("shift error", description.shift_error),
            String::new(),
            "=".repeat(width),
        ]
        .join("\n")
    }

    /// Format `value` with exactly `precision` decimals.
    pub fn fixed<T: Float>(value: T, precision: usize) -> String {
        let text = format!("{:.*}", precision, value.to_f64().unwrap_or(f64::NAN));

        // "-0.000" and "0.000" describe the same rounded value
        match text.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => text,
        }
    }
}
