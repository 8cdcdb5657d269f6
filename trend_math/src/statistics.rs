//! Summary statistics
//!
//! Thin wrappers over `statrs` that turn its NaN results for short input
//! into errors. Overflow in long input is passed through as `inf` or `NaN`.

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }

    Ok(values.mean())
}

/// Sample standard deviation (Bessel-corrected, divides by `n - 1`)
pub fn sample_std_dev(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Sample standard deviation needs at least 2 values, have {}",
            values.len()
        )));
    }

    Ok(values.std_dev())
}

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
