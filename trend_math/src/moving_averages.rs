//! Weighted averages over trailing windows
//!
//! Contains:
//! - Trailing window selection
//! - Linearly weighted moving average (oldest weight 1, newest weight n)

use crate::{MathError, Result};

/// The last `min(period, values.len())` values
pub fn trailing_window(values: &[f64], period: usize) -> &[f64] {
    let start = values.len().saturating_sub(period);
    &values[start..]
}

/// Linearly weighted average where the k-th value carries weight `k + 1`
pub fn linear_weighted_average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "No values for weighted average".to_string(),
        ));
    }

    let (weighted_sum, weight_sum) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(value_acc, weight_acc), (i, &value)| {
                let weight = (i + 1) as f64;
                (value_acc + value * weight, weight_acc + weight)
            });

    Ok(weighted_sum / weight_sum)
}
