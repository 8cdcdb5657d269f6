//! Forecasting primitives for daily series
//!
//! Contains implementations of:
//! - Ordinary least-squares slope against the observation index
//! - Double Exponential Smoothing (Holt's linear method)

use crate::{MathError, Result};

/// OLS slope of `values` regressed on their index `0..n-1`
pub fn ols_slope(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(
            "Need at least 2 points for linear regression".to_string(),
        ));
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(MathError::CalculationError(
            "Cannot calculate slope: x values are too similar".to_string(),
        ));
    }

    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Double Exponential Smoothing (Holt's Method) fitted over a whole series
#[derive(Debug, Clone)]
pub struct DoubleExponentialSmoothing {
    alpha: f64,
    beta: f64,
    level: f64,
    trend: f64,
}

impl DoubleExponentialSmoothing {
    /// Smooth a whole series.
    ///
    /// The level starts at `values[0]` and the trend at `values[1] - values[0]`;
    /// the recurrence then runs over `values[1..]`.
    pub fn fit(alpha: f64, beta: f64, values: &[f64]) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(MathError::InvalidInput(
                "Alpha must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        if beta <= 0.0 || beta >= 1.0 {
            return Err(MathError::InvalidInput(
                "Beta must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        if values.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points to initialise level and trend".to_string(),
            ));
        }

        let mut des = Self {
            alpha,
            beta,
            level: values[0],
            trend: values[1] - values[0],
        };
        for &value in &values[1..] {
            des.update(value);
        }

        Ok(des)
    }

    fn update(&mut self, value: f64) {
        let new_level = self.alpha * value + (1.0 - self.alpha) * (self.level + self.trend);
        self.trend = self.beta * (new_level - self.level) + (1.0 - self.beta) * self.trend;
        self.level = new_level;
    }

    /// Forecast h steps ahead
    pub fn forecast(&self, h: usize) -> f64 {
        self.level + (h as f64) * self.trend
    }

    /// Smoothed level after the last observation
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Smoothed trend after the last observation
    pub fn trend(&self) -> f64 {
        self.trend
    }
}
