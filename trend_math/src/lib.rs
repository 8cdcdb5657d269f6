//! # Trend Math
//!
//! Numeric building blocks for trend forecasting.
//! This crate provides the smoothing, regression and summary statistics
//! used by the prediction engine in `trend_forecast`.

use thiserror::Error;

pub mod forecasting;
pub mod moving_averages;
pub mod statistics;

pub use forecasting::{ols_slope, DoubleExponentialSmoothing};
pub use moving_averages::linear_weighted_average;
pub use statistics::{clamp, mean, sample_std_dev};

/// Errors that can occur in numeric calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for numeric operations
pub type Result<T> = std::result::Result<T, MathError>;
