//! Error types for the trend_forecast crate

use thiserror::Error;

/// Custom error types for the trend_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Not enough historical observations to run a prediction
    #[error("Insufficient data for prediction: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Error related to request or observation validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid configuration values
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to malformed input data
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from numeric building blocks
    #[error("Math error: {0}")]
    MathError(#[from] trend_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from parsing configuration JSON
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

impl ForecastError {
    /// Whether this is the "not enough data" condition callers surface to clients
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ForecastError::InsufficientData { .. })
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
