//! Request envelope around the engine

use crate::config::PredictionConfig;
use crate::error::{ForecastError, Result};
use crate::insights::TrendInsights;
use crate::models::PredictionResult;
use serde::{Deserialize, Serialize};

/// A caller's ask for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Number of days to forecast
    pub horizon: usize,
}

impl PredictionRequest {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    /// Check the horizon against the configured bounds
    pub fn validate(&self, config: &PredictionConfig) -> Result<()> {
        if self.horizon < config.min_horizon || self.horizon > config.max_horizon {
            return Err(ForecastError::ValidationError(format!(
                "Horizon must be between {} and {}, got {}",
                config.min_horizon, config.max_horizon, self.horizon
            )));
        }

        Ok(())
    }
}

/// Predictions together with their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predictions: Vec<PredictionResult>,
    pub insights: TrendInsights,
}
