//! Forecast models and the per-day prediction record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

pub mod direction;
pub mod sentiment;
pub mod volume;

pub use direction::classify_trend;
pub use sentiment::forecast_sentiment;
pub use volume::forecast_volume;

/// Coarse five-way label of the historical slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongUpward,
    Upward,
    Stable,
    Downward,
    StrongDownward,
}

impl TrendDirection {
    /// Label for a volume-per-day slope
    pub fn from_slope(slope: f64) -> Self {
        if slope > 2.0 {
            TrendDirection::StrongUpward
        } else if slope > 0.5 {
            TrendDirection::Upward
        } else if slope > -0.5 {
            TrendDirection::Stable
        } else if slope > -2.0 {
            TrendDirection::Downward
        } else {
            TrendDirection::StrongDownward
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::StrongUpward => "strong_upward",
            TrendDirection::Upward => "upward",
            TrendDirection::Stable => "stable",
            TrendDirection::Downward => "downward",
            TrendDirection::StrongDownward => "strong_downward",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strong_upward" => Ok(TrendDirection::StrongUpward),
            "upward" => Ok(TrendDirection::Upward),
            "stable" => Ok(TrendDirection::Stable),
            "downward" => Ok(TrendDirection::Downward),
            "strong_downward" => Ok(TrendDirection::StrongDownward),
            other => Err(ForecastError::ValidationError(format!(
                "Unknown trend direction: {}",
                other
            ))),
        }
    }
}

/// Forecast for one future day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub date: NaiveDate,
    /// Seasonally adjusted volume
    pub volume: f64,
    pub sentiment: f64,
    pub confidence: f64,
    pub trend_direction: TrendDirection,
    /// Factor that was multiplied into `volume`
    pub seasonal_factor: f64,
}
