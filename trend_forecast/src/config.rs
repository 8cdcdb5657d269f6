//! Limits for prediction requests
//!
//! The forecasting constants are fixed; only the request envelope is
//! configurable. Values load from JSON (missing keys take their defaults)
//! and may be overridden from the environment.

use crate::data::MIN_HISTORY;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_MAX_HORIZON: &str = "TRENDSCOUT_MAX_HORIZON";
pub const ENV_MAX_HISTORY: &str = "TRENDSCOUT_MAX_HISTORY";

/// Bounds on history length and forecast horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Fewest observations a request may use
    pub min_history: usize,
    /// Most recent observations kept per request
    pub max_history: usize,
    pub min_horizon: usize,
    pub max_horizon: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_history: MIN_HISTORY,
            max_history: 30,
            min_horizon: 1,
            max_horizon: 60,
        }
    }
}

impl PredictionConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PredictionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Apply `TRENDSCOUT_MAX_HORIZON` / `TRENDSCOUT_MAX_HISTORY` when set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unparsable values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_override(&lookup, ENV_MAX_HORIZON) {
            self.max_horizon = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_MAX_HISTORY) {
            self.max_history = value;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_history < MIN_HISTORY {
            return Err(ForecastError::InvalidParameter(format!(
                "min_history must be at least {}, got {}",
                MIN_HISTORY, self.min_history
            )));
        }
        if self.max_history < self.min_history {
            return Err(ForecastError::InvalidParameter(format!(
                "max_history ({}) is below min_history ({})",
                self.max_history, self.min_history
            )));
        }
        if self.min_horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "min_horizon must be at least 1".to_string(),
            ));
        }
        if self.min_horizon > self.max_horizon {
            return Err(ForecastError::InvalidParameter(format!(
                "min_horizon ({}) exceeds max_horizon ({})",
                self.min_horizon, self.max_horizon
            )));
        }

        Ok(())
    }
}

fn parse_override<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, value = %raw, %err, "ignoring unparsable override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PredictionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_horizon, 60);
        assert_eq!(config.max_history, 30);
    }

    #[test]
    fn test_overrides() {
        let config = PredictionConfig::default()
            .with_overrides(|key| match key {
                ENV_MAX_HORIZON => Some("14".to_string()),
                ENV_MAX_HISTORY => Some("not-a-number".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.max_horizon, 14);
        assert_eq!(config.max_history, 30);
    }

    #[test]
    fn test_override_that_breaks_bounds_is_rejected() {
        let result = PredictionConfig::default().with_overrides(|key| match key {
            ENV_MAX_HISTORY => Some("3".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }
}
