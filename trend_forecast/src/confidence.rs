//! Confidence estimator
//!
//! `confidence(i) = clamp(0.8 * variability * recency * exp(-0.1 * i), 0.1, 0.95)`
//!
//! The variability factor is `max(0.3, 1 - 0.01 * sample_std_dev(volume))`
//! and only applies when there are more than two observations; a deviation
//! that overflows to `inf` or `NaN` takes the 0.3 floor. The recency
//! factor is `max(0.5, 1 - 0.05 * age_in_days)` of the last observation.

use crate::data::TrendSeries;
use crate::utils::age_in_days;
use chrono::{DateTime, Utc};
use trend_math::statistics::{clamp, sample_std_dev};

pub const BASE_CONFIDENCE: f64 = 0.8;
pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;
/// Exponential decay rate per forecast day
pub const DISTANCE_DECAY_RATE: f64 = 0.1;
/// Lowest variability factor, reached at a volume deviation of 70
pub const VARIABILITY_FLOOR: f64 = 0.3;

/// Confidence factors computed once per series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEstimator {
    base: f64,
}

impl ConfidenceEstimator {
    /// Derive the variability and recency adjusted base from `series` at instant `now`
    pub fn new(series: &TrendSeries, now: DateTime<Utc>) -> Self {
        let mut base = BASE_CONFIDENCE;

        if series.len() > 2 {
            let std_dev = sample_std_dev(&series.volumes()).unwrap_or(f64::NAN);
            base *= variability_factor(std_dev);
        }

        if let Some(last_date) = series.last_date() {
            base *= recency_factor(age_in_days(last_date, now));
        }

        Self { base }
    }

    /// Base confidence before distance decay and clamping
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Confidence for the 0-indexed forecast day
    pub fn confidence(&self, forecast_day: usize) -> f64 {
        let decay = (-DISTANCE_DECAY_RATE * forecast_day as f64).exp();
        clamp(self.base * decay, MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}

fn variability_factor(std_dev: f64) -> f64 {
    if !std_dev.is_finite() {
        return VARIABILITY_FLOOR;
    }
    (1.0 - std_dev * 0.01).max(VARIABILITY_FLOOR)
}

fn recency_factor(age_in_days: f64) -> f64 {
    (1.0 - age_in_days * 0.05).max(0.5)
}

/// Confidence for one forecast day of `series`
pub fn confidence_for(series: &TrendSeries, forecast_day: usize, now: DateTime<Utc>) -> f64 {
    ConfidenceEstimator::new(series, now).confidence(forecast_day)
}
