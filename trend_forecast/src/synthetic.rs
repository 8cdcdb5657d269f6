//! Seeded synthetic trend series for demos and tests
//!
//! The generator owns its RNG and is seeded explicitly, so the same settings
//! always produce the same series.

use crate::data::TrendPoint;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use trend_math::statistics::clamp;

/// Shape of a generated series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSeries {
    /// Number of daily points
    pub days: usize,
    /// Volume on the first day
    pub base_volume: f64,
    /// Volume added per day
    pub daily_growth: f64,
    /// Weekend uplift as a fraction of the trend value
    pub weekly_amplitude: f64,
    /// Standard deviation of the volume noise, as a fraction of the trend value
    pub noise: f64,
    /// Sentiment around which daily values scatter
    pub base_sentiment: f64,
    pub seed: u64,
}

impl Default for SyntheticSeries {
    fn default() -> Self {
        Self {
            days: 30,
            base_volume: 500.0,
            daily_growth: 5.0,
            weekly_amplitude: 0.2,
            noise: 0.05,
            base_sentiment: 0.6,
            seed: 42,
        }
    }
}

impl SyntheticSeries {
    /// Generate `days` points ending on `last_date`, oldest first
    pub fn generate(&self, last_date: NaiveDate) -> Result<Vec<TrendPoint>> {
        if self.noise < 0.0 || !self.noise.is_finite() {
            return Err(ForecastError::InvalidParameter(format!(
                "Noise must be a non-negative number, got {}",
                self.noise
            )));
        }

        let volume_noise = Normal::new(0.0, self.noise).map_err(|e| {
            ForecastError::InvalidParameter(format!("Invalid noise distribution: {}", e))
        })?;
        let sentiment_noise = Normal::new(0.0, 0.05).map_err(|e| {
            ForecastError::InvalidParameter(format!("Invalid sentiment distribution: {}", e))
        })?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let span = self.days.saturating_sub(1) as i64;
        let first_date = last_date
            .checked_sub_signed(Duration::days(span))
            .ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "{} days before {} is out of range",
                    span, last_date
                ))
            })?;

        let points = first_date
            .iter_days()
            .take(self.days)
            .enumerate()
            .map(|(i, date)| {
                let trend = self.base_volume + self.daily_growth * i as f64;
                let weekend = matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun);
                let seasonal = if weekend { 1.0 + self.weekly_amplitude } else { 1.0 };
                let noise = 1.0 + volume_noise.sample(&mut rng);
                let volume = (trend * seasonal * noise).max(0.0);
                let sentiment = clamp(
                    self.base_sentiment + sentiment_noise.sample(&mut rng),
                    0.0,
                    1.0,
                );
                TrendPoint::new(date, volume, sentiment)
            })
            .collect();

        Ok(points)
    }
}
