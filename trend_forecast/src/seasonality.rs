//! Day-of-week seasonal factors

use crate::data::TrendPoint;
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use trend_math::statistics::clamp;

/// Observations needed before weekday averages replace the defaults
pub const MIN_SEASONAL_HISTORY: usize = 14;
/// Lower bound of every factor
pub const MIN_FACTOR: f64 = 0.7;
/// Upper bound of every factor
pub const MAX_FACTOR: f64 = 1.5;

/// Multiplicative adjustment per weekday, indexed Sunday = 0 .. Saturday = 6
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalFactors([f64; 7]);

impl SeasonalFactors {
    /// Fallback factors, Sunday through Saturday
    pub const DEFAULT: SeasonalFactors = SeasonalFactors([1.1, 0.9, 0.95, 1.05, 1.0, 1.1, 1.15]);

    /// Factor at `index`, wrapping every 7
    pub fn get(&self, index: usize) -> f64 {
        self.0[index % 7]
    }

    pub fn for_weekday(&self, weekday: Weekday) -> f64 {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    pub fn as_array(&self) -> &[f64; 7] {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for SeasonalFactors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Estimate weekday factors from historical volume.
///
/// Each observed weekday gets `weekday_average / overall_average`, where the
/// overall average is the unweighted mean of the observed weekday averages.
/// Unobserved weekdays keep their default. Series shorter than
/// [`MIN_SEASONAL_HISTORY`] use [`SeasonalFactors::DEFAULT`] outright.
pub fn estimate_seasonal_factors(points: &[TrendPoint]) -> SeasonalFactors {
    let defaults = SeasonalFactors::DEFAULT;
    if points.len() < MIN_SEASONAL_HISTORY {
        return defaults;
    }

    let mut sums = [0.0; 7];
    let mut counts = [0usize; 7];
    for point in points {
        let day = point.date.weekday().num_days_from_sunday() as usize;
        sums[day] += point.volume;
        counts[day] += 1;
    }

    let averages: Vec<Option<f64>> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&sum, &count)| (count > 0).then(|| sum / count as f64))
        .collect();

    let observed: Vec<f64> = averages.iter().flatten().copied().collect();
    if observed.is_empty() {
        return defaults;
    }
    let overall_average = observed.iter().sum::<f64>() / observed.len() as f64;

    let mut factors = [0.0; 7];
    for (day, factor) in factors.iter_mut().enumerate() {
        let raw = match averages[day] {
            Some(average) if overall_average > 0.0 => average / overall_average,
            _ => defaults.get(day),
        };
        *factor = clamp(raw, MIN_FACTOR, MAX_FACTOR);
    }

    SeasonalFactors(factors)
}
