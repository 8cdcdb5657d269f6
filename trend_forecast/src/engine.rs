//! Trend prediction engine
//!
//! Combines the volume, sentiment, direction, seasonality and confidence
//! estimates into one record per forecast day. Every call works on its own
//! sorted copy of the history and holds no state between calls, so separate
//! topics can be predicted from as many threads as the caller likes.

use crate::clock::{Clock, SystemClock};
use crate::config::PredictionConfig;
use crate::confidence::ConfidenceEstimator;
use crate::data::{TrendPoint, TrendSeries, MIN_HISTORY};
use crate::error::{ForecastError, Result};
use crate::insights::{trend_insights, TrendInsights};
use crate::models::{classify_trend, forecast_sentiment, forecast_volume, PredictionResult};
use crate::request::{PredictionReport, PredictionRequest};
use crate::seasonality::estimate_seasonal_factors;
use crate::utils::future_dates;
use chrono::{DateTime, Utc};

/// Forecast `horizon` days past the last observation in `historical`.
///
/// `historical` may be in any order and is not modified. `now` drives the
/// recency part of the confidence score. Fails with
/// [`ForecastError::InsufficientData`] for fewer than 7 observations.
pub fn predict_trend(
    historical: &[TrendPoint],
    horizon: usize,
    now: DateTime<Utc>,
) -> Result<Vec<PredictionResult>> {
    predict_series(&TrendSeries::from_points(historical), horizon, now)
}

fn predict_series(
    series: &TrendSeries,
    horizon: usize,
    now: DateTime<Utc>,
) -> Result<Vec<PredictionResult>> {
    let last_date = match series.last_date() {
        Some(date) if series.len() >= MIN_HISTORY => date,
        _ => {
            tracing::warn!(
                points = series.len(),
                required = MIN_HISTORY,
                "not enough history to predict"
            );
            return Err(ForecastError::InsufficientData {
                required: MIN_HISTORY,
                actual: series.len(),
            });
        }
    };

    let volumes = series.volumes();
    let volume_forecast = forecast_volume(&volumes, horizon);
    let sentiment_forecast = forecast_sentiment(&series.sentiments(), horizon);
    let direction = classify_trend(&volumes);
    let seasonal_factors = estimate_seasonal_factors(series.points());
    let confidence = ConfidenceEstimator::new(series, now);

    tracing::debug!(
        points = series.len(),
        horizon,
        %direction,
        default_seasonality = seasonal_factors.is_default(),
        base_confidence = confidence.base(),
        "predicting trend"
    );

    let dates = future_dates(last_date, horizon)?;
    let predictions = dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            // Factors rotate with the forecast offset, not the calendar weekday
            let seasonal_factor = seasonal_factors.get(i);
            PredictionResult {
                date,
                volume: volume_forecast[i] * seasonal_factor,
                sentiment: sentiment_forecast[i],
                confidence: confidence.confidence(i),
                trend_direction: direction,
                seasonal_factor,
            }
        })
        .collect();

    Ok(predictions)
}

/// Stateless entry point holding only a source of "now"
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine<C = SystemClock> {
    clock: C,
}

impl PredictionEngine<SystemClock> {
    /// Engine that scores recency against the system clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> PredictionEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// See [`predict_trend`]
    pub fn predict_trend(
        &self,
        historical: &[TrendPoint],
        horizon: usize,
    ) -> Result<Vec<PredictionResult>> {
        predict_trend(historical, horizon, self.clock.now())
    }

    /// See [`trend_insights`]
    pub fn trend_insights(
        &self,
        historical: &[TrendPoint],
        predictions: &[PredictionResult],
    ) -> TrendInsights {
        trend_insights(historical, predictions)
    }

    /// Validate `request`, trim the history to the configured window and predict.
    ///
    /// The insights describe the trimmed history.
    pub fn run(
        &self,
        config: &PredictionConfig,
        request: &PredictionRequest,
        historical: &[TrendPoint],
    ) -> Result<PredictionReport> {
        request.validate(config)?;

        let series =
            TrendSeries::with_min_len(historical, config.min_history)?.most_recent(config.max_history);
        let predictions = predict_series(&series, request.horizon, self.clock.now())?;
        let insights = trend_insights(series.points(), &predictions);

        Ok(PredictionReport {
            predictions,
            insights,
        })
    }
}
