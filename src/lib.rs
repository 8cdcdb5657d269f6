//! # TrendScout
//!
//! `trendscout` forecasts the mention volume and sentiment of a tracked topic
//! from its daily history, and summarises the result.
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, NaiveDate, TimeZone, Utc};
//! use trendscout::{forecast, TrendPoint};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let history: Vec<TrendPoint> = (0..14)
//!     .map(|i| TrendPoint::new(start + Duration::days(i), 250.0, 0.55))
//!     .collect();
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap();
//! let report = forecast(&history, 7, now).unwrap();
//! assert_eq!(report.predictions.len(), 7);
//! assert_eq!(report.insights.data_points, 14);
//! ```

pub use trend_forecast::{
    predict_trend, trend_insights, Clock, FixedClock, ForecastError, PredictionConfig,
    PredictionEngine, PredictionReport, PredictionRequest, PredictionResult, Result,
    SeasonalFactors, SyntheticSeries, SystemClock, TrendDirection, TrendInsights, TrendPoint,
    TrendSeries, MIN_HISTORY,
};
pub use trend_math;

use chrono::{DateTime, Utc};

/// Predict `horizon` days and summarise them against the full history.
///
/// Unlike [`PredictionEngine::run`], no request limits are applied.
pub fn forecast(
    historical: &[TrendPoint],
    horizon: usize,
    now: DateTime<Utc>,
) -> Result<PredictionReport> {
    let predictions = predict_trend(historical, horizon, now)?;
    let insights = trend_insights(historical, &predictions);

    Ok(PredictionReport {
        predictions,
        insights,
    })
}
