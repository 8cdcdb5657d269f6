//! Trend classifier: OLS slope of volume against day index

use super::TrendDirection;
use trend_math::forecasting::ols_slope;

/// Classify the series-wide direction of date-ordered `volumes`.
///
/// Fewer than three observations are always [`TrendDirection::Stable`].
pub fn classify_trend(volumes: &[f64]) -> TrendDirection {
    if volumes.len() < 3 {
        return TrendDirection::Stable;
    }

    match ols_slope(volumes) {
        Ok(slope) => TrendDirection::from_slope(slope),
        Err(err) => {
            tracing::trace!(%err, "slope unavailable, treating trend as stable");
            TrendDirection::Stable
        }
    }
}
