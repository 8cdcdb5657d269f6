//! Volume forecaster: Holt's linear (double) exponential smoothing

use trend_math::forecasting::DoubleExponentialSmoothing;

/// Level smoothing constant
pub const ALPHA: f64 = 0.3;
/// Trend smoothing constant
pub const BETA: f64 = 0.1;

/// Forecast `horizon` future volumes from date-ordered `volumes`.
///
/// Negative forecasts are clamped to zero. Fewer than two observations
/// give an all-zero forecast.
pub fn forecast_volume(volumes: &[f64], horizon: usize) -> Vec<f64> {
    let des = match DoubleExponentialSmoothing::fit(ALPHA, BETA, volumes) {
        Ok(des) => des,
        Err(err) => {
            tracing::trace!(points = volumes.len(), %err, "volume forecast falls back to zeros");
            return vec![0.0; horizon];
        }
    };

    (1..=horizon)
        .map(|h| des.forecast(h).max(0.0))
        .collect()
}
