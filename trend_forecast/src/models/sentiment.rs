//! Sentiment forecaster: recency-weighted average plus damped momentum

use trend_math::moving_averages::{linear_weighted_average, trailing_window};
use trend_math::statistics::clamp;

/// Number of most recent observations the forecast looks at
pub const RECENT_WINDOW: usize = 7;
/// Per-day decay applied to the momentum term
pub const MOMENTUM_DAMPING: f64 = 0.95;
/// Sentiment returned when there is too little history
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Forecast `horizon` future sentiment values from date-ordered `sentiments`.
///
/// Day `i` is `weighted_average + momentum * (i + 1) * 0.95^i`, clamped to `[0, 1]`.
pub fn forecast_sentiment(sentiments: &[f64], horizon: usize) -> Vec<f64> {
    if sentiments.len() < 3 {
        tracing::trace!(points = sentiments.len(), "sentiment forecast falls back to neutral");
        return vec![NEUTRAL_SENTIMENT; horizon];
    }

    let window = trailing_window(sentiments, RECENT_WINDOW);
    let average = match linear_weighted_average(window) {
        Ok(average) => average,
        Err(_) => return vec![NEUTRAL_SENTIMENT; horizon],
    };
    let momentum = momentum(window);

    (0..horizon)
        .map(|i| {
            let drift = momentum * (i + 1) as f64 * MOMENTUM_DAMPING.powi(i as i32);
            clamp(average + drift, 0.0, 1.0)
        })
        .collect()
}

/// Average change per day across the window; zero for windows shorter than 3
fn momentum(window: &[f64]) -> f64 {
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() >= 3 => {
            (last - first) / (window.len() - 1) as f64
        }
        _ => 0.0,
    }
}
