//! Descriptive summary of a history and its predictions

use crate::data::{TrendPoint, TrendSeries};
use crate::models::{PredictionResult, TrendDirection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const WEEK: usize = 7;

/// Best-effort metrics; each optional field is omitted when its inputs are missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sentiment: Option<f64>,
    /// Percent change of the last 7 days' volume over the 7 days before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_avg_volume: Option<f64>,
    /// Mean confidence across the predictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_direction: Option<TrendDirection>,
    pub data_points: usize,
}

impl TrendInsights {
    /// Keyed view holding only the metrics that were computed
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Summarise `historical` (any order) together with the `predictions` made from it.
///
/// `data_points` is always reported, so an empty history does not give an
/// empty summary: every other metric is `None` and [`TrendInsights::to_map`]
/// holds the single key `data_points = 0`.
pub fn trend_insights(historical: &[TrendPoint], predictions: &[PredictionResult]) -> TrendInsights {
    let series = TrendSeries::from_points(historical);
    let n = series.len();

    let mut insights = TrendInsights {
        total_volume: None,
        avg_sentiment: None,
        weekly_growth: None,
        predicted_avg_volume: None,
        prediction_confidence: None,
        trend_direction: None,
        data_points: n,
    };

    if series.is_empty() {
        return insights;
    }

    let volumes = series.volumes();
    insights.total_volume = Some(volumes.iter().sum());
    insights.avg_sentiment = Some(series.sentiments().iter().sum::<f64>() / n as f64);
    insights.weekly_growth = weekly_growth(&volumes);

    if let Some(first) = predictions.first() {
        let count = predictions.len() as f64;
        insights.predicted_avg_volume =
            Some(predictions.iter().map(|p| p.volume).sum::<f64>() / count);
        insights.prediction_confidence =
            Some(predictions.iter().map(|p| p.confidence).sum::<f64>() / count);
        insights.trend_direction = Some(first.trend_direction);
    }

    insights
}

fn weekly_growth(volumes: &[f64]) -> Option<f64> {
    let n = volumes.len();
    if n < 2 * WEEK {
        return None;
    }

    let recent: f64 = volumes[n - WEEK..].iter().sum();
    let previous: f64 = volumes[n - 2 * WEEK..n - WEEK].iter().sum();
    if previous == 0.0 {
        return None;
    }

    Some((recent - previous) / previous * 100.0)
}
