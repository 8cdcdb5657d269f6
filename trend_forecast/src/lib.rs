//! # Trend Forecast
//!
//! A prediction engine for daily topic observations (mention volume and
//! sentiment).
//!
//! ## Features
//!
//! - Volume forecast with Holt's linear exponential smoothing
//! - Sentiment forecast from a recency-weighted average plus damped momentum
//! - Five-way trend direction from the least-squares slope of volume
//! - Day-of-week seasonal factors
//! - Confidence that decays with forecast distance, volume variability and data age
//! - Summary insights (weekly growth, average predicted volume and confidence)
//!
//! The engine is a set of pure functions. The current time is injected so
//! that identical input always produces identical output.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use trend_forecast::{predict_trend, trend_insights, TrendDirection, TrendPoint};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let history: Vec<TrendPoint> = (0..7)
//!     .map(|i| TrendPoint::new(start + chrono::Duration::days(i), 100.0 + 10.0 * i as f64, 0.6))
//!     .collect();
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
//! let predictions = predict_trend(&history, 3, now)?;
//!
//! assert_eq!(predictions.len(), 3);
//! assert_eq!(predictions[0].trend_direction, TrendDirection::StrongUpward);
//!
//! let insights = trend_insights(&history, &predictions);
//! assert_eq!(insights.data_points, 7);
//! # Ok::<(), trend_forecast::ForecastError>(())
//! ```

pub mod clock;
pub mod confidence;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod insights;
pub mod models;
pub mod request;
pub mod seasonality;
pub mod synthetic;
pub mod utils;

// Re-export commonly used types
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::PredictionConfig;
pub use crate::data::{TrendPoint, TrendSeries, MIN_HISTORY};
pub use crate::engine::{predict_trend, PredictionEngine};
pub use crate::error::{ForecastError, Result};
pub use crate::insights::{trend_insights, TrendInsights};
pub use crate::models::{PredictionResult, TrendDirection};
pub use crate::request::{PredictionReport, PredictionRequest};
pub use crate::seasonality::SeasonalFactors;
pub use crate::synthetic::SyntheticSeries;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
