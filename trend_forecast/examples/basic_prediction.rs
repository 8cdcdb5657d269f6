//! Generate a synthetic topic history, forecast two weeks and print the report as JSON.
//!
//! Run with `RUST_LOG=trend_forecast=debug` to see the engine's log events.

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;
use trend_forecast::{PredictionConfig, PredictionEngine, PredictionRequest, SyntheticSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let yesterday = Utc::now().date_naive() - Duration::days(1);
    let history = SyntheticSeries {
        days: 45,
        daily_growth: 8.0,
        ..SyntheticSeries::default()
    }
    .generate(yesterday)?;

    let config = PredictionConfig::default().with_env_overrides()?;
    let engine = PredictionEngine::new();
    let report = engine.run(&config, &PredictionRequest::new(14), &history)?;

    println!("Trend Prediction");
    println!("================");
    for p in &report.predictions {
        println!(
            "{}  volume {:>8.1}  sentiment {:.3}  confidence {:.3}  factor {:.2}",
            p.date, p.volume, p.sentiment, p.confidence, p.seasonal_factor
        );
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&report.insights)?);

    Ok(())
}
