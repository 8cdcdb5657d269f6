//! Forecast from a `date,volume,sentiment` CSV file.
//!
//! Usage: `cargo run --example csv_prediction -- <path.csv> [horizon]`

use std::env;
use trend_forecast::data::load_csv;
use trend_forecast::{ForecastError, PredictionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let path = args.next().ok_or("missing CSV path")?;
    let horizon: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 7,
    };

    let history = load_csv(&path)?;
    for point in &history {
        point.validate()?;
    }

    let engine = PredictionEngine::new();
    let predictions = match engine.predict_trend(&history, horizon) {
        Ok(predictions) => predictions,
        Err(ForecastError::InsufficientData { required, actual }) => {
            eprintln!("Not enough data: {} has {} rows, need {}", path, actual, required);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", serde_json::to_string_pretty(&predictions)?);
    println!(
        "{}",
        serde_json::to_string_pretty(&engine.trend_insights(&history, &predictions).to_map())?
    );

    Ok(())
}
