use std::io::Write;
use tempfile::NamedTempFile;
use trend_forecast::{ForecastError, PredictionConfig};

#[test]
fn test_partial_json_takes_defaults() {
    let config = PredictionConfig::from_json_str(r#"{ "max_horizon": 30 }"#).unwrap();
    assert_eq!(
        config,
        PredictionConfig {
            max_horizon: 30,
            ..PredictionConfig::default()
        }
    );
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "min_history": 14, "max_history": 90, "min_horizon": 1, "max_horizon": 7 }}"#
    )
    .unwrap();

    let config = PredictionConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.min_history, 14);
    assert_eq!(config.max_history, 90);
    assert_eq!(config.max_horizon, 7);
}

#[test]
fn test_min_history_below_engine_minimum() {
    let err = PredictionConfig::from_json_str(r#"{ "min_history": 3 }"#).unwrap_err();
    assert!(matches!(err, ForecastError::InvalidParameter(_)));
}

#[test]
fn test_inverted_horizon_bounds() {
    let err = PredictionConfig::from_json_str(r#"{ "min_horizon": 10, "max_horizon": 5 }"#)
        .unwrap_err();
    assert!(matches!(err, ForecastError::InvalidParameter(_)));
}

#[test]
fn test_malformed_json() {
    let err = PredictionConfig::from_json_str("{ max_horizon: ").unwrap_err();
    assert!(matches!(err, ForecastError::ConfigError(_)));
}

#[test]
fn test_missing_file() {
    let err = PredictionConfig::from_json_file("/nonexistent/trendscout.json").unwrap_err();
    assert!(matches!(err, ForecastError::IoError(_)));
}
