use std::io;
use trend_forecast::error::ForecastError;
use trend_math::MathError;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(
        ForecastError::from(io_error),
        ForecastError::IoError(_)
    ));

    let math_error = MathError::InsufficientData("need 2 points".to_string());
    assert!(matches!(
        ForecastError::from(math_error),
        ForecastError::MathError(_)
    ));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InsufficientData {
        required: 7,
        actual: 2,
    };
    assert_eq!(
        error.to_string(),
        "Insufficient data for prediction: need at least 7 points, got 2"
    );

    let error = ForecastError::ValidationError("Horizon must be between 1 and 60".to_string());
    assert!(error.to_string().contains("Horizon must be between 1 and 60"));
}

#[test]
fn test_is_insufficient_data() {
    assert!(ForecastError::InsufficientData {
        required: 7,
        actual: 0
    }
    .is_insufficient_data());
    assert!(!ForecastError::DataError("bad row".to_string()).is_insufficient_data());
}
