use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rstest::{fixture, rstest};
use trend_forecast::{
    predict_trend, FixedClock, ForecastError, PredictionConfig, PredictionEngine,
    PredictionRequest, SyntheticSeries, TrendDirection, TrendPoint,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

fn series_from(volumes: &[f64], sentiments: &[f64]) -> Vec<TrendPoint> {
    volumes
        .iter()
        .zip(sentiments.iter())
        .enumerate()
        .map(|(i, (&v, &s))| TrendPoint::new(start() + Duration::days(i as i64), v, s))
        .collect()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

#[fixture]
fn linear_week() -> Vec<TrendPoint> {
    series_from(
        &[100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0],
        &[0.5; 7],
    )
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(6)]
fn test_fewer_than_seven_points_is_insufficient(#[case] n: usize) {
    let history = series_from(&vec![10.0; n], &vec![0.5; n]);
    for horizon in [1, 7, 60] {
        let err = predict_trend(&history, horizon, midnight(start())).unwrap_err();
        assert!(err.is_insufficient_data());
        assert!(matches!(
            err,
            ForecastError::InsufficientData { required: 7, actual } if actual == n
        ));
    }
}

#[test]
fn test_repeated_single_point_is_insufficient() {
    let history = vec![TrendPoint::new(start(), 50.0, 0.5)];
    assert!(predict_trend(&history, 5, midnight(start()))
        .unwrap_err()
        .is_insufficient_data());
}

#[rstest]
fn test_linear_growth_example(linear_week: Vec<TrendPoint>) {
    let last = linear_week.last().unwrap().date;
    let predictions = predict_trend(&linear_week, 3, midnight(last)).unwrap();

    assert_eq!(predictions.len(), 3);
    let expected_base = [170.0, 180.0, 190.0];
    for (i, prediction) in predictions.iter().enumerate() {
        assert_eq!(prediction.date, last + Duration::days(i as i64 + 1));
        assert_eq!(prediction.trend_direction, TrendDirection::StrongUpward);
        // Fewer than 14 points: default factors by forecast offset
        assert_abs_diff_eq!(
            prediction.volume / prediction.seasonal_factor,
            expected_base[i],
            epsilon = 1e-6
        );
    }
    assert_eq!(predictions[0].seasonal_factor, 1.1);
    assert_eq!(predictions[1].seasonal_factor, 0.9);
    assert_eq!(predictions[2].seasonal_factor, 0.95);
}

#[rstest]
fn test_input_order_does_not_matter(linear_week: Vec<TrendPoint>) {
    let mut shuffled = linear_week.clone();
    shuffled.reverse();
    shuffled.swap(1, 4);
    let snapshot = shuffled.clone();
    let now = midnight(start() + Duration::days(8));

    assert_eq!(
        predict_trend(&shuffled, 10, now).unwrap(),
        predict_trend(&linear_week, 10, now).unwrap()
    );
    assert_eq!(shuffled, snapshot);
}

#[rstest]
fn test_deterministic_for_fixed_now(linear_week: Vec<TrendPoint>) {
    let engine = PredictionEngine::with_clock(FixedClock(midnight(start() + Duration::days(9))));
    assert_eq!(
        engine.predict_trend(&linear_week, 14).unwrap(),
        engine.predict_trend(&linear_week, 14).unwrap()
    );
}

#[rstest]
fn test_zero_horizon_is_empty(linear_week: Vec<TrendPoint>) {
    assert!(predict_trend(&linear_week, 0, midnight(start()))
        .unwrap()
        .is_empty());
}

#[test]
fn test_alternating_sentiment_with_flat_volume() {
    let sentiments: Vec<f64> = (0..21).map(|i| if i % 2 == 0 { 0.2 } else { 0.8 }).collect();
    let history = series_from(&[200.0; 21], &sentiments);
    let last = history.last().unwrap().date;
    let predictions = predict_trend(&history, 5, midnight(last)).unwrap();

    for prediction in &predictions {
        assert_abs_diff_eq!(prediction.sentiment, predictions[0].sentiment, epsilon = 1e-12);
        assert!((prediction.sentiment - 0.5).abs() < 0.1);
        assert_eq!(prediction.trend_direction, TrendDirection::Stable);
        assert_abs_diff_eq!(prediction.seasonal_factor, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(prediction.volume, 200.0, epsilon = 1e-6);
    }
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(99)]
#[case(2024)]
fn test_properties_hold_on_synthetic_series(#[case] seed: u64) {
    let last = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    let settings = SyntheticSeries {
        days: 45,
        daily_growth: -20.0,
        noise: 0.3,
        seed,
        ..SyntheticSeries::default()
    };
    let history = settings.generate(last).unwrap();
    let now = midnight(last) + Duration::hours(30);
    let horizon = 60;
    let predictions = predict_trend(&history, horizon, now).unwrap();

    assert_eq!(predictions.len(), horizon);
    let direction = predictions[0].trend_direction;
    for (i, p) in predictions.iter().enumerate() {
        assert_eq!(p.date, last + Duration::days(i as i64 + 1));
        assert!(p.volume >= 0.0);
        assert!((0.0..=1.0).contains(&p.sentiment));
        assert!((0.1..=0.95).contains(&p.confidence));
        assert!((0.7..=1.5).contains(&p.seasonal_factor));
        assert_eq!(p.trend_direction, direction);
    }
    assert!(predictions
        .windows(2)
        .all(|w| w[1].confidence <= w[0].confidence));
}

#[test]
fn test_engine_run_trims_history_and_validates_horizon() {
    let last = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    let history = SyntheticSeries {
        days: 90,
        ..SyntheticSeries::default()
    }
    .generate(last)
    .unwrap();
    let engine = PredictionEngine::with_clock(FixedClock(midnight(last)));
    let config = PredictionConfig::default();

    let report = engine
        .run(&config, &PredictionRequest::new(14), &history)
        .unwrap();
    assert_eq!(report.predictions.len(), 14);
    assert_eq!(report.insights.data_points, config.max_history);
    assert_eq!(
        report.predictions,
        predict_trend(&history[60..], 14, midnight(last)).unwrap()
    );

    let err = engine
        .run(&config, &PredictionRequest::new(61), &history)
        .unwrap_err();
    assert!(matches!(err, ForecastError::ValidationError(_)));

    let err = engine
        .run(&config, &PredictionRequest::new(5), &history[..6])
        .unwrap_err();
    assert!(err.is_insufficient_data());
}

#[test]
fn test_concurrent_calls_agree() {
    let last = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    let now = midnight(last);
    let history = SyntheticSeries::default().generate(last).unwrap();
    let expected = predict_trend(&history, 30, now).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| predict_trend(&history, 30, now).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
