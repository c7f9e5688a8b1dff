//! Integration tests for the demand stack
//!
//! Exercises flows that cross crate boundaries: metrics alignment, warning
//! propagation, JSON marshaling, and concurrent use of a shared engine.

use demand_facade::{
    forecast, metrics, AccuracyMetrics, DemandForecast, DemandForecaster, ForecastOptions,
    ForecastWarning, HoltWintersForecaster,
};

fn two_year_demand() -> Vec<f64> {
    let cycle = [
        100.0, 110.0, 105.0, 120.0, 102.0, 115.0, 108.0, 125.0, 104.0, 118.0, 110.0, 128.0,
    ];
    let mut data: Vec<f64> = cycle.to_vec();
    data.extend(cycle.iter().map(|v| v + 6.0));
    data
}

#[test]
fn metrics_match_the_free_functions_on_the_tails() {
    let history = two_year_demand();
    let options = ForecastOptions::default().with_periods(12);
    let result = forecast(&history, &options).unwrap();

    let observed = &history[history.len() - 12..];
    let predicted = &result.forecast[result.forecast.len() - 12..];

    let reported = result.metrics.expect("metrics should be present");
    assert_eq!(reported.mae, metrics::mae(observed, predicted));
    assert_eq!(reported.mse, metrics::mse(observed, predicted));
    assert_eq!(reported.rmse, metrics::rmse(observed, predicted));
}

#[test]
fn metrics_are_withheld_rather_than_misaligned() {
    let result = forecast(
        &two_year_demand(),
        &ForecastOptions::default().with_periods(3),
    )
    .unwrap();

    assert!(result.metrics.is_none());
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, ForecastWarning::MetricsUnavailable { .. })));
}

#[test]
fn short_history_carries_warning_but_full_forecast() {
    let history = vec![100.0, 110.0, 105.0, 120.0, 102.0];
    let result = forecast(&history, &ForecastOptions::default().with_periods(12)).unwrap();

    assert_eq!(result.forecast.len(), 12);
    assert!(result.has_insufficient_history());
    assert!(result.forecast.iter().all(|v| v.is_finite()));
}

#[test]
fn forecast_result_round_trips_through_json() {
    let result = forecast(
        &two_year_demand(),
        &ForecastOptions::default().with_periods(12),
    )
    .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: DemandForecast = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.forecast, result.forecast);
    assert_eq!(restored.metrics, result.metrics);
    assert_eq!(restored.parameters, result.parameters);
    assert_eq!(restored.warnings, result.warnings);
}

#[test]
fn partial_options_deserialize_with_defaults() {
    let options: ForecastOptions = serde_json::from_str(r#"{"periods": 3}"#).unwrap();

    assert_eq!(options.periods, 3);
    assert_eq!(options.seasonality, 12);
    assert_eq!(options.alpha, 0.3);
    assert_eq!(options.beta, 0.2);
    assert_eq!(options.gamma, 0.1);
}

#[test]
fn accuracy_metrics_serialize_as_plain_fields() {
    let metrics = AccuracyMetrics {
        mae: 1.0,
        mse: 1.0,
        rmse: 1.0,
    };
    let json = serde_json::to_value(metrics).unwrap();

    assert_eq!(json["mae"], 1.0);
    assert_eq!(json["mse"], 1.0);
    assert_eq!(json["rmse"], 1.0);
}

#[test]
fn one_engine_serves_concurrent_callers() {
    let engine = std::sync::Arc::new(HoltWintersForecaster::new());
    let options = ForecastOptions::default().with_periods(6);

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                let history: Vec<f64> = two_year_demand()
                    .iter()
                    .map(|v| v + offset as f64)
                    .collect();
                engine.forecast(&history, &options).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.forecast.len(), 6);
    }
}
