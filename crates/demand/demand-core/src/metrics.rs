//! Forecast accuracy metrics
//!
//! Provides standard metrics for evaluating demand forecasts.

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between observed and predicted values.
/// Lower is better. Same scale as the data.
///
/// # Example
///
/// ```rust
/// use demand_core::metrics::mae;
///
/// let observed = vec![10.0, 12.0, 9.0, 11.0];
/// let predicted = vec![9.0, 13.0, 10.0, 10.0];
/// assert_eq!(mae(&observed, &predicted), 1.0);
/// ```
pub fn mae(observed: &[f64], predicted: &[f64]) -> f64 {
    if observed.len() != predicted.len() || observed.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(o, p)| (o - p).abs())
        .sum();

    sum / observed.len() as f64
}

/// Mean Squared Error (MSE)
///
/// Average of squared differences. Penalizes large errors more heavily.
/// Lower is better.
pub fn mse(observed: &[f64], predicted: &[f64]) -> f64 {
    if observed.len() != predicted.len() || observed.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(o, p)| (o - p).powi(2))
        .sum();

    sum / observed.len() as f64
}

/// Root Mean Squared Error (RMSE)
///
/// Square root of MSE. Same scale as the data.
/// Lower is better.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> f64 {
    mse(observed, predicted).sqrt()
}
