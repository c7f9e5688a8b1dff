//! Demand Forecast Consumer API
//!
//! Consumer-facing entry points for the demand forecasting stack:
//! the [`forecast`] convenience function and re-exports of the engine,
//! options, and result types.

// Re-export from core
pub use demand_core::{metrics, HoltWintersForecaster, METHOD};

// Re-export contract, errors, and models from SPI
pub use demand_spi::{
    AccuracyMetrics, DemandError, DemandForecast, DemandForecaster, ForecastOptions,
    ForecastWarning, ResolvedParameters, Result,
};

/// Produce a demand forecast with the default Holt-Winters engine
///
/// Fields of `options` left at their [`Default`] values take the documented
/// defaults: `periods = 12`, `seasonality = 12`, `alpha = 0.3`, `beta = 0.2`,
/// `gamma = 0.1`.
///
/// # Example
///
/// ```rust
/// use demand_api::{forecast, ForecastOptions};
///
/// let history = vec![100.0, 110.0, 105.0, 120.0, 102.0, 115.0];
/// let options = ForecastOptions::default().with_periods(3).with_seasonality(6);
/// let result = forecast(&history, &options).unwrap();
/// assert_eq!(result.forecast.len(), 3);
/// ```
pub fn forecast(history: &[f64], options: &ForecastOptions) -> Result<DemandForecast> {
    HoltWintersForecaster::new().forecast(history, options)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::forecast;
    pub use demand_core::{metrics, HoltWintersForecaster, METHOD};
    pub use demand_spi::{
        AccuracyMetrics, DemandError, DemandForecast, DemandForecaster, ForecastOptions,
        ForecastWarning, ResolvedParameters, Result,
    };
}
