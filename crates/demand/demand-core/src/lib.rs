//! Demand Forecast Core
//!
//! Core implementation of the Holt-Winters demand forecasting engine and
//! the accuracy metrics it reports.

pub mod holt_winters;
pub mod metrics;

// Re-export SPI types for implementations
pub use demand_spi::{
    AccuracyMetrics, DemandError, DemandForecast, DemandForecaster, ForecastOptions,
    ForecastWarning, ResolvedParameters, Result,
};

// Re-export main types
pub use holt_winters::{HoltWintersForecaster, METHOD};
