//! Demand Forecasting Service Provider Interface
//!
//! Defines the forecaster contract, error taxonomy, and data models shared
//! across the demand stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DemandForecaster;
pub use error::{DemandError, Result};
pub use model::{
    AccuracyMetrics, DemandForecast, ForecastOptions, ForecastWarning, ResolvedParameters,
};
