//! Demand Forecast Facade
//!
//! High-level API for demand forecasting. Re-exports all public types
//! from the demand stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use demand_api::*;

// Explicit re-exports for documentation
pub use demand_api::prelude;

// Re-export core modules for direct access
pub use demand_core::{holt_winters, metrics};

// Re-export SPI contract and models
pub use demand_spi::{
    AccuracyMetrics, DemandError, DemandForecast, DemandForecaster, ForecastOptions,
    ForecastWarning, ResolvedParameters,
};
