//! Forecast quality warnings

use serde::{Deserialize, Serialize};

/// Non-fatal conditions detected while producing a forecast
///
/// Warnings are attached to the result rather than raised, so downstream
/// consumers can tell when confidence in the forecast is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastWarning {
    /// History covers less than one full seasonal cycle, leaving the
    /// seasonal indices under-determined
    InsufficientHistory { observed: usize, seasonality: usize },

    /// A full seasonal cycle could not be aligned between history and
    /// forecast, so accuracy metrics were not computed
    MetricsUnavailable {
        required: usize,
        observed: usize,
        forecast: usize,
    },
}
