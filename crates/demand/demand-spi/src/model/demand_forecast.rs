//! Demand forecast result model

use serde::{Deserialize, Serialize};

use crate::model::{AccuracyMetrics, ForecastWarning};

/// Resolved configuration echoed back on every result for audit and
/// reproducibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    /// Forecast horizon length
    pub periods: usize,
    /// Seasonal cycle length
    pub seasonality: usize,
    /// Level smoothing weight
    pub alpha: f64,
    /// Trend smoothing weight
    pub beta: f64,
    /// Seasonal smoothing weight
    pub gamma: f64,
    /// Forecasting method label
    pub method: String,
}

/// Output of one forecast invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    /// Forecast values, one per requested period
    pub forecast: Vec<f64>,
    /// Tail-aligned accuracy metrics; `None` when a full seasonal cycle
    /// could not be aligned between history and forecast
    pub metrics: Option<AccuracyMetrics>,
    /// Echo of the resolved configuration
    pub parameters: ResolvedParameters,
    /// Non-fatal quality warnings
    pub warnings: Vec<ForecastWarning>,
}

impl DemandForecast {
    /// Whether the history was shorter than one full seasonal cycle
    pub fn has_insufficient_history(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ForecastWarning::InsufficientHistory { .. }))
    }
}
