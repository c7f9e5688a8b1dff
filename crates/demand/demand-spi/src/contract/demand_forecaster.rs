//! Trait for demand forecasters

use crate::error::Result;
use crate::model::{DemandForecast, ForecastOptions};

/// Trait for multi-period demand forecasters
///
/// Implementations are pure functions of `(history, options)`: each call
/// derives fresh working state from the supplied history and discards it on
/// return, so a single instance may serve concurrent callers with distinct
/// inputs.
pub trait DemandForecaster: Send + Sync {
    /// Produce a forecast of `options.periods` future values from `history`
    fn forecast(&self, history: &[f64], options: &ForecastOptions) -> Result<DemandForecast>;
}
