//! Model module containing data structures

mod accuracy_metrics;
mod demand_forecast;
mod forecast_options;
mod warning;

pub use accuracy_metrics::AccuracyMetrics;
pub use demand_forecast::{DemandForecast, ResolvedParameters};
pub use forecast_options::ForecastOptions;
pub use warning::ForecastWarning;
