//! Contract module containing trait definitions for demand forecasting

mod demand_forecaster;

pub use demand_forecaster::DemandForecaster;
