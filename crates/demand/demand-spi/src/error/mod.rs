//! Error module containing error types and result aliases

mod demand_error;

pub use demand_error::DemandError;

/// Result type for demand forecasting operations
pub type Result<T> = std::result::Result<T, DemandError>;
