//! Demand forecasting error types

use thiserror::Error;

/// Errors that can occur while producing a demand forecast
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemandError {
    /// Insufficient history for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// History contains values the model cannot work with
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Invalid option value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A smoothing divisor was zero or indistinguishable from zero
    #[error("Degenerate division: {0}")]
    DegenerateDivision(String),
}
