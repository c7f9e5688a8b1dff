//! Forecast accuracy metrics model

use serde::{Deserialize, Serialize};

/// Forecast accuracy over the most recent seasonal cycle
///
/// All three values are non-negative and share the scale of the data
/// (MSE excepted, which is in squared units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
}
