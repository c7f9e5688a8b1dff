//! Forecast configuration model

use serde::{Deserialize, Serialize};

/// Options controlling a demand forecast run
///
/// Fields left unset take the documented defaults: 12 forecast periods,
/// a 12-step seasonal cycle, and smoothing weights 0.3/0.2/0.1. A partially
/// specified JSON document deserializes the same way via `#[serde(default)]`.
///
/// # Example
///
/// ```rust
/// use demand_spi::ForecastOptions;
///
/// let options = ForecastOptions::default().with_periods(6).with_seasonality(4);
/// assert_eq!(options.periods, 6);
/// assert_eq!(options.alpha, 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOptions {
    /// Number of future points to forecast
    pub periods: usize,
    /// Length of one seasonal cycle
    pub seasonality: usize,
    /// Level smoothing weight
    pub alpha: f64,
    /// Trend smoothing weight
    pub beta: f64,
    /// Seasonal smoothing weight
    pub gamma: f64,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            periods: 12,
            seasonality: 12,
            alpha: 0.3,
            beta: 0.2,
            gamma: 0.1,
        }
    }
}

impl ForecastOptions {
    /// Set the forecast horizon length
    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Set the seasonal cycle length
    pub fn with_seasonality(mut self, seasonality: usize) -> Self {
        self.seasonality = seasonality;
        self
    }

    /// Set the level smoothing weight
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the trend smoothing weight
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the seasonal smoothing weight
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = ForecastOptions::default();
        assert_eq!(options.periods, 12);
        assert_eq!(options.seasonality, 12);
        assert_eq!(options.alpha, 0.3);
        assert_eq!(options.beta, 0.2);
        assert_eq!(options.gamma, 0.1);
    }

    #[test]
    fn test_builder_overrides() {
        let options = ForecastOptions::default()
            .with_periods(3)
            .with_seasonality(4)
            .with_alpha(0.5)
            .with_beta(0.4)
            .with_gamma(0.3);

        assert_eq!(options.periods, 3);
        assert_eq!(options.seasonality, 4);
        assert_eq!(options.alpha, 0.5);
        assert_eq!(options.beta, 0.4);
        assert_eq!(options.gamma, 0.3);
    }

    #[test]
    fn test_builder_leaves_other_fields_at_default() {
        let options = ForecastOptions::default().with_periods(3);
        assert_eq!(options.seasonality, 12);
        assert_eq!(options.alpha, 0.3);
    }

    #[test]
    fn test_options_are_copy() {
        let options = ForecastOptions::default();
        let copied = options;
        assert_eq!(options, copied);
    }
}
