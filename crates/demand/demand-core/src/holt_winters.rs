//! Holt-Winters triple exponential smoothing for demand series
//!
//! The engine is a pure function of `(history, options)` organized as three
//! stages run strictly in order:
//!
//! 1. **Initialization**: level from the first observation, trend from half
//!    the first delta, and one cycle of multiplicative seasonal indices
//!    normalized against the overall series mean.
//! 2. **Recursive update**: one prediction per requested period,
//!    `(level + trend) * seasonal[t % m]`, with the smoothing correction
//!    applied only while the horizon index is still covered by history.
//! 3. **Evaluation**: MAE/MSE/RMSE over the most recent seasonal cycle of
//!    history against the most recent cycle of the forecast.
//!
//! ## Choosing Parameters
//!
//! - `alpha` (level): higher values respond faster to recent demand shifts
//! - `beta` (trend): controls trend smoothing
//! - `gamma` (seasonal): controls seasonal index smoothing

use demand_spi::{
    AccuracyMetrics, DemandError, DemandForecast, DemandForecaster, ForecastOptions,
    ForecastWarning, ResolvedParameters, Result,
};

use crate::metrics;

/// Method label echoed on every result
pub const METHOD: &str = "Holt-Winters Triple Exponential Smoothing";

/// Divisors closer to zero than this are treated as degenerate
const DIVISION_EPSILON: f64 = 1e-10;

/// Working smoothing state for one forecast invocation
///
/// Owned exclusively by a single call; allocated at its start and dropped at
/// its end.
#[derive(Debug)]
struct ModelState {
    level: f64,
    trend: f64,
    /// One multiplicative index per cycle position, indexed by `t % m`
    seasonal: Vec<f64>,
}

/// Stateless Holt-Winters demand forecaster
///
/// Each [`DemandForecaster::forecast`] call derives fresh [`ModelState`] from
/// the supplied history, so one instance can serve concurrent callers.
///
/// # Example
///
/// ```rust
/// use demand_core::{DemandForecaster, ForecastOptions, HoltWintersForecaster};
///
/// let history = vec![100.0, 110.0, 105.0, 120.0, 102.0, 115.0];
/// let options = ForecastOptions::default().with_periods(3).with_seasonality(6);
/// let result = HoltWintersForecaster::new().forecast(&history, &options).unwrap();
/// assert_eq!(result.forecast.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HoltWintersForecaster;

impl HoltWintersForecaster {
    /// Create a new forecaster
    pub fn new() -> Self {
        Self
    }
}

impl DemandForecaster for HoltWintersForecaster {
    fn forecast(&self, history: &[f64], options: &ForecastOptions) -> Result<DemandForecast> {
        validate_options(options)?;
        validate_history(history)?;

        let mut warnings = Vec::new();
        let mut state = initialize(history, options.seasonality, &mut warnings)?;

        let mut forecast = Vec::with_capacity(options.periods);
        for step in 0..options.periods {
            let t = history.len() + step;
            let season_idx = t % options.seasonality;

            forecast.push((state.level + state.trend) * state.seasonal[season_idx]);

            // The correction fires only for time indices still covered by the
            // supplied series; the horizon starts at history.len(), so a
            // forecast strictly beyond the data runs open-loop on the
            // initialized state.
            if let Some(&observed) = history.get(t) {
                smooth_step(&mut state, observed, season_idx, step, options)?;
            }
        }

        let metrics = evaluate_tail(history, &forecast, options.seasonality, &mut warnings);

        Ok(DemandForecast {
            forecast,
            metrics,
            parameters: ResolvedParameters {
                periods: options.periods,
                seasonality: options.seasonality,
                alpha: options.alpha,
                beta: options.beta,
                gamma: options.gamma,
                method: METHOD.to_string(),
            },
            warnings,
        })
    }
}

fn validate_options(options: &ForecastOptions) -> Result<()> {
    if options.periods == 0 {
        return Err(DemandError::InvalidParameter {
            name: "periods".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if options.seasonality == 0 {
        return Err(DemandError::InvalidParameter {
            name: "seasonality".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    // Weights outside [0, 1] are rejected rather than clamped.
    for (name, value) in [
        ("alpha", options.alpha),
        ("beta", options.beta),
        ("gamma", options.gamma),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DemandError::InvalidParameter {
                name: name.to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_history(history: &[f64]) -> Result<()> {
    if history.len() < 2 {
        return Err(DemandError::InsufficientData {
            required: 2,
            actual: history.len(),
        });
    }
    if history.iter().any(|v| !v.is_finite()) {
        return Err(DemandError::InvalidData(
            "history contains non-finite values".to_string(),
        ));
    }
    Ok(())
}

/// Derive the starting level, trend, and one cycle of seasonal indices
fn initialize(
    history: &[f64],
    seasonality: usize,
    warnings: &mut Vec<ForecastWarning>,
) -> Result<ModelState> {
    let level = history[0];
    let trend = (history[1] - history[0]) / 2.0;

    if history.len() < seasonality {
        warnings.push(ForecastWarning::InsufficientHistory {
            observed: history.len(),
            seasonality,
        });
    }

    let mean = history.iter().sum::<f64>() / history.len() as f64;
    if mean.abs() < DIVISION_EPSILON {
        return Err(DemandError::DegenerateDivision(
            "series mean is within epsilon of zero, seasonal indices cannot be normalized"
                .to_string(),
        ));
    }

    // Average each cycle offset over the cycles actually observed for it,
    // then normalize against the overall mean so the indices center near 1.0.
    // Offsets with no observation at all take the neutral index.
    let mut seasonal = Vec::with_capacity(seasonality);
    for offset in 0..seasonality {
        let values: Vec<f64> = history
            .iter()
            .skip(offset)
            .step_by(seasonality)
            .copied()
            .collect();

        if values.is_empty() {
            seasonal.push(1.0);
        } else {
            let avg = values.iter().sum::<f64>() / values.len() as f64;
            seasonal.push(avg / mean);
        }
    }

    Ok(ModelState {
        level,
        trend,
        seasonal,
    })
}

/// Apply one smoothing correction against an observed value
///
/// Both divisors are guarded: a seasonal index or a `level + trend` base
/// within epsilon of zero surfaces as an error instead of propagating
/// NaN/Infinity into the state.
fn smooth_step(
    state: &mut ModelState,
    observed: f64,
    season_idx: usize,
    step: usize,
    options: &ForecastOptions,
) -> Result<()> {
    let seasonal = state.seasonal[season_idx];
    if seasonal.abs() < DIVISION_EPSILON {
        return Err(DemandError::DegenerateDivision(format!(
            "seasonal index at position {season_idx} is within epsilon of zero at step {step}"
        )));
    }

    let prev_level = state.level;
    state.level = options.alpha * (observed / seasonal)
        + (1.0 - options.alpha) * (state.level + state.trend);
    state.trend =
        options.beta * (state.level - prev_level) + (1.0 - options.beta) * state.trend;

    let base = prev_level + state.trend;
    if base.abs() < DIVISION_EPSILON {
        return Err(DemandError::DegenerateDivision(format!(
            "level plus trend is within epsilon of zero at step {step}"
        )));
    }
    state.seasonal[season_idx] =
        options.gamma * (observed / base) + (1.0 - options.gamma) * seasonal;

    Ok(())
}

/// Accuracy over the most recent seasonal cycle of history and forecast
///
/// Returns `None` (with a warning attached) when either side is shorter than
/// one full cycle, rather than scoring misaligned slices.
fn evaluate_tail(
    history: &[f64],
    forecast: &[f64],
    seasonality: usize,
    warnings: &mut Vec<ForecastWarning>,
) -> Option<AccuracyMetrics> {
    if history.len() < seasonality || forecast.len() < seasonality {
        warnings.push(ForecastWarning::MetricsUnavailable {
            required: seasonality,
            observed: history.len(),
            forecast: forecast.len(),
        });
        return None;
    }

    let observed = &history[history.len() - seasonality..];
    let predicted = &forecast[forecast.len() - seasonality..];

    Some(AccuracyMetrics {
        mae: metrics::mae(observed, predicted),
        mse: metrics::mse(observed, predicted),
        rmse: metrics::rmse(observed, predicted),
    })
}
