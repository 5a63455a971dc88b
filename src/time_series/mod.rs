//! Time Series Forecasting Module
//!
//! Holt-Winters triple exponential smoothing with multiplicative
//! seasonality. A forecast call runs four stages in order:
//!
//! - argument validation ([`validation`])
//! - initial trend and seasonal index estimation ([`initialization`])
//! - the level/trend/seasonal recurrence ([`holt_winters`])
//! - forecast emission, returned as an array the length of the input
//!
//! # Example
//!
//! ```rust
//! use holtwinters::time_series;
//!
//! let series = vec![10.0, 20.0, 30.0, 40.0, 11.0, 22.0, 31.0, 42.0];
//! let forecast = time_series::forecast(&series, 0.5, 0.4, 0.6, 4, 1).unwrap();
//! assert_eq!(forecast.len(), series.len());
//! ```

pub mod forecaster;
pub mod holt_winters;
pub mod initialization;
pub mod validation;

pub use forecaster::HoltWintersForecaster;
pub use holt_winters::{run_recurrence, HoltWintersComponents, SmoothingParams};
pub use initialization::{
    complete_seasons, initial_trend, normalized_observations, seasonal_averages,
    seasonal_indices,
};
pub use validation::{is_valid_arguments, validate_arguments};

use crate::error::{Error, Result};
use num_traits::ToPrimitive;

/// Forecast `m` steps ahead of every observed step.
///
/// Returns an array with the length of `series`. Position `t` holds the
/// forecast emitted at step `t - m`; positions never emitted hold `0.0`.
/// Values targeting positions past the end of the series are available
/// through [`smooth`].
///
/// `alpha` smooths the level, `gamma` the trend and `beta` the seasonal
/// factors. Invalid arguments are reported as [`Error::EmptyData`] or
/// [`Error::InvalidParameter`] before any computation; a series shorter
/// than two periods is [`Error::InsufficientData`].
pub fn forecast<T: AsRef<[f64]>>(
    series: T,
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    m: usize,
) -> Result<Vec<f64>> {
    let params = SmoothingParams::new(alpha, beta, gamma);
    smooth(series, params, period, m).map(|components| components.forecast)
}

/// Run the full pipeline and return every smoothing component.
pub fn smooth<T: AsRef<[f64]>>(
    series: T,
    params: SmoothingParams,
    period: usize,
    m: usize,
) -> Result<HoltWintersComponents> {
    let series = series.as_ref();
    validate_arguments(series, params.alpha, params.beta, params.gamma, period, m)?;

    let trend = initial_trend(series, period)?;
    let indices = seasonal_indices(series, period)?;
    log::debug!(
        "initial level {}, initial trend {}, seasonal indices {:?}",
        series[0],
        trend,
        indices
    );

    run_recurrence(series, series[0], trend, params, &indices, period, m)
}

/// Convert observations of any primitive numeric type to `f64`.
///
/// Fails with [`Error::InvalidParameter`] naming the first value that has
/// no `f64` representation.
pub fn series_from_values<T: ToPrimitive>(values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.to_f64().ok_or_else(|| {
                Error::InvalidParameter(format!("observation {} is not representable as f64", i))
            })
        })
        .collect()
}
