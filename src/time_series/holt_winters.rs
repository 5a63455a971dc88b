//! Holt-Winters recurrence engine (multiplicative seasonality)
//!
//! # Algorithm
//!
//! For each step `i` from 2 to `n - 1`, with period `p` and horizon `m`:
//!
//! ```text
//! Level:    S_i = α x_i / I_{i-p} + (1 - α)(S_{i-1} + B_{i-1})     (i >= p)
//!           S_i = α x_i           + (1 - α)(S_{i-1} + B_{i-1})     (i <  p)
//! Trend:    B_i = γ (S_i - S_{i-1}) + (1 - γ) B_{i-1}
//! Season:   I_i = β x_i / S_i + (1 - β) I_{i-p}                    (i >= p)
//! Forecast: F_{i+m} = (S_i + m B_i) I_{i-p+m}                      (i + m >= p)
//! ```
//!
//! Note the role assignment: `alpha` smooths the level, `gamma` the trend
//! and `beta` the seasonal factors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smoothing constants, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Level smoothing constant
    pub alpha: f64,
    /// Seasonal smoothing constant
    pub beta: f64,
    /// Trend smoothing constant
    pub gamma: f64,
}

impl SmoothingParams {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        SmoothingParams { alpha, beta, gamma }
    }
}

/// All state produced by one Holt-Winters pass.
///
/// `level`, `trend`, `seasonal` and `forecast` have the length of the input
/// series. Positions the recurrence never writes hold `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersComponents {
    /// Smoothed level per step
    pub level: Vec<f64>,
    /// Smoothed trend per step
    pub trend: Vec<f64>,
    /// Seasonal factor per step; the first `period` entries are the seeds
    pub seasonal: Vec<f64>,
    /// `forecast[t]` is the value emitted `m` steps before `t`
    pub forecast: Vec<f64>,
    /// Forecasts whose target lies past the last observation;
    /// `projection[k]` targets position `n + k`
    pub projection: Vec<f64>,
    /// Initial seasonal indices, one per position in the period
    pub seasonal_indices: Vec<f64>,
    /// Level seed (first observation)
    pub initial_level: f64,
    /// Trend seed
    pub initial_trend: f64,
    /// Seasonal period the pass ran with
    pub period: usize,
    /// Forecast horizon m
    pub horizon: usize,
}

impl HoltWintersComponents {
    /// Position and value of the first in-sample forecast.
    ///
    /// Emission starts at the first step `i >= 2` with `i + m >= period`,
    /// so the position follows from the period and horizon alone.
    pub fn first_forecast(&self) -> Option<(usize, f64)> {
        let position = self.period.saturating_sub(self.horizon).max(2) + self.horizon;
        self.forecast.get(position).map(|&value| (position, value))
    }

    /// Position of the first non-finite value in `forecast` or `projection`.
    ///
    /// Projection slots are numbered after the in-sample positions.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.forecast
            .iter()
            .chain(self.projection.iter())
            .position(|v| !v.is_finite())
    }
}

/// Run the smoothing recurrence over `series`.
///
/// `seasonal_indices` must hold exactly `period` factors; they seed the
/// seasonal state at absolute positions `0..period`. Emissions targeting
/// `n..n + m` go to [`HoltWintersComponents::projection`] so that `forecast`
/// keeps the length of the input.
///
/// Division by a zero level or seasonal factor is not guarded; the
/// resulting `Inf`/`NaN` flows into later steps.
pub fn run_recurrence(
    series: &[f64],
    initial_level: f64,
    initial_trend: f64,
    params: SmoothingParams,
    seasonal_indices: &[f64],
    period: usize,
    m: usize,
) -> Result<HoltWintersComponents> {
    if m == 0 || m > period {
        return Err(Error::InvalidParameter(format!(
            "forecast horizon m ({}) must lie in 1..={}",
            m, period
        )));
    }

    if seasonal_indices.len() != period {
        return Err(Error::InvalidParameter(format!(
            "expected {} seasonal indices, got {}",
            period,
            seasonal_indices.len()
        )));
    }

    // m <= period == seasonal_indices.len() bounds the projection buffer
    let n = series.len();
    let SmoothingParams { alpha, beta, gamma } = params;

    let mut st = vec![0.0; n];
    let mut bt = vec![0.0; n];
    let mut it = vec![0.0; n];
    let mut ft = vec![0.0; n];
    let mut projection = vec![0.0; m];

    if n > 1 {
        st[1] = initial_level;
        bt[1] = initial_trend;
    }
    for (slot, &index) in it.iter_mut().zip(seasonal_indices) {
        *slot = index;
    }

    let steps = m as f64;
    for i in 2..n {
        st[i] = if i >= period {
            alpha * series[i] / it[i - period] + (1.0 - alpha) * (st[i - 1] + bt[i - 1])
        } else {
            alpha * series[i] + (1.0 - alpha) * (st[i - 1] + bt[i - 1])
        };

        bt[i] = gamma * (st[i] - st[i - 1]) + (1.0 - gamma) * bt[i - 1];

        if i >= period {
            it[i] = beta * series[i] / st[i] + (1.0 - beta) * it[i - period];
        }

        let target = i + m;
        if target >= period {
            let value = (st[i] + steps * bt[i]) * it[target - period];
            if target < n {
                ft[target] = value;
            } else {
                log::trace!("projection[{}] = {} (emitted at step {})", target - n, value, i);
                projection[target - n] = value;
            }
        }
    }

    Ok(HoltWintersComponents {
        level: st,
        trend: bt,
        seasonal: it,
        forecast: ft,
        projection,
        seasonal_indices: seasonal_indices.to_vec(),
        initial_level,
        initial_trend,
        period,
        horizon: m,
    })
}
