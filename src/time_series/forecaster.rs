//! Reusable Holt-Winters forecaster
//!
//! Holds a validated [`HoltWintersConfig`] and applies it to any number of
//! series. Each call is independent and keeps no state between calls.

use crate::config::{HoltWintersConfig, NonFinitePolicy};
use crate::error::{Error, Result};
use crate::time_series::{self, HoltWintersComponents};

/// Holt-Winters forecaster with fixed smoothing constants
#[derive(Debug, Clone)]
pub struct HoltWintersForecaster {
    config: HoltWintersConfig,
}

impl HoltWintersForecaster {
    /// Create a forecaster, validating the configuration
    pub fn new(config: HoltWintersConfig) -> Result<Self> {
        config.validate()?;
        Ok(HoltWintersForecaster { config })
    }

    pub fn config(&self) -> &HoltWintersConfig {
        &self.config
    }

    /// Forecast array with the length of `series`
    pub fn forecast<T: AsRef<[f64]>>(&self, series: T) -> Result<Vec<f64>> {
        self.smooth(series).map(|components| components.forecast)
    }

    /// Every smoothing component, subject to the configured
    /// [`NonFinitePolicy`]
    pub fn smooth<T: AsRef<[f64]>>(&self, series: T) -> Result<HoltWintersComponents> {
        let series = series.as_ref();
        log::debug!(
            "Holt-Winters forecast: n={}, period={}, horizon={}, alpha={}, beta={}, gamma={}",
            series.len(),
            self.config.period,
            self.config.horizon,
            self.config.alpha,
            self.config.beta,
            self.config.gamma
        );

        let components = time_series::smooth(
            series,
            self.config.params(),
            self.config.period,
            self.config.horizon,
        )?;

        if let Some(index) = components.first_non_finite() {
            log::warn!("non-finite forecast value at position {}", index);
            if self.config.non_finite_policy == NonFinitePolicy::Reject {
                return Err(Error::NonFiniteResult { index });
            }
        }

        Ok(components)
    }

    /// Human-readable summary of the model and a fitted series
    pub fn describe<T: AsRef<[f64]>>(&self, series: T) -> Result<String> {
        let components = self.smooth(series)?;
        let n = components.forecast.len();

        let mut summary = String::new();
        summary.push_str("Holt-Winters (multiplicative)\n");
        summary.push_str(&format!(
            "  alpha (level): {:.4}, beta (seasonal): {:.4}, gamma (trend): {:.4}\n",
            self.config.alpha, self.config.beta, self.config.gamma
        ));
        summary.push_str(&format!(
            "  period: {}, horizon: {}, observations: {}\n",
            self.config.period, self.config.horizon, n
        ));
        summary.push_str(&format!(
            "  initial trend: {:.6}\n",
            components.initial_trend
        ));
        summary.push_str(&format!(
            "  seasonal indices: {:?}\n",
            components.seasonal_indices
        ));
        if let Some((index, value)) = components.first_forecast() {
            summary.push_str(&format!(
                "  first forecast: t={} value={:.6}\n",
                index, value
            ));
        }
        summary.push_str(&format!("  projection: {:?}\n", components.projection));

        Ok(summary)
    }
}
