//! Forecast configuration
//!
//! A [`HoltWintersConfig`] can be built in code with
//! [`HoltWintersConfigBuilder`] or loaded from JSON, YAML or TOML.
//!
//! ```toml
//! alpha = 0.5
//! beta = 0.4
//! gamma = 0.6
//! period = 4
//! horizon = 1
//! non_finite_policy = "reject"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time_series::validation::check_unit_interval;
use crate::time_series::SmoothingParams;

/// Handling of `Inf`/`NaN` in forecast output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Return non-finite values to the caller unchanged
    #[default]
    Propagate,
    /// Fail with [`Error::NonFiniteResult`]
    Reject,
}

impl fmt::Display for NonFinitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NonFinitePolicy::Propagate => write!(f, "propagate"),
            NonFinitePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Configuration for Holt-Winters forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersConfig {
    /// Level smoothing constant
    pub alpha: f64,
    /// Seasonal smoothing constant
    pub beta: f64,
    /// Trend smoothing constant
    pub gamma: f64,
    /// Length of one seasonal cycle
    pub period: usize,
    /// Steps ahead to forecast (m)
    pub horizon: usize,
    /// What to do with non-finite forecasts
    #[serde(default)]
    pub non_finite_policy: NonFinitePolicy,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        HoltWintersConfig {
            alpha: 0.5,
            beta: 0.5,
            gamma: 0.5,
            period: 12,
            horizon: 1,
            non_finite_policy: NonFinitePolicy::Propagate,
        }
    }
}

impl HoltWintersConfig {
    /// Smoothing constants as a value
    pub fn params(&self) -> SmoothingParams {
        SmoothingParams::new(self.alpha, self.beta, self.gamma)
    }

    /// Check constants and horizon without looking at any data
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > self.period {
            return Err(Error::InvalidParameter(format!(
                "horizon ({}) must lie in 1..=period ({})",
                self.horizon, self.period
            )));
        }
        check_unit_interval("alpha", self.alpha)?;
        check_unit_interval("beta", self.beta)?;
        check_unit_interval("gamma", self.gamma)?;
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, choosing the format from its extension
    /// (`json`, `yaml`/`yml` or `toml`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(Error::Format(format!(
                    "unsupported config file extension: {}",
                    path.display()
                )))
            }
        };

        let content = fs::read_to_string(path)?;
        log::debug!("loading forecast config from {}", path.display());
        parse(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for HoltWintersConfig
pub struct HoltWintersConfigBuilder {
    config: HoltWintersConfig,
}

impl HoltWintersConfigBuilder {
    pub fn new() -> Self {
        HoltWintersConfigBuilder {
            config: HoltWintersConfig::default(),
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.config.beta = beta;
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    pub fn period(mut self, period: usize) -> Self {
        self.config.period = period;
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn non_finite_policy(mut self, policy: NonFinitePolicy) -> Self {
        self.config.non_finite_policy = policy;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<HoltWintersConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for HoltWintersConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
