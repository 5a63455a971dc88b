//! # holtwinters
//!
//! Holt-Winters triple exponential smoothing with multiplicative
//! seasonality. Given a periodic series and caller-supplied smoothing
//! constants, estimates level, trend and seasonal components and emits
//! forecasts `m` steps ahead of each observation.
//!
//! ```rust
//! let series = vec![
//!     10.0, 20.0, 30.0, 40.0, 11.0, 22.0, 31.0, 42.0, 10.0, 21.0, 33.0, 41.0,
//! ];
//! let forecast = holtwinters::forecast(&series, 0.5, 0.4, 0.6, 4, 1).unwrap();
//! assert_eq!(forecast.len(), series.len());
//! ```

pub mod config;
pub mod error;
pub mod time_series;

// Re-export commonly used types
pub use config::{HoltWintersConfig, HoltWintersConfigBuilder, NonFinitePolicy};
pub use error::{Error, Result};
pub use time_series::{
    forecast, series_from_values, smooth, HoltWintersComponents, HoltWintersForecaster,
    SmoothingParams,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
