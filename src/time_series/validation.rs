//! Argument validation for Holt-Winters forecasting
//!
//! Rules are checked in a fixed order and the first failure wins:
//! empty series, non-positive horizon, horizon longer than the period,
//! then each smoothing constant outside `[0, 1]`.

use crate::error::{Error, Result};

/// Check forecasting arguments, reporting the first rule that fails.
///
/// `period` is only checked through its relation to `m`. Whether the
/// series is long enough for the period is decided later by the
/// initializers.
pub fn validate_arguments(
    series: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    m: usize,
) -> Result<()> {
    if series.is_empty() {
        return Err(Error::EmptyData(
            "forecasting requires at least one observation".into(),
        ));
    }

    if m == 0 {
        return Err(Error::InvalidParameter(
            "forecast horizon m must be greater than 0".into(),
        ));
    }

    if m > period {
        return Err(Error::InvalidParameter(format!(
            "forecast horizon m ({}) must not exceed the period ({})",
            m, period
        )));
    }

    check_unit_interval("alpha", alpha)?;
    check_unit_interval("beta", beta)?;
    check_unit_interval("gamma", gamma)?;

    Ok(())
}

/// Predicate form of [`validate_arguments`].
pub fn is_valid_arguments(
    series: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    m: usize,
) -> bool {
    validate_arguments(series, alpha, beta, gamma, period, m).is_ok()
}

/// Closed-interval check; NaN never passes.
pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "{} ({}) must lie in [0.0, 1.0]",
            name, value
        )))
    }
}
