//! Initial state estimation
//!
//! Computes the starting trend from the first two periods and the
//! multiplicative seasonal indices from all complete periods.

use crate::error::{Error, Result};

/// Initial trend estimate from the first two periods:
///
/// ```text
/// b0 = Σ_{i<period} (x[period + i] - x[i]) / period²
/// ```
///
/// The series must hold at least `2 * period` observations.
pub fn initial_trend(series: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(Error::InsufficientData(
            "initial trend requires a positive period".into(),
        ));
    }

    if series.len() / 2 < period {
        return Err(Error::InsufficientData(format!(
            "initial trend requires two periods of {} observations, got {}",
            period,
            series.len()
        )));
    }

    let sum = (0..period)
        .map(|i| series[period + i] - series[i])
        .sum::<f64>();

    Ok(sum / (period as f64 * period as f64))
}

/// Number of complete seasons in the series.
pub fn complete_seasons(len: usize, period: usize) -> usize {
    if period == 0 {
        0
    } else {
        len / period
    }
}

/// Mean of each complete season. A trailing partial season is ignored.
pub fn seasonal_averages(series: &[f64], period: usize) -> Result<Vec<f64>> {
    let seasons = checked_seasons(series, period)?;

    Ok(series
        .chunks_exact(period)
        .take(seasons)
        .map(|season| season.iter().sum::<f64>() / period as f64)
        .collect())
}

/// Each observation of the complete seasons divided by its season's mean.
///
/// The result has `seasons * period` elements. A zero season mean is not
/// guarded and yields non-finite ratios.
pub fn normalized_observations(
    series: &[f64],
    period: usize,
    averages: &[f64],
) -> Vec<f64> {
    if period == 0 {
        return Vec::new();
    }

    series
        .chunks_exact(period)
        .zip(averages)
        .flat_map(|(season, &avg)| season.iter().map(move |&x| x / avg))
        .collect()
}

/// Multiplicative seasonal indices, one per position within the period.
///
/// Each index is the mean, across all complete seasons, of the
/// observation-to-season-mean ratio at that position.
pub fn seasonal_indices(series: &[f64], period: usize) -> Result<Vec<f64>> {
    let averages = seasonal_averages(series, period)?;
    let seasons = averages.len();
    let normalized = normalized_observations(series, period, &averages);

    let mut indices = vec![0.0; period];
    for season in normalized.chunks_exact(period) {
        for (index, &ratio) in indices.iter_mut().zip(season) {
            *index += ratio;
        }
    }
    for index in indices.iter_mut() {
        *index /= seasons as f64;
    }

    Ok(indices)
}

fn checked_seasons(series: &[f64], period: usize) -> Result<usize> {
    let seasons = complete_seasons(series.len(), period);
    if seasons == 0 {
        return Err(Error::InsufficientData(format!(
            "seasonal indices require at least one complete period of {}, got {} observations",
            period,
            series.len()
        )));
    }
    Ok(seasons)
}
