mod common;

use approx::assert_relative_eq;
use common::{multiplicative_series, QUARTERLY};
use holtwinters::time_series::{initial_trend, seasonal_averages, seasonal_indices};
use holtwinters::{forecast, smooth, Error, SmoothingParams};

// ============================================================================
// Validation boundary
// ============================================================================

#[test]
fn test_invalid_arguments_yield_no_result() {
    let cases: Vec<(&[f64], f64, f64, f64, usize, usize)> = vec![
        (&[][..], 0.5, 0.5, 0.5, 4, 1),
        (&QUARTERLY[..], 0.5, 0.5, 0.5, 4, 0),
        (&QUARTERLY[..], 0.5, 0.5, 0.5, 4, 5),
        (&QUARTERLY[..], -0.01, 0.5, 0.5, 4, 1),
        (&QUARTERLY[..], 0.5, 1.01, 0.5, 4, 1),
        (&QUARTERLY[..], 0.5, 0.5, 1.5, 4, 1),
    ];

    for (series, alpha, beta, gamma, period, m) in cases {
        let result = forecast(series, alpha, beta, gamma, period, m);
        match result {
            Err(err) => assert!(err.is_validation(), "unexpected error: {}", err),
            Ok(values) => panic!("expected no result, got {:?}", values),
        }
    }
}

#[test]
fn test_boundary_constants_are_accepted() {
    assert!(forecast(&QUARTERLY[..], 0.0, 0.0, 0.0, 4, 4).is_ok());
    assert!(forecast(&QUARTERLY[..], 1.0, 1.0, 1.0, 4, 1).is_ok());
}

// ============================================================================
// Shape and determinism
// ============================================================================

#[test]
fn test_length_invariant() {
    for m in 1..=4 {
        let result = forecast(&QUARTERLY[..], 0.3, 0.2, 0.1, 4, m).unwrap();
        assert_eq!(result.len(), QUARTERLY.len());
    }

    // Trailing partial season is still consumed by the recurrence
    let mut series = QUARTERLY.to_vec();
    series.extend_from_slice(&[12.0, 23.0]);
    let result = forecast(&series, 0.3, 0.2, 0.1, 4, 2).unwrap();
    assert_eq!(result.len(), 14);
    assert_ne!(result[13], 0.0);
}

#[test]
fn test_deterministic_output() {
    let first = forecast(&QUARTERLY[..], 0.5, 0.4, 0.6, 4, 2).unwrap();
    let second = forecast(&QUARTERLY[..], 0.5, 0.4, 0.6, 4, 2).unwrap();

    let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_trend_initializer_example() {
    let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    assert_eq!(initial_trend(&series, 4).unwrap(), 1.0);
}

#[test]
fn test_constant_series_seasonal_sanity() {
    let series = vec![10.0; 12];
    assert_eq!(seasonal_averages(&series, 4).unwrap(), vec![10.0; 3]);
    assert_eq!(seasonal_indices(&series, 4).unwrap(), vec![1.0; 4]);
}

#[test]
fn test_degenerate_period_guard() {
    // Shorter than one period: rejected with a typed error, never NaN
    let err = forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 0.5, 4, 1).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));

    let err = seasonal_indices(&[1.0, 2.0, 3.0], 4).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));

    // One full period but not two
    let err = forecast(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5, 0.5, 0.5, 4, 1).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));
}

#[test]
fn test_huge_period_is_insufficient_data() {
    // Passes argument validation; must fail cleanly, not overflow
    let err = forecast(&[1.0, 2.0, 3.0][..], 0.5, 0.5, 0.5, usize::MAX, 1).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));

    let err = forecast(&QUARTERLY[..], 0.5, 0.5, 0.5, usize::MAX, usize::MAX).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_scenario_golden_values() {
    let result = forecast(&QUARTERLY[..], 0.5, 0.4, 0.6, 4, 1).unwrap();

    assert_eq!(result.len(), 12);
    assert_eq!(&result[..4], &[0.0, 0.0, 0.0, 0.0]);

    let expected = [
        17.36360826594789,
        33.302265820029035,
        42.90429275511169,
        45.828829502297154,
        9.227709782397419,
        18.44975262534387,
        29.247673087149526,
        43.3014233159826,
    ];
    for (actual, expected) in result[4..].iter().zip(expected.iter()) {
        assert_relative_eq!(*actual, *expected, epsilon = 1e-9);
    }
}

#[test]
fn test_reference_scenario_projection() {
    let params = SmoothingParams::new(0.5, 0.4, 0.6);

    let components = smooth(&QUARTERLY[..], params, 4, 1).unwrap();
    assert_eq!(components.projection.len(), 1);
    assert_relative_eq!(components.projection[0], 9.957168231030497, epsilon = 1e-9);

    let components = smooth(&QUARTERLY[..], params, 4, 4).unwrap();
    let expected = [
        7.2783871037662005,
        18.22158240236324,
        33.42937601709444,
        41.023206170138806,
    ];
    for (actual, expected) in components.projection.iter().zip(expected.iter()) {
        assert_relative_eq!(*actual, *expected, epsilon = 1e-9);
    }
}

// ============================================================================
// Behavior on structured series
// ============================================================================

#[test]
fn test_constant_series_forecasts_constant() {
    let series = vec![5.0; 16];
    let components = smooth(&series, SmoothingParams::new(0.3, 0.3, 0.3), 4, 2).unwrap();

    assert_eq!(components.initial_trend, 0.0);
    for &value in &components.forecast[4..] {
        assert_relative_eq!(value, 5.0, epsilon = 1e-12);
    }
    for &value in &components.projection {
        assert_relative_eq!(value, 5.0, epsilon = 1e-12);
    }
}

#[test]
fn test_seasonal_peak_is_tracked() {
    let pattern = [0.8, 1.0, 1.4, 0.8];
    let series = multiplicative_series(6, &pattern, 100.0, 1.0);
    let components = smooth(&series, SmoothingParams::new(0.4, 0.3, 0.2), 4, 4).unwrap();

    // The third position of each cycle is the peak
    let last_cycle = &components.seasonal[20..24];
    let peak = last_cycle
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    assert_eq!(peak, 2);

    // Trend stays positive for a rising series
    assert!(components.trend[23] > 0.0);
}
