//! Shared helpers for the integration tests.
#![allow(dead_code)]

use panelfit::Dimension;

/// Tolerance for render-space comparisons.
pub const EPSILON: f64 = 1e-9;

pub fn dims(width: f64, height: f64) -> Dimension {
    Dimension::new(width, height)
}

/// Deterministic spread of awkward decimal sizes, including values that do
/// not divide evenly in binary floating point.
pub fn sample_lengths() -> Vec<f64> {
    let mut values = vec![
        0.1, 0.3, 0.7, 1.0, 2.5, 3.3, 7.0, 10.0, 33.3, 49.99, 50.0, 50.01, 64.0, 99.9, 100.0,
        105.0, 123.456, 500.0, 999.99, 1000.0, 1234.5,
    ];
    for i in 1..=40_u32 {
        values.push(f64::from(i) * 0.1);
        values.push(f64::from(i) * 12.7);
    }
    values
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}
