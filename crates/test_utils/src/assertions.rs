//! Custom Test Assertions
//!
//! Provides assertion helpers that give more meaningful error messages than
//! standard assertions when comparing computed figures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Asserts that two Decimal values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a JSON field holds a number approximately equal to `expected`
///
/// # Panics
///
/// Panics if the field is missing, not a number, or too far from `expected`
pub fn assert_json_number(body: &Value, field: &str, expected: Decimal, tolerance: f64) {
    let actual = body
        .get(field)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("Expected numeric field '{field}' in {body}"));
    let expected = expected
        .to_f64()
        .unwrap_or_else(|| panic!("Expected value {expected} does not fit in f64"));

    assert!(
        (actual - expected).abs() <= tolerance,
        "Field '{}' differs by more than tolerance: actual={}, expected={}, tolerance={}",
        field,
        actual,
        expected,
        tolerance
    );
}
