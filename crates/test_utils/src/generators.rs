//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating investment inputs that
//! respect the calculator's preconditions: positive capital and NAVs, and a
//! non-empty holding period.

use std::ops::Range;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::HoldingPeriod;

/// Strategy for generating capital amounts with two decimal places (0.01 to 1,000,000.00)
pub fn capital_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating zero or negative capital amounts
pub fn non_positive_capital_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=0i64).prop_map(Decimal::from)
}

/// Strategy for generating NAVs with four decimal places (0.0001 to 100.0000)
pub fn nav_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for generating holding periods whose length in days falls in `days`
///
/// Periods start somewhere between 2000 and 2019. `days` must not go below 0.
pub fn holding_period_strategy(days: Range<i64>) -> impl Strategy<Value = HoldingPeriod> {
    (0i64..7_300i64, days).prop_map(|(offset, length)| {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid epoch");
        let start = epoch + Duration::days(offset);
        HoldingPeriod::new(start, start + Duration::days(length))
            .expect("end is never before start")
    })
}
