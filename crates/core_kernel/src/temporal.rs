//! Holding-period arithmetic
//!
//! An investment is held over a calendar date range. Annualized figures convert
//! the day count into fractional years using the 365.25-day Julian year, so that
//! leap years average out over long holding periods.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Average length of a year in days (Julian year)
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },
}

/// The date range over which an investment is held
///
/// Both bounds are inclusive calendar dates. A period whose start and end fall
/// on the same day is valid but empty: it has zero length in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HoldingPeriod {
    /// Creates a holding period
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidPeriod` if `end` is before `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days between start and end
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Length of the period in fractional years (`days / 365.25`)
    pub fn years(&self) -> Decimal {
        Decimal::from(self.days()) / DAYS_PER_YEAR
    }

    /// Returns true if start and end fall on the same day
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
