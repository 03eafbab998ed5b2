//! Net Asset Value (NAV) quotes
//!
//! A quote is the published price of one unit of a scheme on a given date. Quotes
//! are fetched on demand for a single evaluation and never stored.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FundError;

/// Identifier the NAV provider uses to address a mutual fund scheme
///
/// The code is opaque: it is forwarded to the provider as-is and echoed back in
/// responses unmodified. Only blank codes are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemeCode(String);

impl SchemeCode {
    /// Creates a scheme code
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidInput` if the code is empty or only whitespace
    pub fn new(code: impl Into<String>) -> Result<Self, FundError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(FundError::invalid_input("scheme code must not be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SchemeCode {
    type Error = FundError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SchemeCode> for String {
    fn from(code: SchemeCode) -> Self {
        code.0
    }
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single NAV price point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavQuote {
    /// Scheme the NAV was published for
    pub scheme_code: SchemeCode,
    /// Date of the NAV
    pub nav_date: NaiveDate,
    /// NAV value per unit
    pub value: Decimal,
    /// Source of NAV data
    pub source: Option<String>,
}

impl NavQuote {
    /// Creates a NAV quote
    pub fn new(scheme_code: SchemeCode, nav_date: NaiveDate, value: Decimal) -> Self {
        Self {
            scheme_code,
            nav_date,
            value,
            source: None,
        }
    }

    /// Records where the quote came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
