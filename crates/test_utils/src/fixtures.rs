//! Pre-built Test Fixtures
//!
//! Provides ready-to-use NAV data and an in-memory `NavPort`. These fixtures
//! are consistent and predictable: the sample scheme grows from NAV 10 to 12
//! over exactly four Julian years.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{DomainPort, PortError};
use domain_fund::{NavPort, NavQuote, SchemeCode};

/// Fixture for NAV test data
pub struct NavFixtures;

impl NavFixtures {
    /// Scheme code used throughout the test suite
    pub const SCHEME_CODE: &'static str = "119551";

    pub fn scheme_code() -> SchemeCode {
        SchemeCode::new(Self::SCHEME_CODE).expect("fixture scheme code is valid")
    }

    /// Purchase date (Jan 1, 2020)
    pub fn purchase_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    /// Redemption date (Jan 1, 2024), 1461 days after purchase
    pub fn redemption_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    pub fn purchase_nav() -> Decimal {
        dec!(10)
    }

    pub fn redemption_nav() -> Decimal {
        dec!(12)
    }

    /// A stub answering the purchase and redemption NAVs of the sample scheme
    pub fn growing_scheme() -> StubNavPort {
        StubNavPort::new()
            .with_nav(Self::SCHEME_CODE, Self::purchase_date(), Self::purchase_nav())
            .with_nav(Self::SCHEME_CODE, Self::redemption_date(), Self::redemption_nav())
    }
}

/// Scripted answer for one NAV lookup
#[derive(Debug, Clone)]
pub enum StubAnswer {
    Nav(Decimal),
    Status(u16),
    Malformed,
    Timeout,
}

/// In-memory NAV provider
///
/// Answers lookups from a table keyed by scheme code and date. Lookups that
/// are not in the table answer with status 404, like the live provider does
/// for dates without a published NAV. Every lookup is recorded.
#[derive(Debug, Default)]
pub struct StubNavPort {
    answers: HashMap<(String, NaiveDate), StubAnswer>,
    calls: Mutex<Vec<(String, NaiveDate)>>,
}

impl StubNavPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nav(self, scheme_code: &str, date: NaiveDate, nav: Decimal) -> Self {
        self.with_answer(scheme_code, date, StubAnswer::Nav(nav))
    }

    pub fn with_status(self, scheme_code: &str, date: NaiveDate, status: u16) -> Self {
        self.with_answer(scheme_code, date, StubAnswer::Status(status))
    }

    pub fn with_answer(mut self, scheme_code: &str, date: NaiveDate, answer: StubAnswer) -> Self {
        self.answers.insert((scheme_code.to_string(), date), answer);
        self
    }

    /// Lookups made so far, in call order
    pub fn calls(&self) -> Vec<(String, NaiveDate)> {
        self.calls.lock().expect("stub call log poisoned").clone()
    }
}

impl DomainPort for StubNavPort {}

#[async_trait]
impl NavPort for StubNavPort {
    async fn get_nav(
        &self,
        scheme_code: &SchemeCode,
        date: NaiveDate,
    ) -> Result<NavQuote, PortError> {
        let key = (scheme_code.as_str().to_string(), date);
        self.calls
            .lock()
            .expect("stub call log poisoned")
            .push(key.clone());

        let answer = self
            .answers
            .get(&key)
            .cloned()
            .unwrap_or(StubAnswer::Status(404));

        match answer {
            StubAnswer::Nav(nav) => {
                Ok(NavQuote::new(scheme_code.clone(), date, nav).with_source("stub"))
            }
            StubAnswer::Status(status) => Err(PortError::upstream(
                status,
                format!("Error fetching NAV data. Status code: {status}"),
            )),
            StubAnswer::Malformed => {
                Err(PortError::transformation("response has no data.nav field"))
            }
            StubAnswer::Timeout => Err(PortError::Timeout {
                operation: format!("GET {}/{}", key.0, key.1),
                duration_ms: 10_000,
            }),
        }
    }
}
