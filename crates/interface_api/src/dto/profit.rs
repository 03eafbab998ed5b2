//! Profit DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_fund::{InvestmentRequest, InvestmentResult, SchemeCode};

use crate::error::ApiError;

/// Date format accepted for `start_date` and `end_date`
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters of `GET /profit`
///
/// Dates are kept as sent so the response can echo them back unmodified.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfitQuery {
    pub scheme_code: String,
    pub start_date: String,
    pub end_date: String,
    pub capital: Decimal,
}

impl ProfitQuery {
    /// Converts the raw query into a validated domain request
    pub fn to_request(&self) -> Result<InvestmentRequest, ApiError> {
        let scheme_code = SchemeCode::new(self.scheme_code.clone())?;
        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;

        Ok(InvestmentRequest::new(scheme_code, start_date, end_date, self.capital)?)
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT).map_err(|e| {
        ApiError::BadRequest(format!(
            "{field} must be a date formatted as YYYY-MM-DD, got '{value}': {e}"
        ))
    })
}

/// Body of a successful `GET /profit`
#[derive(Debug, Serialize)]
pub struct ProfitResponse {
    pub scheme_code: String,
    pub start_date: String,
    pub end_date: String,
    pub initial_investment: Decimal,
    pub units_allotted: Decimal,
    pub units_value_on_redemption: Decimal,
    pub net_profit: Decimal,
    pub profit: Decimal,
}

impl ProfitResponse {
    pub fn new(query: ProfitQuery, result: InvestmentResult) -> Self {
        Self {
            scheme_code: query.scheme_code,
            start_date: query.start_date,
            end_date: query.end_date,
            initial_investment: query.capital,
            units_allotted: result.units_allotted,
            units_value_on_redemption: result.units_value_on_redemption,
            net_profit: result.net_profit,
            profit: result.profit,
        }
    }
}
