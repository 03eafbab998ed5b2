//! Lump-sum investment evaluation
//!
//! Given the capital invested on the start date and the NAVs published on the
//! start and end dates, this module derives:
//!
//! - **Units allotted**: `capital / nav_on_purchase`
//! - **Units value**: `units_allotted * nav_on_redemption`
//! - **Net profit**: `units_value - capital`
//! - **Profit**: the compounded figure `capital * (1 + cagr)^years - capital`, where
//!   `cagr = (units_value / capital)^(1 / years) - 1` and `years = days / 365.25`.
//!   Periods under one year are not compounded.
//!
//! Every input that would make the arithmetic undefined (zero or negative
//! capital or NAV, an empty holding period) is rejected with
//! `FundError::InvalidInput` instead of producing an infinite or NaN result. So
//! is a capital too small for its unit count to survive decimal rounding.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::HoldingPeriod;

use crate::error::FundError;
use crate::nav::SchemeCode;

/// A request to evaluate one lump-sum investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub scheme_code: SchemeCode,
    pub period: HoldingPeriod,
    /// Amount invested on the start date
    pub capital: Decimal,
}

impl InvestmentRequest {
    /// Creates a validated investment request
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidInput` if the capital is not positive, the end
    /// date is before the start date, or both dates are the same day
    pub fn new(
        scheme_code: SchemeCode,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capital: Decimal,
    ) -> Result<Self, FundError> {
        ensure_positive("capital", capital)?;
        let period = HoldingPeriod::new(start_date, end_date)?;
        ensure_non_empty(&period)?;

        Ok(Self {
            scheme_code,
            period,
            capital,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end
    }
}

/// The evaluated investment
///
/// Built once by `InvestmentCalculator::evaluate` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub units_allotted: Decimal,
    pub units_value_on_redemption: Decimal,
    pub net_profit: Decimal,
    pub profit: Decimal,
}

/// Pure calculator over a fixed capital and holding period
#[derive(Debug, Clone, Copy)]
pub struct InvestmentCalculator {
    capital: Decimal,
    period: HoldingPeriod,
}

impl InvestmentCalculator {
    /// Creates a calculator
    ///
    /// # Errors
    ///
    /// Returns `FundError::InvalidInput` if `capital` is not positive
    pub fn new(capital: Decimal, period: HoldingPeriod) -> Result<Self, FundError> {
        ensure_positive("capital", capital)?;
        Ok(Self { capital, period })
    }

    pub fn for_request(request: &InvestmentRequest) -> Result<Self, FundError> {
        Self::new(request.capital, request.period)
    }

    /// Units bought with the whole capital at `nav_on_purchase`
    pub fn units_allotted(&self, nav_on_purchase: Decimal) -> Result<Decimal, FundError> {
        ensure_positive("NAV on purchase date", nav_on_purchase)?;
        let units = self
            .capital
            .checked_div(nav_on_purchase)
            .ok_or_else(|| overflow("units allotted"))?;

        if units.is_zero() {
            return Err(FundError::invalid_input(format!(
                "capital {} buys no units at NAV {nav_on_purchase}: \
                 the unit count is below decimal precision",
                self.capital
            )));
        }
        Ok(units)
    }

    /// Value of `units` when redeemed at `nav_on_redemption`
    pub fn units_value(
        &self,
        units: Decimal,
        nav_on_redemption: Decimal,
    ) -> Result<Decimal, FundError> {
        ensure_positive("NAV on redemption date", nav_on_redemption)?;
        let value = units
            .checked_mul(nav_on_redemption)
            .ok_or_else(|| overflow("units value"))?;

        if value.is_zero() && !units.is_zero() {
            return Err(FundError::invalid_input(format!(
                "{units} units at NAV {nav_on_redemption} are worth less than decimal precision"
            )));
        }
        Ok(value)
    }

    /// Straight-line profit, ignoring the time the money was held
    pub fn net_profit(&self, units_value: Decimal) -> Decimal {
        units_value - self.capital
    }

    /// Compound annual growth rate that turns the capital into `final_value`
    ///
    /// A period shorter than one year is not annualized: the rate is the plain
    /// return over the period.
    pub fn cagr(&self, final_value: Decimal) -> Result<Decimal, FundError> {
        ensure_non_empty(&self.period)?;
        ensure_positive("final value", final_value)?;

        let growth = final_value
            .checked_div(self.capital)
            .ok_or_else(|| overflow("growth ratio"))?;
        let years = self.period.years();
        if years < Decimal::ONE {
            return Ok(growth - Decimal::ONE);
        }

        let exponent = Decimal::ONE
            .checked_div(years)
            .ok_or_else(|| overflow("annualization exponent"))?;

        growth
            .checked_powd(exponent)
            .map(|annual| annual - Decimal::ONE)
            .ok_or_else(|| overflow("compound annual growth rate"))
    }

    /// Profit obtained by compounding the capital at the CAGR over the holding period
    ///
    /// `final_value` is the redemption value of the units; the CAGR is derived
    /// from it, so the result agrees with `net_profit` up to rounding in the
    /// fractional powers. For a period shorter than one year, or when the
    /// fractional powers leave the decimal range, compounding is skipped and the
    /// profit is `final_value - capital`.
    pub fn annualized_profit(&self, final_value: Decimal) -> Result<Decimal, FundError> {
        ensure_non_empty(&self.period)?;
        ensure_positive("final value", final_value)?;

        let direct = final_value - self.capital;
        let years = self.period.years();
        if years < Decimal::ONE {
            return Ok(direct);
        }

        let compounded = self
            .cagr(final_value)
            .ok()
            .and_then(|cagr| (Decimal::ONE + cagr).checked_powd(years))
            .and_then(|factor| self.capital.checked_mul(factor));

        match compounded {
            Some(value) => Ok(value - self.capital),
            None => {
                debug!(
                    days = self.period.days(),
                    %final_value,
                    "Compounded value out of range, reporting direct profit"
                );
                Ok(direct)
            }
        }
    }

    /// Evaluates the investment from the two NAVs
    ///
    /// Either every figure is computed or an error is returned.
    pub fn evaluate(
        &self,
        nav_on_purchase: Decimal,
        nav_on_redemption: Decimal,
    ) -> Result<InvestmentResult, FundError> {
        let units_allotted = self.units_allotted(nav_on_purchase)?;
        let units_value_on_redemption = self.units_value(units_allotted, nav_on_redemption)?;
        let net_profit = self.net_profit(units_value_on_redemption);
        let profit = self.annualized_profit(units_value_on_redemption)?;

        Ok(InvestmentResult {
            units_allotted,
            units_value_on_redemption,
            net_profit,
            profit,
        })
    }
}

fn ensure_positive(what: &str, value: Decimal) -> Result<(), FundError> {
    if value <= Decimal::ZERO {
        return Err(FundError::invalid_input(format!(
            "{what} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

fn ensure_non_empty(period: &HoldingPeriod) -> Result<(), FundError> {
    if period.is_empty() {
        return Err(FundError::invalid_input(format!(
            "holding period is empty: start and end date are both {}",
            period.start
        )));
    }
    Ok(())
}

fn overflow(what: &str) -> FundError {
    FundError::Calculation(format!("{what} is out of range"))
}
