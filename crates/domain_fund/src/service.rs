//! Profit evaluation service
//!
//! Orchestrates one evaluation: validate the request, look up the NAV on the
//! start and end dates through a `NavPort`, and hand both to the calculator.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::FundError;
use crate::investment::{InvestmentCalculator, InvestmentRequest, InvestmentResult};
use crate::nav::{NavQuote, SchemeCode};
use crate::ports::NavPort;

/// How the two NAV lookups of an evaluation are issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Both lookups in flight at once; the first failure wins and the other
    /// lookup is dropped
    #[default]
    Concurrent,
    /// Purchase NAV first; the redemption NAV is only requested if that succeeded
    Sequential,
}

/// Service for evaluating lump-sum investments against live NAV data
///
/// One instance is created per process and shared between requests. It holds
/// no mutable state.
pub struct ProfitService {
    nav_port: Arc<dyn NavPort>,
    fetch_mode: FetchMode,
}

impl ProfitService {
    /// Creates a service that fetches both NAVs concurrently
    pub fn new(nav_port: Arc<dyn NavPort>) -> Self {
        Self {
            nav_port,
            fetch_mode: FetchMode::default(),
        }
    }

    pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    /// Evaluates an investment
    ///
    /// The request is validated before any NAV is fetched, so degenerate input
    /// never reaches the provider.
    ///
    /// # Errors
    ///
    /// - `FundError::InvalidInput` for non-positive capital or NAV, or an empty period
    /// - `FundError::UpstreamFetch` carrying the provider's status code
    /// - `FundError::MalformedUpstreamResponse` if the provider sent no usable NAV
    /// - `FundError::UpstreamTimeout` / `FundError::UpstreamUnavailable` on transport failures
    pub async fn evaluate(
        &self,
        request: &InvestmentRequest,
    ) -> Result<InvestmentResult, FundError> {
        let calculator = InvestmentCalculator::for_request(request)?;

        let (purchase, redemption) = self.fetch_navs(request).await?;

        debug!(
            scheme_code = %request.scheme_code,
            nav_on_purchase = %purchase.value,
            nav_on_redemption = %redemption.value,
            "NAVs fetched"
        );

        let result = calculator.evaluate(purchase.value, redemption.value)?;

        info!(
            scheme_code = %request.scheme_code,
            start_date = %request.start_date(),
            end_date = %request.end_date(),
            net_profit = %result.net_profit,
            "Investment evaluated"
        );

        Ok(result)
    }

    async fn fetch_navs(
        &self,
        request: &InvestmentRequest,
    ) -> Result<(NavQuote, NavQuote), FundError> {
        let scheme_code = &request.scheme_code;
        let (start, end) = (request.start_date(), request.end_date());

        match self.fetch_mode {
            FetchMode::Concurrent => {
                tokio::try_join!(self.fetch(scheme_code, start), self.fetch(scheme_code, end))
            }
            FetchMode::Sequential => {
                let purchase = self.fetch(scheme_code, start).await?;
                let redemption = self.fetch(scheme_code, end).await?;
                Ok((purchase, redemption))
            }
        }
    }

    async fn fetch(
        &self,
        scheme_code: &SchemeCode,
        date: NaiveDate,
    ) -> Result<NavQuote, FundError> {
        self.nav_port
            .get_nav(scheme_code, date)
            .await
            .map_err(|err| {
                warn!(%scheme_code, %date, error = %err, "NAV lookup failed");
                FundError::from(err)
            })
    }
}
