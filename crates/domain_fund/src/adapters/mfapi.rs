//! mfapi.in NAV Adapter
//!
//! Implements `NavPort` over the public mfapi REST service. Each scheme's feed
//! lives at `{base_url}/{scheme_code}` and the NAV for a date at
//! `{base_url}/{scheme_code}/{date}`, answering with:
//!
//! ```json
//! { "data": { "nav": "45.6712", "date": "02-01-2023" } }
//! ```
//!
//! The NAV may be a JSON number or a numeric string.
//!
//! # Error Handling
//!
//! Provider errors are mapped to `PortError` variants:
//! - non-200 status -> `PortError::Upstream` (status preserved)
//! - body not JSON, or no numeric `data.nav` -> `PortError::Transformation`
//! - request exceeded the configured timeout -> `PortError::Timeout`
//! - other transport failures -> `PortError::Connection`
//!
//! Nothing is retried or cached.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use core_kernel::{DomainPort, PortError};

use crate::nav::{NavQuote, SchemeCode};
use crate::ports::NavPort;

pub const DEFAULT_BASE_URL: &str = "https://api.mfapi.in/mf";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const SOURCE: &str = "mfapi";

/// Configuration for the mfapi adapter
#[derive(Debug, Clone)]
pub struct MfApiConfig {
    /// Root of the scheme feeds (e.g., "https://api.mfapi.in/mf")
    pub base_url: String,
    /// Upper bound on a single NAV request, connection included
    pub timeout_ms: u64,
    /// strftime pattern used to render the date path segment
    pub date_format: String,
}

impl Default for MfApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// NAV adapter backed by the mfapi REST service
#[derive(Debug, Clone)]
pub struct MfApiAdapter {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
    date_format: String,
}

impl MfApiAdapter {
    /// Creates an adapter with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns `PortError::Validation` if the base URL or date format is invalid,
    /// and `PortError::Internal` if the HTTP client cannot be built
    pub fn new(config: MfApiConfig) -> Result<Self, PortError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PortError::validation_field(format!("invalid NAV API base URL: {e}"), "base_url")
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PortError::validation_field(
                "NAV API base URL cannot carry a path",
                "base_url",
            ));
        }

        if StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(PortError::validation_field(
                format!("invalid date format: {}", config.date_format),
                "date_format",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to create HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url,
            timeout_ms: config.timeout_ms,
            date_format: config.date_format,
        })
    }

    /// URL of the NAV feed for one scheme
    pub fn scheme_url(&self, scheme_code: &SchemeCode) -> Result<Url, PortError> {
        append_segment(&self.base_url, scheme_code.as_str())
    }

    /// Fetches the NAV published at `{base_url}/{date}`
    pub async fn fetch_nav(&self, base_url: &Url, date: &str) -> Result<Decimal, PortError> {
        let url = append_segment(base_url, date)?;
        debug!(%url, "Fetching NAV");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PortError::upstream(
                status.as_u16(),
                format!("Error fetching NAV data. Status code: {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        parse_nav(&body)
    }

    fn transport_error(&self, url: &Url, err: reqwest::Error) -> PortError {
        if err.is_timeout() {
            PortError::Timeout {
                operation: format!("GET {url}"),
                duration_ms: self.timeout_ms,
            }
        } else {
            PortError::Connection {
                message: format!("GET {url} failed"),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl DomainPort for MfApiAdapter {}

#[async_trait]
impl NavPort for MfApiAdapter {
    async fn get_nav(
        &self,
        scheme_code: &SchemeCode,
        date: NaiveDate,
    ) -> Result<NavQuote, PortError> {
        let scheme_url = self.scheme_url(scheme_code)?;
        let date_segment = date.format(&self.date_format).to_string();
        let value = self.fetch_nav(&scheme_url, &date_segment).await?;

        Ok(NavQuote::new(scheme_code.clone(), date, value).with_source(SOURCE))
    }
}

fn append_segment(base: &Url, segment: &str) -> Result<Url, PortError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| PortError::validation("NAV API URL cannot carry a path"))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Extracts `data.nav` from a provider response body
pub fn parse_nav(body: &str) -> Result<Decimal, PortError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| PortError::transformation(format!("response is not valid JSON: {e}")))?;

    let nav = json
        .get("data")
        .and_then(|data| data.get("nav"))
        .ok_or_else(|| PortError::transformation("response has no data.nav field"))?;

    let parsed = match nav {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
        }
        Value::String(s) => Decimal::from_str(s.trim()),
        other => {
            return Err(PortError::transformation(format!(
                "data.nav is not numeric: {other}"
            )))
        }
    };

    parsed.map_err(|e| PortError::transformation(format!("data.nav is not a valid number: {e}")))
}
