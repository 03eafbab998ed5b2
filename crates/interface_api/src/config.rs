//! API configuration

use serde::Deserialize;

use domain_fund::adapters::mfapi::{DEFAULT_BASE_URL, DEFAULT_DATE_FORMAT, DEFAULT_TIMEOUT_MS};
use domain_fund::{FetchMode, MfApiConfig};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Root URL of the NAV provider's scheme feeds
    pub nav_api_base_url: String,
    /// strftime pattern for the date path segment sent to the provider
    pub nav_date_format: String,
    /// Timeout for a single NAV request in milliseconds
    pub upstream_timeout_ms: u64,
    /// Fetch the purchase and redemption NAVs at the same time
    pub concurrent_fetch: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            nav_api_base_url: DEFAULT_BASE_URL.to_string(),
            nav_date_format: DEFAULT_DATE_FORMAT.to_string(),
            upstream_timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrent_fetch: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a set variable does not parse into its field
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("nav_api_base_url", defaults.nav_api_base_url)?
            .set_default("nav_date_format", defaults.nav_date_format)?
            .set_default("upstream_timeout_ms", defaults.upstream_timeout_ms)?
            .set_default("concurrent_fetch", defaults.concurrent_fetch)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the NAV provider adapter
    pub fn mfapi_config(&self) -> MfApiConfig {
        MfApiConfig {
            base_url: self.nav_api_base_url.clone(),
            timeout_ms: self.upstream_timeout_ms,
            date_format: self.nav_date_format.clone(),
        }
    }

    pub fn fetch_mode(&self) -> FetchMode {
        if self.concurrent_fetch {
            FetchMode::Concurrent
        } else {
            FetchMode::Sequential
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();

        assert_eq!(config.server_addr(), "127.0.0.1:8000");
        assert_eq!(config.fetch_mode(), FetchMode::Concurrent);
        assert_eq!(config.mfapi_config().base_url, "https://api.mfapi.in/mf");
        assert_eq!(config.mfapi_config().timeout_ms, 10_000);
    }

    #[test]
    fn test_sequential_fetch_mode() {
        let config = ApiConfig {
            concurrent_fetch: false,
            ..Default::default()
        };
        assert_eq!(config.fetch_mode(), FetchMode::Sequential);
    }

    #[test]
    fn test_unparsable_variable_is_an_error() {
        std::env::set_var("API_UPSTREAM_TIMEOUT_MS", "abc");
        std::env::set_var("API_NAV_API_BASE_URL", "http://127.0.0.1:9/mf");
        let result = ApiConfig::from_env();
        std::env::remove_var("API_UPSTREAM_TIMEOUT_MS");
        std::env::remove_var("API_NAV_API_BASE_URL");

        assert!(result.is_err());
    }
}
