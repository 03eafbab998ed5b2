//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the hexagonal architecture
//! (ports and adapters) used by the domain crates.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! │                 (ProfitService / HTTP API)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │                       (NavPort)                              │
//! │   Defined in each domain, depend only on core_kernel         │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │   Test Adapter    │     │ External Adapter │
//!         │  (in-memory stub) │     │  (REST API to    │
//!         │                   │     │   NAV provider)  │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! // In domain_fund/src/ports.rs
//! #[async_trait]
//! pub trait NavPort: DomainPort {
//!     async fn get_nav(&self, scheme: &SchemeCode, date: NaiveDate)
//!         -> Result<NavQuote, PortError>;
//! }
//!
//! // In domain_fund/src/adapters/mfapi.rs
//! impl NavPort for MfApiAdapter { ... }
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The external system answered with a non-success HTTP status
    #[error("Upstream returned status {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The external payload could not be translated into a domain value
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates an Upstream error from a status code
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        PortError::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl fmt::Display) -> Self {
        PortError::Transformation {
            message: message.to_string(),
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_upstream() {
        let error = PortError::upstream(404, "scheme not found");
        assert!(error.to_string().contains("404"));
        assert!(error.to_string().contains("scheme not found"));
    }

    #[test]
    fn test_transformation_takes_display() {
        let error = PortError::transformation(format_args!("missing {}", "data.nav"));
        assert_eq!(error.to_string(), "Transformation error: missing data.nav");
    }

    #[test]
    fn test_validation_field() {
        match PortError::validation_field("must not be empty", "scheme_code") {
            PortError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("scheme_code"))
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}
