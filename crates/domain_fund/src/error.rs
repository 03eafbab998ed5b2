//! Fund domain errors

use core_kernel::{PortError, TemporalError};
use thiserror::Error;

/// Errors that can occur while evaluating an investment
#[derive(Debug, Error)]
pub enum FundError {
    /// Degenerate inputs that would make the arithmetic undefined
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The NAV provider answered with a non-success status
    #[error("{message}")]
    UpstreamFetch { status: u16, message: String },

    /// The NAV provider answered, but not with a usable NAV
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl FundError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FundError::InvalidInput(message.into())
    }
}

impl From<PortError> for FundError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Upstream { status, message } => FundError::UpstreamFetch { status, message },
            PortError::Transformation { message } => FundError::MalformedUpstreamResponse(message),
            PortError::Validation { message, .. } => FundError::InvalidInput(message),
            err @ PortError::Timeout { .. } => FundError::UpstreamTimeout(err.to_string()),
            err @ (PortError::Connection { .. } | PortError::Internal { .. }) => {
                FundError::UpstreamUnavailable(err.to_string())
            }
        }
    }
}

impl From<TemporalError> for FundError {
    fn from(err: TemporalError) -> Self {
        FundError::InvalidInput(err.to_string())
    }
}
