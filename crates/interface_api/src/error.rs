//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_fund::FundError;

/// API error types
///
/// The display text is the human-readable `detail` of the error response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    /// The NAV provider refused the lookup; its status is passed through
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Validation(_) => "validation_error",
            ApiError::Upstream { .. } => "upstream_fetch_error",
            ApiError::BadGateway(_) => "bad_gateway",
            ApiError::GatewayTimeout(_) => "gateway_timeout",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.error_type().to_string(),
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<FundError> for ApiError {
    fn from(err: FundError) -> Self {
        match err {
            FundError::InvalidInput(_) => ApiError::Validation(err.to_string()),
            FundError::UpstreamFetch { status, message } => ApiError::Upstream { status, message },
            FundError::MalformedUpstreamResponse(_) | FundError::UpstreamUnavailable(_) => {
                ApiError::BadGateway(err.to_string())
            }
            FundError::UpstreamTimeout(_) => ApiError::GatewayTimeout(err.to_string()),
            FundError::Calculation(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_passes_through() {
        let err = ApiError::from(FundError::UpstreamFetch {
            status: 404,
            message: "Error fetching NAV data. Status code: 404".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error fetching NAV data. Status code: 404");
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        let err = ApiError::Upstream {
            status: 204,
            message: "Error fetching NAV data. Status code: 204".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_fund_error_mapping() {
        let cases = [
            (FundError::invalid_input("capital"), StatusCode::UNPROCESSABLE_ENTITY),
            (FundError::MalformedUpstreamResponse("no nav".into()), StatusCode::BAD_GATEWAY),
            (FundError::UpstreamUnavailable("refused".into()), StatusCode::BAD_GATEWAY),
            (FundError::UpstreamTimeout("GET".into()), StatusCode::GATEWAY_TIMEOUT),
            (FundError::Calculation("overflow".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (fund_error, expected) in cases {
            assert_eq!(ApiError::from(fund_error).status(), expected);
        }
    }
}
