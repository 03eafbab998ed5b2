//! HTTP API Layer
//!
//! This crate provides the REST API for the mutual fund profit service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `GET /profit` and `GET /health`
//! - **Middleware**: Request ids, tracing, access logging
//! - **DTOs**: Query and response shapes
//! - **Error Handling**: Domain errors mapped to distinct HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{build_service, create_router};
//!
//! let service = build_service(&config)?;
//! let app = create_router(Arc::new(service));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::PortError;
use domain_fund::{MfApiAdapter, ProfitService};

use crate::config::ApiConfig;
use crate::handlers::{health, profit};
use crate::middleware::access_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProfitService>,
}

/// Builds the profit service backed by the configured NAV provider
///
/// # Errors
///
/// Returns error if the provider URL or date format is invalid
pub fn build_service(config: &ApiConfig) -> Result<ProfitService, PortError> {
    let adapter = MfApiAdapter::new(config.mfapi_config())?;
    Ok(ProfitService::new(Arc::new(adapter)).with_fetch_mode(config.fetch_mode()))
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Profit service shared by all requests
pub fn create_router(service: Arc<ProfitService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/profit", get(profit::calculate_profit))
        .route("/health", get(health::health_check))
        .layer(axum_middleware::from_fn(access_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
