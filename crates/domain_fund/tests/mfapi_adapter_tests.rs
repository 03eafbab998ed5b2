//! Tests for the mfapi adapter against an in-process NAV provider

use std::time::Duration;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;
use tokio::net::TcpListener;

use core_kernel::PortError;
use domain_fund::adapters::{MfApiAdapter, MfApiConfig};
use domain_fund::nav::SchemeCode;
use domain_fund::ports::NavPort;

fn nav_body(body: serde_json::Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

async fn nav_feed(Path((scheme, date)): Path<(String, String)>) -> Response {
    if scheme != "119551" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "unknown scheme").into_response();
    }

    match date.as_str() {
        "2023-01-02" => nav_body(json!({"data": {"date": "02-01-2023", "nav": 45.6712}})),
        "2024-01-01" => nav_body(json!({"data": {"date": "01-01-2024", "nav": "52.1050"}})),
        "02-01-2023" => nav_body(json!({"data": {"nav": "45.6712"}})),
        "2023-06-30" => nav_body(json!({"data": {"date": "30-06-2023"}})),
        "2023-07-03" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "2023-08-01" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            nav_body(json!({"data": {"nav": 1}}))
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"status": "NOT_FOUND"}))).into_response(),
    }
}

async fn spawn_provider() -> String {
    let app = Router::new().route("/mf/:scheme/:date", get(nav_feed));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/mf")
}

async fn adapter(config: MfApiConfig) -> MfApiAdapter {
    let base_url = spawn_provider().await;
    MfApiAdapter::new(MfApiConfig { base_url, ..config }).unwrap()
}

fn scheme() -> SchemeCode {
    SchemeCode::new("119551").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_numeric_nav() {
    let adapter = adapter(MfApiConfig::default()).await;

    let quote = adapter.get_nav(&scheme(), date(2023, 1, 2)).await.unwrap();

    assert_eq!(quote.value, dec!(45.6712));
    assert_eq!(quote.nav_date, date(2023, 1, 2));
    assert_eq!(quote.scheme_code, scheme());
    assert_eq!(quote.source.as_deref(), Some("mfapi"));
}

#[tokio::test]
async fn test_string_nav() {
    let adapter = adapter(MfApiConfig::default()).await;

    let quote = adapter.get_nav(&scheme(), date(2024, 1, 1)).await.unwrap();

    assert_eq!(quote.value, dec!(52.105));
}

#[tokio::test]
async fn test_fetch_nav_by_base_url_and_date() {
    let adapter = adapter(MfApiConfig::default()).await;
    let scheme_url = adapter.scheme_url(&scheme()).unwrap();

    let nav = adapter.fetch_nav(&scheme_url, "2023-01-02").await.unwrap();

    assert_eq!(nav, dec!(45.6712));
}

#[tokio::test]
async fn test_configured_date_format() {
    let adapter = adapter(MfApiConfig {
        date_format: "%d-%m-%Y".to_string(),
        ..Default::default()
    })
    .await;

    let quote = adapter.get_nav(&scheme(), date(2023, 1, 2)).await.unwrap();

    assert_eq!(quote.value, dec!(45.6712));
}

#[tokio::test]
async fn test_not_found_keeps_status() {
    let adapter = adapter(MfApiConfig::default()).await;

    let err = adapter.get_nav(&scheme(), date(1999, 1, 1)).await.unwrap_err();

    match err {
        PortError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Error fetching NAV data. Status code: 404");
        }
        other => panic!("Expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let adapter = adapter(MfApiConfig::default()).await;
    let unknown = SchemeCode::new("000000").unwrap();

    let err = adapter.get_nav(&unknown, date(2023, 1, 2)).await.unwrap_err();

    assert!(matches!(err, PortError::Upstream { status: 500, .. }));
    assert!(err.to_string().contains("Status code: 500"));
}

#[tokio::test]
async fn test_missing_nav_field_is_transformation_error() {
    let adapter = adapter(MfApiConfig::default()).await;

    let err = adapter.get_nav(&scheme(), date(2023, 6, 30)).await.unwrap_err();

    assert!(matches!(err, PortError::Transformation { .. }));
}

#[tokio::test]
async fn test_non_json_body_is_transformation_error() {
    let adapter = adapter(MfApiConfig::default()).await;

    let err = adapter.get_nav(&scheme(), date(2023, 7, 3)).await.unwrap_err();

    assert!(matches!(err, PortError::Transformation { .. }));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let adapter = adapter(MfApiConfig {
        timeout_ms: 100,
        ..Default::default()
    })
    .await;

    let err = adapter.get_nav(&scheme(), date(2023, 8, 1)).await.unwrap_err();

    assert!(matches!(err, PortError::Timeout { duration_ms: 100, .. }));
}

#[tokio::test]
async fn test_unreachable_provider_is_connection_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let adapter = MfApiAdapter::new(MfApiConfig {
        base_url: format!("http://{addr}/mf"),
        ..Default::default()
    })
    .unwrap();

    let err = adapter.get_nav(&scheme(), date(2023, 1, 2)).await.unwrap_err();

    assert!(matches!(err, PortError::Connection { .. }));
}
