//! Integration tests for the status endpoints.
//!
//! Each test drives the full router, including the metrics, CORS and trace
//! layers, through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::{json, Value};
use tower::ServiceExt;

use estore_backend::api::{create_router, AppState};
use estore_backend::clock::{parse_timestamp, FixedClock};

/// Router whose clock is frozen at 2024-06-01T09:15:30.250.
fn frozen_router() -> Router {
    let at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_milli_opt(9, 15, 30, 250)
        .unwrap();
    create_router(AppState::with_clock(FixedClock(at)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn welcome_reports_identity_and_prefixes() {
    let (status, body) = get(frozen_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "application": "E-Store Management System",
            "version": "1.0.0",
            "status": "Running",
            "message": "Welcome to LL-CART Backend API",
            "timestamp": "2024-06-01T09:15:30.250",
            "endpoints": {
                "health": "/health",
                "api_docs": "/api",
                "admin": "/admin/*",
                "buyer": "/buyer/*",
                "seller": "/seller/*",
                "products": "/products/*",
                "orders": "/orders/*",
                "cart": "/cart/*",
                "payments": "/payments/*"
            }
        })
    );
}

#[tokio::test]
async fn welcome_does_not_list_address() {
    let (_, body) = get(frozen_router(), "/").await;

    assert!(body["endpoints"].get("address").is_none());
}

#[tokio::test]
async fn health_is_a_liveness_probe() {
    let (status, body) = get(frozen_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "UP",
            "application": "E-Store Management System",
            "timestamp": "2024-06-01T09:15:30.250",
            "message": "Backend service is healthy and running"
        })
    );
}

#[tokio::test]
async fn api_info_describes_every_group() {
    let (status, body) = get(frozen_router(), "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"], "E-Store Management System API");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["description"]
        .as_str()
        .unwrap()
        .starts_with("RESTful API for E-Store Management System"));

    let endpoints = body["endpoints"].as_object().unwrap();
    assert_eq!(endpoints.len(), 8);

    let pattern = Regex::new(r"^/[a-z]+/\* - .+$").unwrap();
    for (label, value) in endpoints {
        assert!(label.ends_with(" APIs"), "unexpected label {label}");
        let value = value.as_str().unwrap();
        assert!(pattern.is_match(value), "unexpected description {value}");
    }

    assert_eq!(
        endpoints["Address APIs"],
        "/address/* - Address management endpoints"
    );
    assert_eq!(
        endpoints["Payment APIs"],
        "/payments/* - Payment processing endpoints"
    );
}

#[tokio::test]
async fn repeated_calls_with_frozen_clock_are_identical() {
    let app = frozen_router();

    for uri in ["/", "/health", "/api"] {
        let (_, first) = get(app.clone(), uri).await;
        for _ in 0..3 {
            let (_, again) = get(app.clone(), uri).await;
            assert_eq!(first, again);
        }
    }
}

#[tokio::test]
async fn system_clock_timestamps_parse_without_offset() {
    let app = create_router(AppState::new());

    for uri in ["/", "/health", "/api"] {
        let (_, body) = get(app.clone(), uri).await;
        let ts = body["timestamp"].as_str().unwrap();

        assert!(!ts.ends_with('Z'), "offset suffix in {ts}");
        assert!(!ts.contains('+'), "offset suffix in {ts}");
        assert!(parse_timestamp(ts).is_ok(), "unparseable {ts}");
    }
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let (status, body) = get(frozen_router(), "/health?verbose=true").await;
    let (_, plain) = get(frozen_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, plain);
}
