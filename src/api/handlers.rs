//! HTTP API handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::Uri, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::clock::{Clock, SystemClock};
use crate::directory::{API_ENDPOINTS, WELCOME_ENDPOINTS};
use crate::error::ApiError;
use crate::{APPLICATION_NAME, APPLICATION_VERSION};

/// OpenAPI tag shared by the status endpoints.
pub const STATUS_TAG: &str = "Status";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source of response timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new app state reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create app state with a specific clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Timestamp for a response being built now.
    pub fn timestamp(&self) -> String {
        self.clock.timestamp()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Welcome response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Service name.
    #[schema(example = "E-Store Management System")]
    pub application: &'static str,
    /// Service version.
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    /// Always "Running".
    #[schema(example = "Running")]
    pub status: &'static str,
    /// Greeting.
    pub message: &'static str,
    /// Local date-time of the response, no offset.
    #[schema(example = "2024-03-09T12:30:45.123")]
    pub timestamp: String,
    /// Endpoint-group name to path prefix.
    #[schema(value_type = Object)]
    pub endpoints: &'static BTreeMap<&'static str, &'static str>,
}

impl WelcomeResponse {
    /// Build the welcome document stamped with `timestamp`.
    pub fn at(timestamp: String) -> Self {
        Self {
            application: APPLICATION_NAME,
            version: APPLICATION_VERSION,
            status: "Running",
            message: "Welcome to LL-CART Backend API",
            timestamp,
            endpoints: &WELCOME_ENDPOINTS,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "UP".
    #[schema(example = "UP")]
    pub status: &'static str,
    /// Service name.
    pub application: &'static str,
    /// Local date-time of the response, no offset.
    pub timestamp: String,
    /// Fixed health message.
    pub message: &'static str,
}

impl HealthResponse {
    /// Build the health document stamped with `timestamp`.
    pub fn at(timestamp: String) -> Self {
        Self {
            status: "UP",
            application: APPLICATION_NAME,
            timestamp,
            message: "Backend service is healthy and running",
        }
    }
}

/// API description response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    /// Service name with an "API" suffix.
    #[schema(example = "E-Store Management System API")]
    pub application: &'static str,
    /// Service version.
    pub version: &'static str,
    /// What the API covers.
    pub description: &'static str,
    /// "<Group> APIs" label to "<prefix> - <summary>".
    #[schema(value_type = Object)]
    pub endpoints: &'static BTreeMap<&'static str, String>,
    /// Local date-time of the response, no offset.
    pub timestamp: String,
}

impl ApiInfoResponse {
    /// Build the API description stamped with `timestamp`.
    pub fn at(timestamp: String) -> Self {
        Self {
            application: "E-Store Management System API",
            version: APPLICATION_VERSION,
            description: "RESTful API for E-Store Management System with features for user \
                          authentication, product management, orders, payments, and delivery tracking",
            endpoints: &API_ENDPOINTS,
            timestamp,
        }
    }
}

/// Welcome handler - service identity and endpoint-group prefixes.
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses((status = 200, description = "Service is running", body = WelcomeResponse))
)]
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse::at(state.timestamp()))
}

/// Health check handler - always returns 200.
///
/// Liveness only: no downstream dependency is consulted.
#[utoipa::path(
    get,
    path = "/health",
    tag = STATUS_TAG,
    responses((status = 200, description = "Process is alive", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::at(state.timestamp()))
}

/// API info handler - describes every endpoint group.
#[utoipa::path(
    get,
    path = "/api",
    tag = STATUS_TAG,
    responses((status = 200, description = "Endpoint-group directory", body = ApiInfoResponse))
)]
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::at(state.timestamp()))
}

/// Fallback for unrouted paths.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
