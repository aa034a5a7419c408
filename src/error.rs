//! Unified error types for the backend service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for process startup and serving.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("no endpoint at {path}")]
    NotFound {
        /// Requested path.
        path: String,
    },
}

/// JSON body for [`ApiError`] responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error.
    pub error: String,
    /// Requested path.
    pub path: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        match self {
            ApiError::NotFound { path } => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error, path })).into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
