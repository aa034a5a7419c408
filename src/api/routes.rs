//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use super::handlers::{api_info, health, not_found, welcome, AppState};
use crate::config::Config;
use crate::directory::{API_INFO_PATH, HEALTH_PATH};
use crate::metrics::track_requests;

/// Which optional layers to mount on the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Serve Swagger UI and the OpenAPI document.
    pub swagger: bool,
    /// Permissive CORS.
    pub cors: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            swagger: true,
            cors: true,
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            swagger: config.enable_swagger,
            cors: config.cors_permissive,
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    create_router_with(state, RouterOptions::default())
}

/// Create the API router with explicit options.
pub fn create_router_with(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/", get(welcome))
        .route(HEALTH_PATH, get(health))
        .route(API_INFO_PATH, get(api_info))
        .fallback(not_found)
        .layer(middleware::from_fn(track_requests))
        .with_state(state);

    if options.swagger {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    if options.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

/// Create a minimal health-only router (for startup).
pub fn health_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .with_state(AppState::new())
}
