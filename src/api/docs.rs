//! OpenAPI document for the status endpoints.

use utoipa::OpenApi;

use super::handlers::{self, ApiInfoResponse, HealthResponse, WelcomeResponse, STATUS_TAG};

/// Path the OpenAPI JSON is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
/// Path Swagger UI is mounted at.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "E-Store Management System", version = "1.0.0"),
    paths(handlers::welcome, handlers::health, handlers::api_info),
    components(schemas(WelcomeResponse, HealthResponse, ApiInfoResponse)),
    tags((name = STATUS_TAG, description = "Service identity, liveness and endpoint directory"))
)]
pub struct ApiDoc;

/// Pretty-printed OpenAPI document.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
