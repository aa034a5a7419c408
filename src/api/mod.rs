//! HTTP API module for the welcome, health and API-directory endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{create_router, create_router_with, RouterOptions};
