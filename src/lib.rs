//! E-Store Management System backend: status and service-directory endpoints.
//!
//! The service answers three unauthenticated `GET` requests with fixed-shape
//! JSON documents:
//!
//! ```text
//! GET /        welcome banner + endpoint-group prefixes
//! GET /health  liveness probe
//! GET /api     endpoint-group descriptions
//! ```
//!
//! The catalog, cart, order and payment modules live elsewhere; this crate
//! only knows the path prefixes they are mounted under.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`directory`]: Static endpoint-group directory
//! - [`clock`]: Wall-clock source for response timestamps
//! - [`api`]: HTTP handlers, router and OpenAPI document
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};

/// Service name reported by every endpoint.
pub const APPLICATION_NAME: &str = "E-Store Management System";

/// Service version reported by `/` and `/api`.
pub const APPLICATION_VERSION: &str = "1.0.0";
