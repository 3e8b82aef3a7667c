//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring and the pre-built request pipelines
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request body DTOs that differ from the pipeline requests
//! - `errors.rs`: problem-details error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with freshly seeded stores (used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_services(Arc::new(services::build_services()))
}

/// Build the router around existing services (tests inject unseeded stores).
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
}
