//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: use-case wiring (repository + application service)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: HTTP-only request shapes
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with in-memory storage (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with(services::build_services(), config)
}

/// Build the router around an existing service.
pub fn build_app_with(services: services::SharedUserService, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(Extension(services))
                .layer(Extension(Arc::new(config.clone()))),
        )
}
