//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Routes served by [`create_router`], for startup logging
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("POST", "/api/yaml/generate"),
    ("POST", "/api/yaml/save"),
    ("GET", "/api/yaml/configurations"),
    ("GET", "/api/yaml/templates"),
];

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/yaml/generate", post(generate))
        .route("/api/yaml/save", post(save_configuration))
        .route("/api/yaml/configurations", get(list_configurations))
        .route("/api/yaml/templates", get(list_templates))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
