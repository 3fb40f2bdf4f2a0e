//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::{AuthenticatedOwner, JsonExtractor};
use super::types::*;
use crate::error::ServerError;
use crate::templates::{self, Template};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};
use yamlgen_repository::Configuration;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generate YAML from free-text requirements
#[axum::debug_handler]
pub(super) async fn generate(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<GenerateRequestPayload>,
) -> Result<Json<GenerateResponsePayload>, ServerError> {
    let prompt = payload
        .prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("Prompt is required".to_string()))?;

    info!("Received generation request ({} chars)", prompt.len());

    let generation = state.generator.generate(&prompt);
    let yaml = match state.generation_timeout {
        Some(limit) => tokio::time::timeout(limit, generation).await.map_err(|_| {
            warn!("Generation timed out after {:?}", limit);
            ServerError::upstream(
                "Error generating YAML",
                format!("model call timed out after {}s", limit.as_secs_f64()),
            )
        })??,
        None => generation.await?,
    };

    debug!("Generated {} bytes of YAML", yaml.len());
    Ok(Json(GenerateResponsePayload { yaml }))
}

/// Persist a configuration for the authenticated owner
#[axum::debug_handler]
pub(super) async fn save_configuration(
    State(state): State<AppState>,
    AuthenticatedOwner(owner_id): AuthenticatedOwner,
    JsonExtractor(payload): JsonExtractor<SaveRequestPayload>,
) -> Result<(StatusCode, Json<Configuration>), ServerError> {
    if payload.yaml.trim().is_empty() {
        return Err(ServerError::InvalidRequest("yaml must not be empty".to_string()));
    }

    let saved = state
        .store
        .save(&owner_id, &payload.name, &payload.yaml)
        .await?;

    info!(
        "Saved configuration {} ('{}') for owner {}",
        saved.id, saved.name, owner_id
    );
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List the authenticated owner's configurations
pub(super) async fn list_configurations(
    State(state): State<AppState>,
    AuthenticatedOwner(owner_id): AuthenticatedOwner,
) -> Result<Json<Vec<Configuration>>, ServerError> {
    let configurations = state.store.list_by_owner(&owner_id).await?;
    debug!(
        "Listing {} configurations for owner {}",
        configurations.len(),
        owner_id
    );
    Ok(Json(configurations))
}

/// Built-in starter templates
pub(super) async fn list_templates() -> Json<&'static [Template]> {
    Json(templates::all())
}
