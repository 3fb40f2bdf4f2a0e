//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::auth::TokenVerifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use yamlgen_llm::YamlGenerator;
use yamlgen_repository::ConfigurationStore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<YamlGenerator>,
    pub store: Arc<dyn ConfigurationStore>,
    pub verifier: Arc<dyn TokenVerifier>,
    /// Deadline for one generation; `None` waits indefinitely
    pub generation_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(
        generator: Arc<YamlGenerator>,
        store: Arc<dyn ConfigurationStore>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            generator,
            store,
            verifier,
            generation_timeout: None,
        }
    }

    pub fn with_generation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.generation_timeout = timeout;
        self
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Generation request payload
#[derive(Debug, Deserialize)]
pub struct GenerateRequestPayload {
    /// Free-text requirements; missing and blank are both rejected
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Generation response payload
#[derive(Debug, Serialize)]
pub struct GenerateResponsePayload {
    pub yaml: String,
}

/// Save request payload
#[derive(Debug, Deserialize)]
pub struct SaveRequestPayload {
    pub yaml: String,
    pub name: String,
}
