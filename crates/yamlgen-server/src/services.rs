//! Service wiring
//!
//! Turns a validated [`ServerConfig`] into the shared [`AppState`]: the
//! model client, the YAML generator, the configuration store and the token
//! verifier.

use crate::api::rest::AppState;
use crate::auth::JwtAuthenticator;
use crate::config::{LlmProviderKind, ServerConfig};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use yamlgen_llm::{GeminiProvider, LLMClient, MockProvider, YamlGenerator, YamlGeneratorConfig};
use yamlgen_repository::InMemoryConfigurationStore;

/// Build the model client selected by `llm.provider`
pub fn build_llm_client(config: &ServerConfig) -> Result<Arc<dyn LLMClient>> {
    let client: Arc<dyn LLMClient> = match config.llm.provider {
        LlmProviderKind::Gemini => {
            let api_key = config
                .llm
                .api_key
                .clone()
                .context("Gemini provider selected but no API key configured")?;
            let mut provider = GeminiProvider::new(api_key);
            if let Some(base_url) = &config.llm.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            info!("Using Gemini provider at {}", provider.base_url());
            Arc::new(provider)
        }
        LlmProviderKind::Mock => {
            info!("Using mock LLM provider");
            let provider = match &config.llm.mock_response {
                Some(response) => MockProvider::with_response(response.clone()),
                None => MockProvider::new(),
            };
            Arc::new(provider)
        }
    };

    Ok(client)
}

/// Build the generator with the configured model and template
pub fn build_generator(config: &ServerConfig, client: Arc<dyn LLMClient>) -> Result<YamlGenerator> {
    let template = config.generation.prompt_template()?;

    let mut generator_config = YamlGeneratorConfig::new(config.llm.model.clone()).with_template(template);
    if let Some(max_tokens) = config.llm.max_tokens {
        generator_config = generator_config.with_max_tokens(max_tokens);
    }
    if let Some(temperature) = config.llm.temperature {
        generator_config = generator_config.with_temperature(temperature);
    }

    Ok(YamlGenerator::new(client, generator_config))
}

/// Assemble everything the HTTP layer needs
pub fn build_state(config: &ServerConfig) -> Result<AppState> {
    config.validate()?;

    let client = build_llm_client(config)?;
    let generator = build_generator(config, client)?;
    info!("YAML generator ready (model: {})", generator.config().model);

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .context("JWT secret not configured")?;
    let verifier = JwtAuthenticator::new(secret.as_bytes());

    let store = InMemoryConfigurationStore::new();

    Ok(AppState::new(
        Arc::new(generator),
        Arc::new(store),
        Arc::new(verifier),
    )
    .with_generation_timeout(config.generation.timeout()))
}
