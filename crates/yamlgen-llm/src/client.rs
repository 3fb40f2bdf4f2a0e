//! LLM client interface and types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single text-generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    /// Fully rendered prompt text
    pub prompt: String,

    /// Model identifier (e.g., "gemini-pro")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl LLMRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// The generated text, exactly as the model returned it
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Number of tokens used (0 when the provider does not report usage)
    pub tokens_used: u32,

    /// Finish reason (e.g., "STOP", "MAX_TOKENS")
    pub finish_reason: String,
}

impl LLMResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = reason.into();
        self
    }
}

/// Async LLM client trait
///
/// Implementations make one network round-trip per `call` and never retry.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Submit a request and return the model's text
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Short client name, used in logs
    fn name(&self) -> &str;
}
