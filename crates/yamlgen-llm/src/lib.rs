//! yamlgen LLM Integration
//!
//! This crate turns a natural-language deployment requirement into a YAML
//! configuration by calling an external text-generation model:
//! - Client: provider-agnostic request/response types and the [`LLMClient`] trait
//! - Providers: Google Gemini and a mock provider for tests and offline use
//! - Generator: prompt templating, the single upstream call, and YAML validation
//!
//! **Note**: the generator makes exactly one upstream attempt and sets no
//! timeout of its own. Callers that need a deadline must wrap the future.

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{GeminiProvider, MockProvider};

// Re-export generator
pub use generator::{
    validate_yaml, PromptTemplate, YamlGenerator, YamlGeneratorConfig, DEFAULT_PROMPT_TEMPLATE,
};

pub mod client;
pub mod error;
pub mod generator;
pub mod provider;
