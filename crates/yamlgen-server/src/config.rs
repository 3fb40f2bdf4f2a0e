//! Server configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use yamlgen_llm::PromptTemplate;

/// Configuration problems detected before the server starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("llm.api_key (or GEMINI_API_KEY) is required for the gemini provider")]
    MissingApiKey,

    #[error("auth.jwt_secret (or JWT_SECRET) is required")]
    MissingJwtSecret,

    #[error("invalid prompt template: {0}")]
    InvalidTemplate(String),
}

/// Which upstream model client to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    /// Google Generative Language API
    #[default]
    Gemini,
    /// Canned responses, for offline development
    Mock,
}

/// Upstream model settings
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: LlmProviderKind,

    #[serde(default = "default_model")]
    pub model: String,

    /// Provider credential; never has a default
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for the provider endpoint
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Answer returned by the mock provider
    #[serde(default)]
    pub mock_response: Option<String>,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::default(),
            model: default_model(),
            api_key: None,
            base_url: None,
            max_tokens: None,
            temperature: None,
            mock_response: None,
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("mock_response", &self.mock_response.as_ref().map(|r| r.len()))
            .finish()
    }
}

/// Token verification settings
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret; never has a default
    #[serde(default)]
    pub jwt_secret: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &redacted(&self.jwt_secret))
            .finish()
    }
}

/// Generation pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Deadline for one upstream call, in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Instruction template; `None` uses the built-in default
    #[serde(default)]
    pub prompt_template: Option<String>,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            prompt_template: None,
        }
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn prompt_template(&self) -> Result<PromptTemplate, ConfigError> {
        match &self.prompt_template {
            Some(text) => {
                PromptTemplate::new(text.clone()).map_err(|e| ConfigError::InvalidTemplate(e.to_string()))
            }
            None => Ok(PromptTemplate::default()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (HTTP)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            llm: LlmConfig::default(),
            auth: AuthConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later wins: built-in defaults, `config/server.*`,
    /// `YAMLGEN_*` variables (`__` separates nesting, e.g.
    /// `YAMLGEN_LLM__MODEL`). `GEMINI_API_KEY` and `JWT_SECRET` fill the
    /// secrets when nothing else did.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let mut loaded = Self::load_from("config/server")?;
        loaded.apply_env_fallbacks(|name| std::env::var(name).ok());
        Ok(loaded)
    }

    /// Layer the optional file `file_stem.*` and `YAMLGEN_*` variables
    ///
    /// A missing file is fine; one that exists but does not parse is an
    /// error.
    pub fn load_from(file_stem: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("YAMLGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .try_deserialize::<Self>()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Fill missing secrets from the conventional plain variable names
    pub fn apply_env_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.llm.api_key.is_none() {
            self.llm.api_key = lookup("GEMINI_API_KEY").filter(|v| !v.is_empty());
        }
        if self.auth.jwt_secret.is_none() {
            self.auth.jwt_secret = lookup("JWT_SECRET").filter(|v| !v.is_empty());
        }
    }

    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.provider == LlmProviderKind::Gemini && !has_value(&self.llm.api_key) {
            return Err(ConfigError::MissingApiKey);
        }
        if !has_value(&self.auth.jwt_secret) {
            return Err(ConfigError::MissingJwtSecret);
        }
        self.generation.prompt_template()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn has_value(secret: &Option<String>) -> bool {
    secret.as_deref().map_or(false, |s| !s.trim().is_empty())
}

fn redacted(secret: &Option<String>) -> &'static str {
    if secret.is_some() {
        "<redacted>"
    } else {
        "<unset>"
    }
}
