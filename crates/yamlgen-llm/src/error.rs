//! Error types for the yamlgen LLM module

use thiserror::Error;

/// Result type alias for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// LLM module errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// The caller's input was unusable (e.g. blank prompt)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// External API call failed
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// The upstream answered, but not in the expected shape
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The upstream answered with no text
    #[error("No YAML content generated")]
    EmptyResponse,

    /// Generated text is not parseable YAML
    #[error("Invalid YAML generated: {0}")]
    InvalidYaml(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl LLMError {
    /// Whether this error means the upstream model failed to produce usable output.
    ///
    /// `InvalidYaml` belongs here: from the caller's side a reply that does not
    /// parse is a failed generation.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            LLMError::ApiCallFailed(_)
                | LLMError::InvalidResponse(_)
                | LLMError::EmptyResponse
                | LLMError::InvalidYaml(_)
                | LLMError::SerializationError(_)
                | LLMError::HttpError(_)
        )
    }
}
