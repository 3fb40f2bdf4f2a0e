//! YAML validation for generated content

use crate::error::{LLMError, Result};

/// Check that `text` parses as a single YAML document.
///
/// The text is not modified. Any parser failure is reported as
/// [`LLMError::InvalidYaml`] with the parser's message.
pub fn validate_yaml(text: &str) -> Result<()> {
    serde_yaml::from_str::<serde_yaml::Value>(text)
        .map(|_| ())
        .map_err(|e| LLMError::InvalidYaml(e.to_string()))
}
