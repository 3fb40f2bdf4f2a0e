//! Prompt templates for YAML generation

use crate::error::{LLMError, Result};

/// Interpolation point for the user's requirement
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Default instruction sent to the model.
///
/// Whitespace is significant: the text is sent to the model byte for byte.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are a YAML configuration generator for infrastructure deployment. \n    Generate valid YAML based on the following requirements. \n    Only respond with the YAML content, no additional text.\n    Make sure the YAML is properly formatted and includes appropriate indentation.\n    Requirements: {prompt}";

/// A validated prompt template containing at least one `{prompt}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Build a template, rejecting text with no `{prompt}` placeholder
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.contains(PROMPT_PLACEHOLDER) {
            return Err(LLMError::InvalidConfiguration(format!(
                "prompt template must contain the {} placeholder",
                PROMPT_PLACEHOLDER
            )));
        }
        Ok(Self { text })
    }

    /// Substitute the user's requirement into the template
    pub fn render(&self, prompt: &str) -> String {
        self.text.replace(PROMPT_PLACEHOLDER, prompt)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}
