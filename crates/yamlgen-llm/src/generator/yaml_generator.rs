//! Infrastructure YAML generation from natural language requirements

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use crate::generator::prompt_templates::PromptTemplate;
use crate::generator::yaml_validator::validate_yaml;
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration for YAML generation
#[derive(Debug, Clone)]
pub struct YamlGeneratorConfig {
    /// Model to use for generation (e.g., "gemini-pro")
    pub model: String,
    /// Maximum tokens for response
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Instruction wrapped around the user's requirement
    pub template: PromptTemplate,
}

impl Default for YamlGeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            max_tokens: None,
            temperature: None,
            template: PromptTemplate::default(),
        }
    }
}

impl YamlGeneratorConfig {
    /// Create a new configuration with a specific model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
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

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }
}

/// Turns a deployment requirement into YAML through one upstream call
pub struct YamlGenerator {
    client: Arc<dyn LLMClient>,
    config: YamlGeneratorConfig,
}

impl YamlGenerator {
    pub fn new(client: Arc<dyn LLMClient>, config: YamlGeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(client, YamlGeneratorConfig::default())
    }

    /// Generate a YAML configuration from a natural-language requirement
    ///
    /// # Returns
    /// * `Ok(String)` - the model's text, verbatim, known to parse as YAML
    /// * `Err(LLMError::InvalidRequest)` - the prompt is blank
    /// * `Err(LLMError::EmptyResponse)` - the model returned no text
    /// * `Err(LLMError::InvalidYaml)` - the model's text does not parse
    /// * any other upstream error from the client
    ///
    /// # Example
    /// ```no_run
    /// use yamlgen_llm::{MockProvider, YamlGenerator};
    /// use std::sync::Arc;
    ///
    /// # async fn example() -> yamlgen_llm::Result<()> {
    /// let generator = YamlGenerator::with_defaults(Arc::new(MockProvider::new()));
    /// let yaml = generator.generate("Python web app with PostgreSQL").await?;
    /// println!("{}", yaml);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_metadata(prompt)
            .await
            .map(|(yaml, _)| yaml)
    }

    /// Generate YAML and also return the raw model response
    pub async fn generate_with_metadata(&self, prompt: &str) -> Result<(String, LLMResponse)> {
        if prompt.trim().is_empty() {
            return Err(LLMError::InvalidRequest("Prompt is required".to_string()));
        }

        let request = self.build_request(prompt);
        debug!(
            client = self.client.name(),
            model = %request.model,
            prompt_len = prompt.len(),
            "Submitting generation request"
        );

        let response = self.client.call(request).await?;

        if response.content.trim().is_empty() {
            warn!(model = %response.model, "Model returned no content");
            return Err(LLMError::EmptyResponse);
        }

        if let Err(e) = validate_yaml(&response.content) {
            warn!(model = %response.model, error = %e, "Model returned unparseable YAML");
            return Err(e);
        }

        debug!(
            yaml_len = response.content.len(),
            tokens = response.tokens_used,
            "Generated YAML"
        );

        Ok((response.content.clone(), response))
    }

    /// Get current configuration
    pub fn config(&self) -> &YamlGeneratorConfig {
        &self.config
    }

    fn build_request(&self, prompt: &str) -> LLMRequest {
        LLMRequest {
            prompt: self.config.template.render(prompt),
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}
