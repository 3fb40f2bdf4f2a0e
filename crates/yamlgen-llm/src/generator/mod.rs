//! YAML generation from natural language descriptions
//!
//! - Prompt templates: the instruction wrapped around the user's requirement
//! - YAML generator: one upstream call, then emptiness and parse checks
//! - YAML validator: the parse check on its own, for callers holding text
//!   from elsewhere (templates, hand edits)
//!
//! # Example
//! ```no_run
//! use yamlgen_llm::{GeminiProvider, YamlGenerator, YamlGeneratorConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> yamlgen_llm::Result<()> {
//! let provider = Arc::new(GeminiProvider::new("your-api-key"));
//! let generator = YamlGenerator::new(provider, YamlGeneratorConfig::default());
//!
//! let yaml = generator.generate("Node.js app with 2 replicas").await?;
//! println!("{}", yaml);
//! # Ok(())
//! # }
//! ```

pub mod prompt_templates;
pub mod yaml_generator;
pub mod yaml_validator;

pub use prompt_templates::{PromptTemplate, DEFAULT_PROMPT_TEMPLATE, PROMPT_PLACEHOLDER};
pub use yaml_generator::{YamlGenerator, YamlGeneratorConfig};
pub use yaml_validator::validate_yaml;
