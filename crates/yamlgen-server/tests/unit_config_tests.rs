//! Unit tests for ServerConfig layering and validation

use std::time::Duration;
use yamlgen_server::config::{ConfigError, LlmProviderKind, ServerConfig};

fn from_yaml(text: &str) -> ServerConfig {
    config::Config::builder()
        .add_source(config::File::from_str(text, config::FileFormat::Yaml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_empty_file_gives_defaults() {
    let config = from_yaml("{}");

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert_eq!(config.llm.provider, LlmProviderKind::Gemini);
    assert_eq!(config.llm.model, "gemini-pro");
    assert_eq!(config.generation.timeout(), Some(Duration::from_secs(60)));
}

#[test]
fn test_full_yaml_file() {
    let config = from_yaml(
        r#"
host: 0.0.0.0
port: 8080
log_level: debug
llm:
  provider: gemini
  model: gemini-1.5-flash
  api_key: file-key
  base_url: http://localhost:8089/v1beta
  max_tokens: 1024
  temperature: 0.3
auth:
  jwt_secret: file-secret
generation:
  timeout_secs: 15
  prompt_template: "Produce YAML only. Requirements: {prompt}"
"#,
    );

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.llm.model, "gemini-1.5-flash");
    assert_eq!(config.llm.max_tokens, Some(1024));
    assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:8089/v1beta"));
    assert_eq!(config.generation.timeout(), Some(Duration::from_secs(15)));
    assert!(config.validate().is_ok());

    let template = config.generation.prompt_template().unwrap();
    assert_eq!(template.render("a cache"), "Produce YAML only. Requirements: a cache");
}

#[test]
fn test_mock_provider_from_file() {
    let config = from_yaml(
        r#"
llm:
  provider: mock
  mock_response: "name: offline"
auth:
  jwt_secret: s
"#,
    );

    assert_eq!(config.llm.provider, LlmProviderKind::Mock);
    assert_eq!(config.llm.mock_response.as_deref(), Some("name: offline"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_unknown_provider_rejected() {
    let result = config::Config::builder()
        .add_source(config::File::from_str(
            "llm:\n  provider: openai\n",
            config::FileFormat::Yaml,
        ))
        .build()
        .unwrap()
        .try_deserialize::<ServerConfig>();

    assert!(result.is_err());
}

#[test]
fn test_fallback_variables_complete_a_file_config() {
    let mut config = from_yaml("port: 3001");
    assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));

    config.apply_env_fallbacks(|name| match name {
        "GEMINI_API_KEY" => Some("env-key".to_string()),
        "JWT_SECRET" => Some("env-secret".to_string()),
        _ => None,
    });

    assert!(config.validate().is_ok());
    assert_eq!(config.llm.api_key.as_deref(), Some("env-key"));
}

#[test]
fn test_config_error_messages() {
    assert!(ConfigError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
    assert!(ConfigError::MissingJwtSecret.to_string().contains("JWT_SECRET"));
    assert!(ConfigError::InvalidTemplate("x".into())
        .to_string()
        .contains("invalid prompt template"));
}

fn write_server_file(dir: &tempfile::TempDir, file_name: &str, contents: &str) -> String {
    std::fs::write(dir.path().join(file_name), contents).unwrap();
    dir.path().join("server").to_string_lossy().into_owned()
}

#[test]
fn test_load_from_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let stem = write_server_file(&dir, "server.toml", "port = 9090\n[llm\nmodel = ");

    let result = ServerConfig::load_from(&stem);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("server").to_string_lossy().into_owned();

    let config = ServerConfig::load_from(&stem).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.llm.model, "gemini-pro");
}

#[test]
fn test_load_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let stem = write_server_file(
        &dir,
        "server.toml",
        "port = 9090\n\n[llm]\nmodel = \"gemini-1.5-pro\"\n",
    );

    let config = ServerConfig::load_from(&stem).unwrap();
    assert_eq!(config.port, 9090);
    assert_eq!(config.llm.model, "gemini-1.5-pro");
}
