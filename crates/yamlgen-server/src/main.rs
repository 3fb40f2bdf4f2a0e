//! YAML generation HTTP server
//!
//! Turns free-text requirements into YAML and keeps per-owner collections
//! of saved configurations.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yamlgen_server::api::{self, rest::ROUTES};
use yamlgen_server::config::ServerConfig;
use yamlgen_server::services;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Build generator, store and token verifier
    let state = services::build_state(&config)?;
    info!("Services initialized");

    let app = api::create_router(state);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    for (method, path) in ROUTES {
        info!("  {} http://{}{}", method, addr, path);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let level = &config.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "yamlgen_server={level},yamlgen_llm={level},yamlgen_repository={level},tower_http=debug"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
