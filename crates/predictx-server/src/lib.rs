//! PredictX Server
//!
//! Stateless HTTP front for the prediction engine. One endpoint,
//! `POST /api/predict`, validates two team names, asks the generation
//! service for a split, and returns it or a structured error.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use predictx_llm::GeminiProvider;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Generation provider could not be created
    #[error("Provider error: {0}")]
    Provider(#[from] predictx_llm::LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Initialize tracing
///
/// Honours `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the Gemini provider described by `config`
pub fn build_provider(config: &ServerConfig) -> Result<GeminiProvider, ServerError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| config::ConfigError::MissingField(config::API_KEY_ENV.to_string()))?;

    let provider = GeminiProvider::with_options(
        config.api_endpoint.as_str(),
        api_key,
        config.model.as_str(),
        config.request_timeout(),
    )?;
    Ok(provider)
}

/// Start the prediction HTTP server
///
/// Builds the provider from `config` and serves until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting PredictX server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.model);
    info!("Generation timeout: {} seconds", config.request_timeout_secs);

    let provider = build_provider(&config)?;
    let app = create_router(AppState::new(provider));

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
