mod analyzer;
mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{GuidanceCatalog, ToneCatalog};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing credential)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prompt-pair API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion client
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!(
        "LLM client initialized (upstream model: {})",
        llm_client::UPSTREAM_MODEL
    );

    // Build catalogs once; they are read-only for the process lifetime
    let guidance = Arc::new(GuidanceCatalog::new());
    let tones = Arc::new(ToneCatalog::new());
    info!("Guidance and tone catalogs loaded");

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        guidance,
        tones,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
