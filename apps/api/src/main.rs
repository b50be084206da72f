mod config;
mod enhance;
mod errors;
mod interview;
mod llm_client;
mod resume;
mod routes;
mod state;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::{Enhancer, LlmEnhancer, NoopEnhancer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verdict API v{}", env!("CARGO_PKG_VERSION"));

    // Select the enhancement backend. Scoring is deterministic either way;
    // the enhancer only ever augments it.
    let enhancer: Arc<dyn Enhancer> = match &config.anthropic_api_key {
        Some(api_key) if config.enable_enhancement => {
            let client = LlmClient::new(
                api_key.clone(),
                config.llm_model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            );
            info!(
                "LLM enhancement enabled (model: {}, timeout: {}s)",
                client.model(),
                config.llm_timeout_secs
            );
            Arc::new(LlmEnhancer::new(client))
        }
        _ => {
            info!("LLM enhancement disabled; serving deterministic scores only");
            Arc::new(NoopEnhancer)
        }
    };

    let state = AppState {
        config: config.clone(),
        enhancer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
