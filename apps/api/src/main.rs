mod answers;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{ChatProvider, LlmClient};
use crate::routes::build_router;
use crate::scoring::match_scorer::MatchScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job assistant API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite (creates the schema on first run)
    let db = create_pool(&config.database_url).await?;

    // Initialize the chat provider. Absent key means mock mode: deterministic
    // scoring and placeholder answers, no outbound calls.
    let chat: Option<Arc<dyn ChatProvider>> = match &config.openrouter_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("OPENROUTER_API_KEY not set - running in mock mode");
            None
        }
    };

    let scorer = MatchScorer::new(chat.clone());

    let state = AppState { db, scorer, chat };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
