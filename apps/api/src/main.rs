mod auth;
mod config;
mod db;
mod errors;
mod extraction;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod parsing;
mod resumes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::JwtManager;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::build_backend;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screener v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload directory '{}'", config.upload_dir))?;
    info!("Uploads stored under {}", config.upload_dir);

    // Initialize LLM backend; an unreachable model only degrades matching to the fallback
    let llm = build_backend(&config)?;
    if llm.check_connection().await {
        info!("LLM backend ready: {} ({})", llm.name(), llm.model());
    } else {
        warn!(
            "LLM backend {} ({}) is not responding; matches will use the fallback scorer",
            llm.name(),
            llm.model()
        );
    }

    // Build app state
    let state = AppState {
        db,
        llm,
        jwt: Arc::new(JwtManager::new(&config.secret_key)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins once the dashboard has a fixed host
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
