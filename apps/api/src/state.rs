use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::JwtManager;
use crate::config::Config;
use crate::llm_client::LlmBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Model backend chosen at startup. Ollama by default; swap via LLM_PROVIDER.
    pub llm: Arc<dyn LlmBackend>,
    pub config: Config,
    pub jwt: Arc<JwtManager>,
}
