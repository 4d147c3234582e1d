use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Maximum accepted upload size (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Which language-model backend the matcher talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Local Ollama daemon.
    Ollama,
    /// Hosted Anthropic Messages API.
    Anthropic,
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" | "local" => Ok(LlmProvider::Ollama),
            "anthropic" | "hosted" => Ok(LlmProvider::Anthropic),
            other => bail!("Unknown LLM_PROVIDER '{other}' (expected 'ollama' or 'anthropic')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
    pub upload_dir: String,
    pub llm_provider: LlmProvider,
    pub ollama_url: String,
    pub ollama_model: String,
    pub anthropic_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_provider = optional_env("LLM_PROVIDER")
            .map(|v| v.parse::<LlmProvider>())
            .transpose()?
            .unwrap_or(LlmProvider::Ollama);

        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        if llm_provider == LlmProvider::Anthropic && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY must be set when LLM_PROVIDER=anthropic");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            secret_key: require_env("SECRET_KEY")?,
            host: optional_env("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: optional_env("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string()),
            llm_provider,
            ollama_url: optional_env("OLLAMA_URL")
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            ollama_model: optional_env("OLLAMA_MODEL").unwrap_or_else(|| "llama3.2:3b".to_string()),
            anthropic_api_key,
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
