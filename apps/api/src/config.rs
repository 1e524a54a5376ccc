use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

/// Credential variables checked in priority order; first non-empty wins.
const API_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "OPENAI_KEY", "API_KEY"];

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let candidates: Vec<Option<String>> = API_KEY_VARS
            .iter()
            .map(|var| std::env::var(var).ok())
            .collect();

        Ok(Config {
            openai_api_key: resolve_api_key(&candidates).with_context(|| {
                format!(
                    "No OpenAI credential found; set one of {}",
                    API_KEY_VARS.join(", ")
                )
            })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Picks the first non-empty candidate, preserving priority order.
fn resolve_api_key(candidates: &[Option<String>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .cloned()
}
