use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: the deterministic engine runs with zero
/// external dependencies, and the LLM enhancement layer activates only when
/// an API key is present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub enable_enhancement: bool,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            enable_enhancement: std::env::var("ENABLE_LLM_ENHANCEMENT")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .context("ENABLE_LLM_ENHANCEMENT must be true or false")?,
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_MODEL.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
        })
    }

    /// True when enhancement is both switched on and actually usable.
    pub fn enhancement_active(&self) -> bool {
        self.enable_enhancement && self.anthropic_api_key.is_some()
    }
}
