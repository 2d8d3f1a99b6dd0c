use anyhow::{Context, Result};

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_EXA_BASE_URL: &str = "https://api.exa.ai";
const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LLM_MODEL: &str = "x-ai/grok-4-fast:free";

/// Application configuration loaded from environment variables.
/// Missing API keys do not abort startup; they are reported through `missing_keys`.
#[derive(Debug, Clone)]
pub struct Config {
    pub exa_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub frontend_url: String,
    pub frontend_url_from_env: bool,
    pub exa_base_url: String,
    pub openrouter_base_url: String,
    pub llm_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let frontend_url = optional_env("FRONTEND_URL");

        Ok(Config {
            exa_api_key: optional_env("EXA_API_KEY"),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            frontend_url_from_env: frontend_url.is_some(),
            frontend_url: frontend_url.unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            exa_base_url: optional_env("EXA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_EXA_BASE_URL.to_string()),
            openrouter_base_url: optional_env("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Names of the API key variables that were not set.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.exa_api_key.is_none() {
            missing.push("EXA_API_KEY");
        }
        if self.openrouter_api_key.is_none() {
            missing.push("OPENROUTER_API_KEY");
        }
        missing
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
