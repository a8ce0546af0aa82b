use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::content::generator::DEFAULT_GENERATION_TIMEOUT;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";
const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub generation_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = match std::env::var("GENERATION_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_GENERATION_TIMEOUT.as_secs(),
        };
        if timeout_secs == 0 {
            bail!("GENERATION_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            generation_timeout: Duration::from_secs(timeout_secs),
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => DEFAULT_PORT,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}
