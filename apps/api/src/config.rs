use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing here is strictly required: the service boots without a Groq key
/// (completion calls then fail and /health reports the gap).
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key. `None` when unset or blank.
    pub groq_api_key: Option<String>,
    /// Directory holding login.html and index.html, served on / and /app.
    pub frontend_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "../frontend".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8002".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
