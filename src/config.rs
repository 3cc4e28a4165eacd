// src/config.rs
use anyhow::Result;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application settings loaded from environment variables. Every variable
/// has a development default, so a plain `cargo run` talks to a local
/// analysis service.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub rust_log: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Settings {
            api_base_url: std::env::var("CAREER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
