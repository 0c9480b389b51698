use anyhow::{Context, Result};
use chrono::Duration;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_sessions: usize,
    /// Sessions untouched for longer than this are dropped when a new one opens.
    pub session_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_sessions: env_or("MAX_SESSIONS", "1000")
                .parse::<usize>()
                .context("MAX_SESSIONS must be a non-negative integer")?,
            session_idle_timeout: Duration::from_std(std::time::Duration::from_secs(
                env_or("SESSION_IDLE_SECS", "3600")
                    .parse::<u64>()
                    .context("SESSION_IDLE_SECS must be a number of seconds")?,
            ))
            .context("SESSION_IDLE_SECS is out of range")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
