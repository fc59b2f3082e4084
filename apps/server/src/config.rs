//! Environment-driven server configuration.

use anyhow::Context;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub static_dir: String,
    /// Secret for signing session tokens. Required; there is deliberately
    /// no default.
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl Config {
    /// Reads configuration from the environment (and `.env` if present).
    /// Fails fast when `TL_JWT_SECRET` is missing rather than falling back
    /// to a known secret.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = std::env::var("TL_JWT_SECRET")
            .context("TL_JWT_SECRET must be set; refusing to start without a signing key")?;

        let token_ttl_secs = match std::env::var("TL_TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("TL_TOKEN_TTL_SECS must be a number of seconds")?,
            Err(_) => 3600,
        };

        Ok(Self {
            listen_addr: std::env::var("TL_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            db_path: std::env::var("TL_DB_PATH").unwrap_or_else(|_| "touchline.db".to_string()),
            static_dir: std::env::var("TL_STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            jwt_secret,
            token_ttl_secs,
        })
    }
}
