//! Process configuration
//!
//! The environment is read exactly once at startup into an [`AppConfig`]
//! that travels through shared state; no other module reads env vars.

use spotify_client::SpotifyConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    MissingVar(&'static str),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Configuration assembled once at process start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spotify: SpotifyConfig,
    /// May be empty; checked at generation time, not at startup.
    pub google_api_key: String,
    /// Base URL of the presentation layer, used for post-auth redirects.
    pub app_base_url: String,
    pub secure_cookies: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Required: `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `SPOTIFY_REDIRECT_URI`, `APP_BASE_URL`.
    /// Optional: `GOOGLE_API_KEY`, `APP_ENV` (`production` turns on secure
    /// cookies), `HOST` (default 127.0.0.1), `PORT` (default 8080).
    pub fn from_env() -> Result<Self, ConfigError> {
        let spotify = SpotifyConfig::new(
            require("SPOTIFY_CLIENT_ID")?,
            require("SPOTIFY_CLIENT_SECRET")?,
            require("SPOTIFY_REDIRECT_URI")?,
        );

        let app_base_url = require("APP_BASE_URL")?.trim_end_matches('/').to_string();
        let secure_cookies = std::env::var("APP_ENV").is_ok_and(|env| env == "production");
        let google_api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_default();
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 8080,
        };

        Ok(Self {
            spotify,
            google_api_key,
            app_base_url,
            secure_cookies,
            host,
            port,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
