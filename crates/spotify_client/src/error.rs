//! Error types for the Spotify client

use thiserror::Error;

/// Result type alias using the Spotify client Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to Spotify
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token endpoint returned a non-success status
    #[error("token exchange failed with status {status}")]
    TokenExchange { status: u16, body: String },

    /// Web API returned a non-success status
    #[error("Spotify API request failed with status {status}")]
    Upstream { status: u16, body: String },

    /// No access token was supplied for an authenticated call
    #[error("missing access token")]
    MissingAccessToken,

    /// Response body did not match the expected schema
    #[error("failed to decode Spotify response: {0}")]
    Decode(#[from] serde_json::Error),
}
