//! Error types for the Gemini client

use thiserror::Error;

/// Result type alias using the Gemini client Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when requesting a generation
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key was configured; checked before any network call
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// Generation endpoint returned a non-success status
    #[error("Gemini request failed with status {status}")]
    Upstream { status: u16, body: String },

    /// Response decoded but contained no generated text
    #[error("Gemini response contained no generated text")]
    EmptyResponse,

    /// Response body did not match the expected schema
    #[error("failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
}
