//! Request error taxonomy and HTTP mapping
//!
//! Every component failure folds into one [`ApiError`] variant. The user
//! always receives a generic message plus a stable `kind` tag to switch on;
//! upstream payloads are logged here and never surfaced. Nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Callback hit without an authorization code
    #[error("Missing code")]
    MissingCode,

    /// No access token in the session
    #[error("Not authenticated with Spotify")]
    Unauthenticated,

    /// Authenticated fetch succeeded but returned zero tracks
    #[error("No tracks found. Listen to more music first!")]
    InsufficientData,

    /// Accounts service rejected the code exchange
    #[error("Token exchange failed")]
    TokenExchange(#[source] spotify_client::Error),

    /// Web API fetch failed
    #[error("Failed to fetch Spotify data")]
    SpotifyUpstream(#[source] spotify_client::Error),

    /// Generation requested without a configured API key
    #[error("Google API key not configured")]
    MisconfiguredGenerator,

    /// Generation response carried no text
    #[error("Empty response from AI")]
    EmptyGeneration,

    /// Generation call failed
    #[error("Failed to generate roast")]
    GenerationUpstream(#[source] gemini_client::Error),
}

impl ApiError {
    /// Stable tag the presentation layer switches on, never on message text.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingCode => "missing_code",
            ApiError::Unauthenticated => "unauthenticated",
            ApiError::InsufficientData => "insufficient_data",
            ApiError::TokenExchange(_) => "token_exchange_failed",
            ApiError::SpotifyUpstream(_) => "spotify_upstream_failed",
            ApiError::MisconfiguredGenerator => "generator_not_configured",
            ApiError::EmptyGeneration => "empty_generation",
            ApiError::GenerationUpstream(_) => "generation_failed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCode | ApiError::InsufficientData => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::TokenExchange(_)
            | ApiError::SpotifyUpstream(_)
            | ApiError::MisconfiguredGenerator
            | ApiError::EmptyGeneration
            | ApiError::GenerationUpstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Upstream payloads are logged where the call was made; only the
        // generic shape is recorded here.
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.kind(), "request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<spotify_client::Error> for ApiError {
    fn from(err: spotify_client::Error) -> Self {
        match err {
            spotify_client::Error::MissingAccessToken => ApiError::Unauthenticated,
            err @ spotify_client::Error::TokenExchange { .. } => ApiError::TokenExchange(err),
            err => ApiError::SpotifyUpstream(err),
        }
    }
}

impl From<gemini_client::Error> for ApiError {
    fn from(err: gemini_client::Error) -> Self {
        match err {
            gemini_client::Error::MissingApiKey => ApiError::MisconfiguredGenerator,
            gemini_client::Error::EmptyResponse => ApiError::EmptyGeneration,
            err => ApiError::GenerationUpstream(err),
        }
    }
}
