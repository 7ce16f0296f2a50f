//! Spotify OAuth authorization-code flow
//!
//! Builds the consent-screen URL and exchanges the returned code for a
//! token pair with a single server-to-server POST. There is no PKCE here:
//! Spotify's confidential-client flow authenticates with the client secret
//! in the form body.

use crate::error::{Error, Result};
use crate::types::TokenResponse;

const ACCOUNTS_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Scopes requested on every login.
const SCOPES: [&str; 4] = [
    "user-read-recently-played",
    "user-top-read",
    "playlist-read-private",
    "user-library-read",
];

/// Spotify OAuth configuration
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
}

impl SpotifyConfig {
    /// Configuration against the real accounts service.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            auth_url: ACCOUNTS_AUTH_URL.to_string(),
            token_url: ACCOUNTS_TOKEN_URL.to_string(),
        }
    }
}

/// Bearer credentials minted by one successful exchange.
///
/// Lifetimes are not tracked here; the transport layer that stores the pair
/// owns expiry.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Client for the accounts service (consent URL + code exchange)
pub struct SpotifyAuth {
    config: SpotifyConfig,
    http_client: reqwest::Client,
}

impl SpotifyAuth {
    pub fn new(config: SpotifyConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// URL of the consent screen the browser is redirected to on login.
    pub fn authorize_url(&self) -> String {
        let mut url = url::Url::parse(&self.config.auth_url).expect("invalid authorize URL");

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("scope", &SCOPES.join(" "))
            .append_pair("redirect_uri", &self.config.redirect_uri);

        url.to_string()
    }

    /// Exchange an authorization code for a token pair.
    ///
    /// Issues exactly one POST to the token endpoint; a non-success status
    /// fails with [`Error::TokenExchange`] carrying the provider's payload
    /// and no credentials are returned.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenPair> {
        let form_params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &self.config.redirect_uri),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
        ];

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&form_params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, %body, "Spotify token exchange failed");
            return Err(Error::TokenExchange { status, body });
        }

        let body = response.text().await?;
        let token_response: TokenResponse = serde_json::from_str(&body)?;

        Ok(TokenPair {
            access_token: token_response.access_token,
            refresh_token: token_response.refresh_token,
        })
    }
}
