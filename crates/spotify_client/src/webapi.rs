//! Authenticated Spotify Web API fetches
//!
//! One GET per logical fetch, bearer-authenticated with the caller's access
//! token. No pagination, no retry, no caching; top-tracks order is the
//! provider's relevance ranking and is preserved as returned.

use crate::error::{Error, Result};
use crate::types::{PrivateUser, ProfileSummary, TopTracks, TrackSummary};

const WEB_API_URL: &str = "https://api.spotify.com";

/// Affinity window for top-item queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

/// Client for the Web API (`api.spotify.com`)
pub struct SpotifyWebApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl Default for SpotifyWebApi {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotifyWebApi {
    pub fn new() -> Self {
        Self::with_base_url(WEB_API_URL)
    }

    /// Client pointed at a non-default base URL (test stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the current user's profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<ProfileSummary> {
        let user: PrivateUser = self.get(access_token, "/v1/me", &[]).await?;
        Ok(user.into())
    }

    /// Fetch the user's top tracks for the given window, in provider order.
    pub async fn fetch_top_tracks(
        &self,
        access_token: &str,
        limit: u8,
        time_range: TimeRange,
    ) -> Result<Vec<TrackSummary>> {
        let page: TopTracks = self
            .get(
                access_token,
                "/v1/me/top/tracks",
                &[
                    ("limit", limit.to_string()),
                    ("time_range", time_range.as_str().to_string()),
                ],
            )
            .await?;

        Ok(page.items.into_iter().map(TrackSummary::from).collect())
    }

    /// Shared GET plumbing: token guard, bearer auth, status check, decode.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        access_token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        if access_token.is_empty() {
            return Err(Error::MissingAccessToken);
        }

        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, path, %body, "Spotify API request failed");
            return Err(Error::Upstream { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_profile_decodes_summary() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/me")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"{"id": "u1", "display_name": "Asha", "images": [{"url": "https://img.example/a.jpg"}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let api = SpotifyWebApi::with_base_url(server.url());
        let profile = api.fetch_profile("tok").await.unwrap();

        assert_eq!(
            profile,
            ProfileSummary {
                name: "Asha".to_string(),
                image: Some("https://img.example/a.jpg".to_string()),
                id: "u1".to_string(),
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_top_tracks_preserves_order_and_passes_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/me/top/tracks")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "20".into()),
                mockito::Matcher::UrlEncoded("time_range".into(), "medium_term".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items": [
                    {"name": "B", "artists": [{"name": "X"}], "album": {"name": "Y"}, "popularity": 10},
                    {"name": "A", "artists": [{"name": "X"}, {"name": "Z"}], "album": {"name": "Y"}, "popularity": 90}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let api = SpotifyWebApi::with_base_url(server.url());
        let tracks = api
            .fetch_top_tracks("tok", 20, TimeRange::MediumTerm)
            .await
            .unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "B");
        assert_eq!(tracks[1].artists, "X, Z");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_token_fails_before_any_network_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/me")
            .expect(0)
            .create_async()
            .await;

        let api = SpotifyWebApi::with_base_url(server.url());
        let err = api.fetch_profile("").await.unwrap_err();

        assert!(matches!(err, Error::MissingAccessToken));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upstream_failure_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/me/top/tracks")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error": {"status": 401, "message": "The access token expired"}}"#)
            .create_async()
            .await;

        let api = SpotifyWebApi::with_base_url(server.url());
        let err = api
            .fetch_top_tracks("stale", 20, TimeRange::MediumTerm)
            .await
            .unwrap_err();

        match err {
            Error::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
