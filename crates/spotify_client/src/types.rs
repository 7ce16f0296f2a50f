//! Spotify Web API schema types
//!
//! Decode structs mirror the upstream JSON exactly; the summary records the
//! rest of the system consumes are produced by explicit conversions, so
//! upstream schema drift surfaces as a decode error instead of silently
//! reshaping internal data.

use serde::{Deserialize, Serialize};

/// Response of the accounts token endpoint.
///
/// Only the two bearer credentials are read. Spotify also reports
/// `expires_in`, but token lifetimes here are fixed cookie policy, not
/// provider-driven.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// `/v1/me` response (current user's profile).
#[derive(Debug, Deserialize)]
pub struct PrivateUser {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub url: String,
}

/// `/v1/me/top/tracks` response page.
#[derive(Debug, Deserialize)]
pub struct TopTracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
    pub album: SimplifiedAlbum,
    pub popularity: u32,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SimplifiedAlbum {
    pub name: String,
}

/// Profile record handed to callers, rebuilt fresh on every fetch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub image: Option<String>,
    pub id: String,
}

/// Shown when the account has no display name set.
const ANONYMOUS_NAME: &str = "Anonymous Listener";

impl From<PrivateUser> for ProfileSummary {
    fn from(user: PrivateUser) -> Self {
        Self {
            name: user
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            image: user.images.into_iter().next().map(|image| image.url),
            id: user.id,
        }
    }
}

/// Track record handed to callers, one per item, in provider order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackSummary {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub popularity: u32,
}

impl From<Track> for TrackSummary {
    fn from(track: Track) -> Self {
        Self {
            artists: track
                .artists
                .iter()
                .map(|artist| artist.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            name: track.name,
            album: track.album.name,
            popularity: track.popularity,
        }
    }
}
