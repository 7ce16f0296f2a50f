//! Spotify client
//!
//! Covers the two halves of talking to Spotify:
//! - the OAuth authorization-code flow (authorize URL + code exchange)
//! - authenticated Web API fetches (profile, top tracks)
//!
//! Upstream JSON is decoded through explicit schema types in [`types`] and
//! converted into the small summary records the rest of the system consumes.

pub mod auth;
pub mod error;
pub mod types;
pub mod webapi;

pub use auth::{SpotifyAuth, SpotifyConfig, TokenPair};
pub use error::{Error, Result};
pub use types::{ProfileSummary, TrackSummary};
pub use webapi::{SpotifyWebApi, TimeRange};
