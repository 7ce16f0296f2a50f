//! HTTP handlers
//!
//! Each handler is one sequential chain of awaits; any component error
//! short-circuits into an [`ApiError`] response. There is no retry and no
//! partial-result fallback anywhere.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use spotify_client::{ProfileSummary, TimeRange, TrackSummary};

use super::error::ApiError;
use super::session;
use super::AppState;
use crate::prompt;

/// How many top tracks feed both the listing and the roast.
const TOP_TRACKS_LIMIT: u8 = 20;

/// GET /login — redirect the browser to the Spotify consent screen.
pub async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.spotify_auth.authorize_url())
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
}

/// GET /callback — exchange the authorization code, install the session
/// cookies, and send the browser to the dashboard. On failure no cookie is
/// touched.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or(ApiError::MissingCode)?;

    let tokens = state
        .spotify_auth
        .exchange_code(&code)
        .await
        .map_err(ApiError::TokenExchange)?;

    let jar = session::install(jar, &tokens, state.config.secure_cookies);
    let dashboard = format!("{}/dashboard", state.config.app_base_url);

    Ok((jar, Redirect::to(&dashboard)))
}

/// GET|POST /logout — clear both session cookies and go home.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    let home = format!("{}/", state.config.app_base_url);
    (session::clear(jar), Redirect::to(&home))
}

/// GET /me — profile summary for the session's listener.
pub async fn me(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<ProfileSummary>, ApiError> {
    let token = session::access_token(&jar).ok_or(ApiError::Unauthenticated)?;
    let profile = state.spotify_api.fetch_profile(&token).await?;
    Ok(Json(profile))
}

#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<TrackSummary>,
}

/// GET /top-tracks — simplified top-track listing.
pub async fn top_tracks(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<TracksResponse>, ApiError> {
    let token = session::access_token(&jar).ok_or(ApiError::Unauthenticated)?;
    let tracks = state
        .spotify_api
        .fetch_top_tracks(&token, TOP_TRACKS_LIMIT, TimeRange::MediumTerm)
        .await?;

    Ok(Json(TracksResponse { tracks }))
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
    pub roast: String,
}

/// POST /roast — the full chain: auth check, track fetch, non-empty check,
/// prompt build, generation.
pub async fn roast(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<RoastResponse>, ApiError> {
    let token = session::access_token(&jar).ok_or(ApiError::Unauthenticated)?;

    let tracks = state
        .spotify_api
        .fetch_top_tracks(&token, TOP_TRACKS_LIMIT, TimeRange::MediumTerm)
        .await?;

    if tracks.is_empty() {
        return Err(ApiError::InsufficientData);
    }

    let prompt = prompt::build_roast_prompt(&tracks);
    let roast = state.gemini.generate(&prompt).await?;

    Ok(Json(RoastResponse { roast }))
}
