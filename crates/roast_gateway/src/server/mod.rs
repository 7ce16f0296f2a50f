//! Roast Gateway HTTP server
//!
//! Routes requests to the OAuth, profile, and roast handlers. State is a
//! read-only [`AppState`] behind an `Arc`; sessions are isolated through
//! their cookies, so handlers share nothing mutable.

pub mod error;
pub mod handlers;
pub mod session;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use gemini_client::GeminiClient;
use spotify_client::{SpotifyAuth, SpotifyWebApi};

use crate::config::AppConfig;

/// Application state shared across handlers
pub struct AppState {
    pub config: AppConfig,
    pub spotify_auth: SpotifyAuth,
    pub spotify_api: SpotifyWebApi,
    pub gemini: GeminiClient,
}

impl AppState {
    /// State with clients against the real upstream hosts.
    pub fn new(config: AppConfig) -> Self {
        let spotify_auth = SpotifyAuth::new(config.spotify.clone());
        let gemini = GeminiClient::new(config.google_api_key.clone());
        Self {
            spotify_auth,
            spotify_api: SpotifyWebApi::new(),
            gemini,
            config,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", get(handlers::login))
        .route("/callback", get(handlers::callback))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .route("/me", get(handlers::me))
        .route("/top-tracks", get(handlers::top_tracks))
        .route("/roast", post(handlers::roast))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = router(Arc::new(AppState::new(config)));

    let listener = TcpListener::bind(&addr).await?;
    info!("roast gateway listening on {}", addr);
    info!("  GET  /login      - redirect to the Spotify consent screen");
    info!("  GET  /callback   - OAuth code exchange, installs session cookies");
    info!("  GET  /logout     - clear session cookies (also POST)");
    info!("  GET  /me         - profile summary");
    info!("  GET  /top-tracks - simplified top-track listing");
    info!("  POST /roast      - roast the session's taste");

    axum::serve(listener, app).await?;

    Ok(())
}
