//! Roast Gateway
//!
//! HTTP backend for the music-taste roast app:
//! - Spotify OAuth login, callback, and cookie-backed session
//! - authenticated profile and top-track fetches
//! - one-shot roast generation via Gemini
//!
//! The presentation layer is a separate client of these endpoints; this
//! crate only speaks HTTP/JSON.

pub mod config;
pub mod prompt;
pub mod server;

pub use config::AppConfig;
pub use server::{router, serve, AppState};
