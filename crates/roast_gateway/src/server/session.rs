//! Cookie-backed session token store
//!
//! The two bearer credentials live in independently expiring cookies; expiry
//! enforcement is entirely the transport's. Reads do no validation beyond
//! requiring a non-empty value, so a stale-but-present access token is only
//! rejected when Spotify refuses it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use spotify_client::TokenPair;
use time::Duration;

pub const ACCESS_COOKIE: &str = "spotify_access_token";
pub const REFRESH_COOKIE: &str = "spotify_refresh_token";

/// Access-token lifetime: 1 hour. Policy constant, not provider-reported.
const ACCESS_TTL: Duration = Duration::seconds(3600);
/// Refresh-token lifetime: 30 days. Stored for the session model even
/// though no refresh flow exists; see DESIGN.md.
const REFRESH_TTL: Duration = Duration::days(30);

/// Install both credentials. Called only after a successful exchange, so a
/// partial pair is never written.
pub fn install(jar: CookieJar, tokens: &TokenPair, secure: bool) -> CookieJar {
    jar.add(token_cookie(ACCESS_COOKIE, &tokens.access_token, ACCESS_TTL, secure))
        .add(token_cookie(REFRESH_COOKIE, &tokens.refresh_token, REFRESH_TTL, secure))
}

/// Read the access token the transport currently presents.
pub fn access_token(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Overwrite both cookies with empty values and zero lifetime (logout).
/// Idempotent whether or not a session exists.
pub fn clear(jar: CookieJar) -> CookieJar {
    jar.add(removal_cookie(ACCESS_COOKIE))
        .add(removal_cookie(REFRESH_COOKIE))
}

fn token_cookie(name: &'static str, value: &str, ttl: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(ttl)
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
