//! Configuration for spotmax.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Variables already present in the
//! environment win over the file. Endpoints, the callback address and the
//! preset playlists have defaults; the user and client IDs do not.

use std::{env, path::PathBuf};

use crate::error;

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str =
    "playlist-read-private playlist-modify-private user-library-modify user-read-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

pub const DEFAULT_PODCAST_PLAYLIST_ID: &str = "2PFeIO0B0DtenFmGKbzYvg";
pub const DEFAULT_RELEASE_RADAR_ID: &str = "37i9dQZEVXbuX4MySjIacD";
pub const DEFAULT_DISCOVER_WEEKLY_ID: &str = "37i9dQZEVXcXssf47BUM1F";

/// Loads `.env` from the spotmax data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/spotmax/.env`
/// - macOS: `~/Library/Application Support/spotmax/.env`
/// - Windows: `%LOCALAPPDATA%/spotmax/.env`
///
/// The directory is created when missing. A missing or unreadable file is
/// reported as an error so the caller can decide whether the plain
/// environment is good enough.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(())
}

/// Root of everything spotmax stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotmax");
    path
}

fn required(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| error!("{} must be set", key))
}

fn with_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Address the OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> String {
    with_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify user that owns the playlists spotmax creates.
pub fn spotify_user() -> String {
    required("SPOTIFY_USER_ID")
}

pub fn spotify_client_id() -> String {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Must match the redirect URI registered for the Spotify application.
pub fn spotify_redirect_uri() -> String {
    with_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

pub fn spotify_scope() -> String {
    with_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    with_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Playlist whose shows feed the `podcasts` command.
pub fn podcast_playlist_id() -> String {
    with_default("SPOTMAX_PODCAST_PLAYLIST_ID", DEFAULT_PODCAST_PLAYLIST_ID)
}

pub fn release_radar_id() -> String {
    with_default("SPOTMAX_RELEASE_RADAR_ID", DEFAULT_RELEASE_RADAR_ID)
}

pub fn discover_weekly_id() -> String {
    with_default("SPOTMAX_DISCOVER_WEEKLY_ID", DEFAULT_DISCOVER_WEEKLY_ID)
}
