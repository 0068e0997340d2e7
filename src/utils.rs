use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDateTime;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    shuffle::BinStrategy,
    types::{AlbumRef, Episode, LibraryPlaylist, PlaylistItem, PlaylistTableRow},
};

/// Upper bound of URIs per "add items to playlist" request.
pub const SPOTIFY_MAX_TRACKS_PER_REQUEST: usize = 100;

/// Retry-After values above this many seconds are not waited for.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Generates a random PKCE code verifier of 128 alphanumeric characters.
///
/// The verifier is kept in the shared auth state until the callback
/// exchanges the authorization code.
pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

/// Derives the S256 PKCE code challenge for `verifier`.
///
/// # Arguments
///
/// * `verifier` - Code verifier from [`generate_code_verifier`]
///
/// # Returns
///
/// The SHA256 digest of the verifier, encoded as URL-safe base64 without
/// padding (43 characters).
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Formats `at` as `YYYYmmdd-HHMMSS`, the suffix of every created playlist.
pub fn stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d-%H%M%S").to_string()
}

/// Name for a playlist created by spotmax: `{base}_{stamp}`.
pub fn playlist_name(base: &str, at: NaiveDateTime) -> String {
    format!("{}_{}", base, stamp(at))
}

/// Extracts a playlist ID from a bare ID, a `spotify:playlist:` URI or an
/// `open.spotify.com/playlist/...` link.
pub fn parse_playlist_id(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("playlist id cannot be empty".to_string());
    }

    let id = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some((_, rest)) = input.split_once("/playlist/") {
        rest.split(['?', '/']).next().unwrap_or_default()
    } else {
        input
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid playlist id '{}'", input));
    }

    Ok(id.to_string())
}

/// clap value parser for `--strategy`.
pub fn parse_bin_strategy(input: &str) -> Result<BinStrategy, String> {
    input.parse()
}

/// Splits `uris` into request-sized batches of at most
/// [`SPOTIFY_MAX_TRACKS_PER_REQUEST`], keeping their order.
pub fn track_batches(uris: &[String]) -> std::slice::Chunks<'_, String> {
    uris.chunks(SPOTIFY_MAX_TRACKS_PER_REQUEST)
}

/// Seconds to wait according to a `Retry-After` header value. Missing or
/// malformed values mean no wait.
pub fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Turns playlist entries into `(track uri, album id)` pairs for the shuffle.
///
/// Entries without a track, local files (no track id) and tracks without an
/// album id cannot be re-added or grouped; they are dropped and counted in
/// the second return value.
pub fn shuffle_input(items: &[PlaylistItem]) -> (Vec<(String, String)>, usize) {
    let mut pairs = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for item in items {
        let pair = item.track.as_ref().and_then(|track| {
            track.id.as_ref()?;
            let album_id = track.album.as_ref()?.id.clone()?;
            Some((track.uri.clone(), album_id))
        });

        match pair {
            Some(pair) => pairs.push(pair),
            None => skipped += 1,
        }
    }

    (pairs, skipped)
}

/// Track and album name per track URI, used to print a shuffled order.
pub fn track_labels(items: &[PlaylistItem]) -> HashMap<String, (String, String)> {
    items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(|track| {
            let album = track
                .album
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default();
            (track.uri.clone(), (track.name.clone(), album))
        })
        .collect()
}

/// Distinct albums of the playlist entries, largest album first.
///
/// Albums with the same track count keep their playlist order.
pub fn albums_by_size(items: &[PlaylistItem]) -> Vec<AlbumRef> {
    let mut seen_ids = HashSet::new();
    let mut albums: Vec<AlbumRef> = items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .filter(|track| track.kind != "episode")
        .filter_map(|track| track.album.clone())
        .filter(|album| match &album.id {
            Some(id) => seen_ids.insert(id.clone()),
            None => false,
        })
        .collect();

    albums.sort_by(|a, b| b.total_tracks.cmp(&a.total_tracks));
    albums
}

/// IDs of the podcast shows referenced by the playlist entries, in order of
/// first appearance. The second value counts entries without a track.
pub fn show_ids(items: &[PlaylistItem]) -> (Vec<String>, usize) {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    let mut missing = 0;

    for item in items {
        let Some(track) = &item.track else {
            missing += 1;
            continue;
        };

        for artist in &track.artists {
            if artist.kind != "show" {
                continue;
            }
            if let Some(id) = &artist.id {
                if seen.insert(id.clone()) {
                    ids.push(id.clone());
                }
            }
        }
    }

    (ids, missing)
}

/// URIs of the `n` most recently released episodes.
pub fn latest_episode_uris(mut episodes: Vec<Episode>, n: usize) -> Vec<String> {
    // ISO dates (YYYY, YYYY-MM or YYYY-MM-DD) sort correctly as strings
    episodes.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    episodes
        .into_iter()
        .take(n)
        .map(|e| format!("spotify:episode:{}", e.id))
        .collect()
}

/// Table rows for the `library` command, sorted by name ignoring case.
///
/// The owner column falls back to the owner ID when the owner has no display
/// name. Playlists stored without their entries show `-` as entry count.
pub fn playlist_rows(library: &[LibraryPlaylist]) -> Vec<PlaylistTableRow> {
    let mut rows: Vec<PlaylistTableRow> = library
        .iter()
        .map(|entry| {
            let p = &entry.playlist;
            PlaylistTableRow {
                name: p.name.clone(),
                tracks: p.tracks.total,
                entries: entry
                    .items
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |items| items.len().to_string()),
                owner: p
                    .owner
                    .display_name
                    .clone()
                    .unwrap_or_else(|| p.owner.id.clone()),
                id: p.id.clone(),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    rows
}

/// Starts a steadily ticking spinner showing `message`.
///
/// Callers update it with `set_message` and must clear it with
/// `finish_and_clear` before printing results.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
