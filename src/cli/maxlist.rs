use chrono::Local;
use clap::ValueEnum;

use crate::{config, error, info, spotify, success, utils, warning};

use super::token_manager;

/// Spotify generated playlists that `maxlist` knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    ReleaseRadar,
    DiscoverWeekly,
}

impl Preset {
    /// Source playlist ID and name prefix of the preset.
    pub fn source(&self) -> (String, &'static str) {
        match self {
            Preset::ReleaseRadar => (config::release_radar_id(), "rrad"),
            Preset::DiscoverWeekly => (config::discover_weekly_id(), "dsco"),
        }
    }
}

/// Creates a playlist holding the complete albums of every track in
/// `playlist_id`.
///
/// Albums are deduplicated and ordered by their size, largest first; each
/// album keeps its own track order. Episodes and tracks without an album are
/// ignored. Albums whose listing cannot be fetched are skipped with a warning.
pub async fn maxlist(playlist_id: String, prefix: String) {
    let mut token_mgr = token_manager().await;

    info!("Collecting albums from tracks in {}", playlist_id);
    let items = match spotify::playlist::get_all_items(&mut token_mgr, &playlist_id).await {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    };

    let albums = utils::albums_by_size(&items);
    if albums.is_empty() {
        warning!("Playlist {} has no album tracks.", playlist_id);
        return;
    }

    let pb = utils::spinner("Fetching album tracks...");
    let mut uris: Vec<String> = Vec::new();
    for (index, album) in albums.iter().enumerate() {
        let Some(album_id) = &album.id else {
            continue;
        };

        pb.set_message(format!(
            "Fetching tracks of {album} ({count}/{total})",
            album = album.name,
            count = index + 1,
            total = albums.len()
        ));

        match spotify::albums::get_all_tracks(&mut token_mgr, album_id).await {
            Ok(tracks) => uris.extend(
                tracks
                    .into_iter()
                    .filter(|t| t.id.is_some())
                    .map(|t| t.uri),
            ),
            Err(e) => {
                pb.suspend(|| warning!("Skipping album {}: {}", album.name, e));
            }
        }
    }
    pb.finish_and_clear();

    success!(
        "Collected {} tracks from {} albums.",
        uris.len(),
        albums.len()
    );

    let name = utils::playlist_name(&prefix, Local::now().naive_local());
    let created = match spotify::playlist::create(&mut token_mgr, name).await {
        Ok(created) => created,
        Err(e) => error!("Failed to create playlist: {}", e),
    };

    match spotify::playlist::add_tracks(&mut token_mgr, &created.id, &uris).await {
        Ok(_) => success!("Playlist {} created.", created.name),
        Err(e) => warning!("Failed to add tracks to playlist {}: {}", created.name, e),
    }
}
