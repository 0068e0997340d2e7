use tabled::Table;

use crate::{
    error, info,
    management::LibraryManager,
    spotify, success,
    types::LibraryPlaylist,
    utils, warning,
};

use super::token_manager;

/// Lists the user's playlists, or stores them as a JSON snapshot.
///
/// - `with_tracks` also fetches the entries of every playlist and counts them
///   in the `entries` column
/// - `store` writes the snapshot through [`LibraryManager`] instead of printing
/// - `cached` prints the last stored snapshot without touching the API
pub async fn library(with_tracks: bool, store: bool, cached: bool) {
    if cached {
        match LibraryManager::load().await {
            Ok(mgr) => {
                println!("{}", Table::new(utils::playlist_rows(mgr.playlists())));
                info!(
                    "{} playlists, {} stored entries.",
                    mgr.count_playlists(),
                    mgr.count_items()
                );
            }
            Err(e) => warning!(
                "Failed to load stored library. Run spotmax library --store first.\n Error: {}",
                e
            ),
        }
        return;
    }

    let mut token_mgr = token_manager().await;

    let pb = utils::spinner("Fetching playlists...");
    let playlists = match spotify::playlist::get_user_playlists(&mut token_mgr).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let mut library: Vec<LibraryPlaylist> = Vec::with_capacity(playlists.len());
    for (index, playlist) in playlists.iter().enumerate() {
        let items = if with_tracks {
            pb.set_message(format!(
                "Fetching tracks of {name} ({count}/{total})",
                name = playlist.name,
                count = index + 1,
                total = playlists.len()
            ));
            match spotify::playlist::get_all_items(&mut token_mgr, &playlist.id).await {
                Ok(items) => Some(items),
                Err(e) => {
                    pb.suspend(|| warning!("Skipping tracks of {}: {}", playlist.name, e));
                    None
                }
            }
        } else {
            None
        };

        library.push(LibraryPlaylist {
            playlist: playlist.clone(),
            items,
        });
    }
    pb.finish_and_clear();

    if store {
        let mgr = LibraryManager::new(library);
        match mgr.persist().await {
            Ok(path) => success!(
                "Library with {} playlists stored at {}.",
                mgr.count_playlists(),
                path.display()
            ),
            Err(e) => error!("Failed to store library: {}", e),
        }
        return;
    }

    println!("{}", Table::new(utils::playlist_rows(&library)));
    info!("Collected library with {} playlists.", library.len());
}
