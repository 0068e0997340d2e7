use chrono::Local;

use crate::{config, error, info, spotify, success, utils, warning};

use super::token_manager;

/// Collects the latest `episodes` episodes of every show that appears in a
/// playlist of podcast episodes into a new `PCST_<stamp>` playlist.
///
/// Without `playlist_id` the configured podcast playlist is used.
pub async fn podcasts(playlist_id: Option<String>, episodes: usize) {
    let playlist_id = playlist_id.unwrap_or_else(config::podcast_playlist_id);
    let mut token_mgr = token_manager().await;

    info!("Collecting shows from {}", playlist_id);
    let items = match spotify::playlist::get_all_items(&mut token_mgr, &playlist_id).await {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    };

    let (shows, missing) = utils::show_ids(&items);
    if missing > 0 {
        warning!("{} playlist entries carry no track data.", missing);
    }

    if shows.is_empty() {
        warning!("No podcast shows found in {}.", playlist_id);
        return;
    }

    let pb = utils::spinner("Fetching episodes...");
    let mut uris: Vec<String> = Vec::new();
    for (index, show_id) in shows.iter().enumerate() {
        pb.set_message(format!(
            "Fetching episodes of show {show} ({count}/{total})",
            show = show_id,
            count = index + 1,
            total = shows.len()
        ));

        match spotify::shows::get_episodes(&mut token_mgr, show_id).await {
            Ok(list) => uris.extend(utils::latest_episode_uris(list, episodes)),
            Err(e) => pb.suspend(|| warning!("Skipping show {}: {}", show_id, e)),
        }
    }
    pb.finish_and_clear();

    if uris.is_empty() {
        warning!("No episodes found.");
        return;
    }

    let name = utils::playlist_name("PCST", Local::now().naive_local());
    let created = match spotify::playlist::create(&mut token_mgr, name).await {
        Ok(created) => created,
        Err(e) => error!("Failed to create playlist: {}", e),
    };

    match spotify::playlist::add_tracks(&mut token_mgr, &created.id, &uris).await {
        Ok(_) => success!(
            "Collected latest {} episodes of {} shows into {}.",
            episodes,
            shows.len(),
            created.name
        ),
        Err(e) => warning!("Failed to add episodes to playlist {}: {}", created.name, e),
    }
}
