use chrono::Local;
use tabled::Table;

use crate::{
    error, info,
    shuffle::{BinStrategy, ShuffleError, distance_shuffle},
    spotify, success,
    types::ShuffleTableRow,
    utils, warning,
};

use super::token_manager;

/// Orders `(track uri, album id)` pairs with the max-distance shuffle.
///
/// With an explicit `strategy` the result of that strategy is returned as is.
/// Without one, [`BinStrategy::FullRange`] is tried first and, if it starves
/// an album, the fault is reported and [`BinStrategy::Unassigned`] is used
/// instead. Returns the order together with the strategy that produced it.
pub fn shuffle_tracks(
    pairs: &[(String, String)],
    strategy: Option<BinStrategy>,
) -> Result<(Vec<String>, BinStrategy), ShuffleError> {
    if let Some(strategy) = strategy {
        return distance_shuffle(pairs, strategy).map(|order| (order, strategy));
    }

    match distance_shuffle(pairs, BinStrategy::FullRange) {
        Ok(order) => Ok((order, BinStrategy::FullRange)),
        Err(e) => {
            warning!(
                "{} strategy failed: {}. Retrying with {}.",
                BinStrategy::FullRange,
                e,
                BinStrategy::Unassigned
            );
            distance_shuffle(pairs, BinStrategy::Unassigned)
                .map(|order| (order, BinStrategy::Unassigned))
        }
    }
}

/// Copies a playlist into a new one whose tracks are ordered so that tracks
/// of the same album are as far apart as possible.
///
/// The new playlist is named `<source name>_shfl_<stamp>`. With `dry_run` the
/// new order is printed instead and nothing is created.
pub async fn shuffle(playlist_id: String, strategy: Option<BinStrategy>, dry_run: bool) {
    let mut token_mgr = token_manager().await;

    let playlist = match spotify::playlist::get(&mut token_mgr, &playlist_id).await {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    };

    info!("Shuffling {} to a new playlist", playlist.name);

    let pb = utils::spinner("Fetching playlist tracks...");
    let items = spotify::playlist::get_all_items(&mut token_mgr, &playlist_id).await;
    pb.finish_and_clear();

    let items = match items {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch tracks of {}: {}", playlist.name, e),
    };

    let (pairs, skipped) = utils::shuffle_input(&items);
    if skipped > 0 {
        warning!(
            "Skipping {} entries that are local files, unavailable or without album.",
            skipped
        );
    }

    if pairs.is_empty() {
        warning!("Nothing to shuffle in {}.", playlist.name);
        return;
    }

    let (order, used) = match shuffle_tracks(&pairs, strategy) {
        Ok(result) => result,
        Err(e) => error!("Shuffle failed integrity check: {}", e),
    };

    success!(
        "Shuffled {} tracks using the {} strategy.",
        order.len(),
        used
    );

    if dry_run {
        let labels = utils::track_labels(&items);
        let rows: Vec<ShuffleTableRow> = order
            .iter()
            .enumerate()
            .map(|(index, uri)| {
                let (track, album) = labels.get(uri).cloned().unwrap_or_default();
                ShuffleTableRow {
                    position: index + 1,
                    track,
                    album,
                }
            })
            .collect();
        println!("{}", Table::new(rows));
        return;
    }

    let name = utils::playlist_name(
        &format!("{}_shfl", playlist.name),
        Local::now().naive_local(),
    );
    let created = match spotify::playlist::create(&mut token_mgr, name).await {
        Ok(created) => created,
        Err(e) => error!("Failed to create playlist: {}", e),
    };

    match spotify::playlist::add_tracks(&mut token_mgr, &created.id, &order).await {
        Ok(_) => success!("Completed max-distance shuffle into {}.", created.name),
        Err(e) => warning!("Failed to add tracks to playlist {}: {}", created.name, e),
    }
}
