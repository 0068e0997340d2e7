use crate::{config, management::TokenManager, types::Track};

use super::get_all_pages;

const ALBUM_TRACKS_LIMIT: u32 = 50;

/// Retrieves the complete track listing of an album in album order.
pub async fn get_all_tracks(
    token_mgr: &mut TokenManager,
    album_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = album_id,
        limit = ALBUM_TRACKS_LIMIT
    );
    get_all_pages(token_mgr, &api_url).await
}
