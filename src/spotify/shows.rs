use crate::{
    config,
    management::TokenManager,
    types::{Episode, Page},
};

use super::get_json;

const SHOW_EPISODES_LIMIT: u32 = 50;

/// Retrieves the first page of a show's episodes. Spotify lists episodes
/// newest first, so one page is enough to find the latest ones.
pub async fn get_episodes(
    token_mgr: &mut TokenManager,
    show_id: &str,
) -> Result<Vec<Episode>, reqwest::Error> {
    let api_url = format!(
        "{uri}/shows/{id}/episodes?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = show_id,
        limit = SHOW_EPISODES_LIMIT
    );
    let page: Page<Option<Episode>> = get_json(token_mgr, &api_url).await?;
    Ok(page.items.into_iter().flatten().collect())
}
