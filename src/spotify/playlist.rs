use crate::{
    config,
    management::TokenManager,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, Playlist, PlaylistItem,
    },
    utils,
};

use super::{get_all_pages, get_json, send};

/// Page size of `/playlists/{id}/tracks` (API maximum).
const PLAYLIST_ITEMS_LIMIT: u32 = 100;
/// Page size of `/me/playlists` (API maximum).
const USER_PLAYLISTS_LIMIT: u32 = 50;

/// Fetches playlist metadata (name, owner, track count).
pub async fn get(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );
    get_json(token_mgr, &api_url).await
}

/// Fetches every entry of a playlist, following pagination until exhausted.
pub async fn get_all_items(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = PLAYLIST_ITEMS_LIMIT
    );
    get_all_pages(token_mgr, &api_url).await
}

/// Fetches all playlists of the current user. The API does not expose
/// folders, so the result is flat.
pub async fn get_user_playlists(
    token_mgr: &mut TokenManager,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = USER_PLAYLISTS_LIMIT
    );
    get_all_pages(token_mgr, &api_url).await
}

/// Creates a private, non-collaborative playlist for the configured user.
pub async fn create(
    token_mgr: &mut TokenManager,
    name: String,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = &config::spotify_user()
    );
    let body = CreatePlaylistRequest {
        name,
        description: "Created by spotmax".to_string(),
        public: false,
        collaborative: false,
    };

    let response = send(token_mgr, |client, token| {
        client.post(&api_url).bearer_auth(token).json(&body)
    })
    .await?;
    response.json::<CreatePlaylistResponse>().await
}

/// Appends `uris` to the playlist in batches of at most
/// [`utils::SPOTIFY_MAX_TRACKS_PER_REQUEST`] (see [`utils::track_batches`]),
/// preserving their order.
///
/// Returns the snapshot ID after the last batch, `None` if `uris` is empty.
pub async fn add_tracks(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    uris: &[String],
) -> Result<Option<String>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let mut snapshot_id = None;
    for chunk in utils::track_batches(uris) {
        let body = AddTrackToPlaylistRequest {
            uris: chunk.to_vec(),
        };
        let response = send(token_mgr, |client, token| {
            client.post(&api_url).bearer_auth(token).json(&body)
        })
        .await?;
        let json = response.json::<AddTrackToPlaylistResponse>().await?;
        snapshot_id = Some(json.snapshot_id);
    }

    Ok(snapshot_id)
}
