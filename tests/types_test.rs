use serde_json::json;
use spotmax::types::{
    LibraryPlaylist, Page, Playlist, PlaylistItem, TokenResponse,
};
use spotmax::utils::shuffle_input;

#[test]
fn test_playlist_item_with_track() {
    let value = json!({
        "added_at": "2024-01-05T10:00:00Z",
        "track": {
            "id": "4uLU6hMCjMI75M1A2tKUQC",
            "name": "Never Gonna Give You Up",
            "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
            "type": "track",
            "popularity": 80,
            "album": {
                "id": "6N9PS4QXF1D0OWPk0Sxtb4",
                "name": "Whenever You Need Somebody",
                "total_tracks": 10,
                "album_type": "album"
            },
            "artists": [
                { "id": "0gxyHStUsqpMadRV0Di1Qt", "name": "Rick Astley", "type": "artist" }
            ]
        }
    });

    let item: PlaylistItem = serde_json::from_value(value).unwrap();
    let track = item.track.unwrap();
    assert_eq!(track.kind, "track");
    assert_eq!(track.id.as_deref(), Some("4uLU6hMCjMI75M1A2tKUQC"));

    let album = track.album.unwrap();
    assert_eq!(album.total_tracks, 10);
    assert_eq!(track.artists[0].kind, "artist");
}

#[test]
fn test_playlist_item_local_file() {
    let value = json!({
        "added_at": "2024-01-05T10:00:00Z",
        "track": {
            "id": null,
            "name": "Demo",
            "uri": "spotify:local:Band:Tape:Demo:200",
            "type": "track",
            "album": { "id": null, "name": "Tape" },
            "artists": [{ "id": null, "name": "Band", "type": "artist" }]
        }
    });

    let item: PlaylistItem = serde_json::from_value(value).unwrap();
    let track = item.track.as_ref().unwrap();
    assert!(track.id.is_none());
    assert_eq!(track.album.as_ref().unwrap().total_tracks, 0);

    let (pairs, skipped) = shuffle_input(&[item]);
    assert!(pairs.is_empty());
    assert_eq!(skipped, 1);
}

#[test]
fn test_playlist_item_without_track() {
    let item: PlaylistItem = serde_json::from_value(json!({ "track": null })).unwrap();
    assert!(item.track.is_none());
    assert!(item.added_at.is_none());
}

#[test]
fn test_playlist_item_episode() {
    let value = json!({
        "track": {
            "id": "512ojhOuo1ktJprKbVcKyQ",
            "name": "Episode 42",
            "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ",
            "type": "episode",
            "episode": true,
            "album": { "id": "38bS44xjbVVZ3No3ByF1dJ", "name": "Some Show" },
            "artists": [
                { "id": "38bS44xjbVVZ3No3ByF1dJ", "name": "Some Show", "type": "show" }
            ]
        }
    });

    let item: PlaylistItem = serde_json::from_value(value).unwrap();
    let track = item.track.unwrap();
    assert_eq!(track.kind, "episode");
    assert_eq!(track.artists[0].kind, "show");
}

#[test]
fn test_page_with_next() {
    let value = json!({
        "href": "https://api.spotify.com/v1/playlists/abc/tracks?offset=0&limit=2",
        "items": [ { "track": null }, { "track": null } ],
        "limit": 2,
        "next": "https://api.spotify.com/v1/playlists/abc/tracks?offset=2&limit=2",
        "offset": 0,
        "previous": null,
        "total": 5
    });

    let page: Page<PlaylistItem> = serde_json::from_value(value).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, Some(5));
    assert!(page.next.unwrap().contains("offset=2"));

    let last: Page<PlaylistItem> =
        serde_json::from_value(json!({ "items": [], "next": null })).unwrap();
    assert!(last.next.is_none());
    assert!(last.total.is_none());
}

#[test]
fn test_playlist_and_library_snapshot() {
    let value = json!({
        "id": "37i9dQZEVXbuX4MySjIacD",
        "name": "Release Radar",
        "description": "Catch all the latest music",
        "public": false,
        "snapshot_id": "MTY5",
        "owner": { "id": "spotify", "display_name": "Spotify" },
        "tracks": { "href": "https://api.spotify.com/v1/playlists/x/tracks", "total": 30 }
    });

    let playlist: Playlist = serde_json::from_value(value).unwrap();
    assert_eq!(playlist.tracks.total, 30);
    assert!(!playlist.collaborative);
    assert_eq!(playlist.owner.display_name.as_deref(), Some("Spotify"));

    let entry = LibraryPlaylist {
        playlist,
        items: None,
    };
    let stored = serde_json::to_value(&entry).unwrap();
    assert!(stored.get("items").is_none());

    let restored: LibraryPlaylist = serde_json::from_value(stored).unwrap();
    assert!(restored.items.is_none());
    assert_eq!(restored.playlist.name, "Release Radar");
}

#[test]
fn test_token_response_defaults() {
    let refresh: TokenResponse =
        serde_json::from_value(json!({ "access_token": "abc", "token_type": "Bearer" }))
            .unwrap();
    assert!(refresh.refresh_token.is_none());
    assert_eq!(refresh.scope, "");
    assert_eq!(refresh.expires_in, 3600);

    let exchange: TokenResponse = serde_json::from_value(json!({
        "access_token": "abc",
        "refresh_token": "def",
        "scope": "playlist-read-private",
        "expires_in": 1800
    }))
    .unwrap();
    assert_eq!(exchange.refresh_token.as_deref(), Some("def"));
    assert_eq!(exchange.expires_in, 1800);
}
