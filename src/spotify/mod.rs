//! # Spotify Web API client
//!
//! Thin async wrappers around the endpoints spotmax needs. Every request is
//! authenticated through a [`TokenManager`], which refreshes the access token
//! transparently.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`playlist`] - reading playlists and their entries, creating playlists,
//!   adding tracks in batches
//! - [`albums`] - full track listings of albums
//! - [`shows`] - podcast episodes
//!
//! ## Request handling
//!
//! All calls go through [`send`], which retries `502 Bad Gateway` after ten
//! seconds and `429 Too Many Requests` after the advertised `Retry-After`
//! delay (up to [`utils::MAX_RETRY_AFTER_SECS`]). Other error statuses are
//! returned as [`reqwest::Error`].
//!
//! List endpoints return offset based pages; [`get_all_pages`] follows the
//! `next` links until the listing is exhausted.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{management::TokenManager, types::Page, utils, warning};

pub mod albums;
pub mod auth;
pub mod playlist;
pub mod shows;

const BAD_GATEWAY_BACKOFF: Duration = Duration::from_secs(10);

/// Sends the request built by `build` with a fresh bearer token.
pub(crate) async fn send<F>(
    token_mgr: &mut TokenManager,
    build: F,
) -> Result<Response, reqwest::Error>
where
    F: Fn(&Client, &str) -> RequestBuilder,
{
    let client = Client::new();

    loop {
        let token = token_mgr.get_valid_token().await;
        let response = build(&client, &token).send().await?;

        match response.status() {
            StatusCode::BAD_GATEWAY => {
                sleep(BAD_GATEWAY_BACKOFF).await;
                continue; // retry
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = utils::parse_retry_after(
                    response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok()),
                );
                if retry_after <= utils::MAX_RETRY_AFTER_SECS {
                    sleep(Duration::from_secs(retry_after.max(1))).await;
                    continue; // retry
                }
                warning!(
                    "Rate limited for {} seconds. Try again later.",
                    retry_after
                );
            }
            _ => {}
        }

        return response.error_for_status();
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    token_mgr: &mut TokenManager,
    url: &str,
) -> Result<T, reqwest::Error> {
    let response = send(token_mgr, |client, token| client.get(url).bearer_auth(token)).await?;
    response.json::<T>().await
}

/// Collects the items of every page starting at `url`.
pub(crate) async fn get_all_pages<T: DeserializeOwned>(
    token_mgr: &mut TokenManager,
    url: &str,
) -> Result<Vec<T>, reqwest::Error> {
    let mut items = Vec::new();
    let mut next = Some(url.to_string());

    while let Some(url) = next {
        let page: Page<T> = get_json(token_mgr, &url).await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}
