//! # CLI Module
//!
//! User-facing commands of spotmax. Each command loads the cached token,
//! talks to Spotify through [`crate::spotify`], and reports progress with the
//! crate's `info!`/`success!`/`warning!`/`error!` macros.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE login, caches the token
//! - [`maxlist`] - playlist of the full albums behind every track of a playlist
//! - [`shuffle`] - copy of a playlist with tracks of the same album spread apart
//! - [`podcasts`] - latest episodes of every show referenced by a playlist
//! - [`library`] - list or store all playlists of the user
//!
//! ## Usage
//!
//! ```bash
//! spotmax auth
//! spotmax maxlist --preset release-radar
//! spotmax shuffle https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! spotmax podcasts -n 2
//! spotmax library --tracks --store
//! ```
//!
//! Commands never modify an existing playlist; results always go into a newly
//! created private playlist named `<base>_<YYYYmmdd-HHMMSS>`.

mod auth;
mod library;
mod maxlist;
mod podcasts;
mod shuffle;

pub use auth::auth;
pub use library::library;
pub use maxlist::{Preset, maxlist};
pub use podcasts::podcasts;
pub use shuffle::{shuffle, shuffle_tracks};

use crate::{error, management::TokenManager};

async fn token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => error!(
            "Failed to load token. Please run spotmax auth\n Error: {}",
            e
        ),
    }
}
