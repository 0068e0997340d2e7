//! spotmax library
//!
//! Helpers for reshaping Spotify playlists from the command line: expanding a
//! playlist into the full albums of its tracks, collecting the latest podcast
//! episodes, dumping the playlist library, and re-ordering a playlist so that
//! tracks of the same album are spread as far apart as possible.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command implementations
//! - `config` - Environment based configuration
//! - `management` - Token and library persistence
//! - `server` - Local HTTP server for OAuth callbacks
//! - `shuffle` - The maximum-distance grouped shuffle
//! - `spotify` - Spotify Web API client
//! - `types` - API payloads and table rows
//! - `utils` - Pure helpers shared by the commands

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod shuffle;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by the command layer.
///
/// Boxes any error that is `Send + Sync` so HTTP, persistence and shuffle
/// failures can all be propagated with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue `o` marker.
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red `!` marker and exits with code 1.
///
/// Only meant for failures the command cannot recover from. The expansion
/// has type `!`, so it can stand in for any value:
///
/// ```
/// let user = std::env::var("SPOTIFY_USER_ID")
///     .unwrap_or_else(|_| error!("SPOTIFY_USER_ID must be set"));
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning with a yellow `!` marker.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
