use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotmax::{cli, config, error, shuffle::BinStrategy, types::PkceToken, utils, warning};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Get playlist with the full albums for each track in a playlist
    Maxlist(MaxlistOptions),

    /// Shuffle a playlist into a new one, spacing songs of the same album as widely apart as possible
    Shuffle(ShuffleOptions),

    /// Collect the latest episodes of every show in a podcast playlist
    Podcasts(PodcastsOptions),

    /// List or store all playlists of the user
    Library(LibraryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct MaxlistOptions {
    /// Source playlist (ID, URI or link)
    #[clap(
        value_parser = utils::parse_playlist_id,
        required_unless_present = "preset",
        conflicts_with = "preset"
    )]
    pub playlist: Option<String>,

    /// Prefix of the new playlist name
    #[clap(required_unless_present = "preset", conflicts_with = "preset")]
    pub prefix: Option<String>,

    /// Use a Spotify generated playlist as source
    #[clap(long, value_enum)]
    pub preset: Option<cli::Preset>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Playlist to shuffle (ID, URI or link)
    #[clap(value_parser = utils::parse_playlist_id)]
    pub playlist: String,

    /// Binning strategy; without it full-range is tried first and unassigned is the fallback
    #[clap(long, value_parser = utils::parse_bin_strategy)]
    pub strategy: Option<BinStrategy>,

    /// Print the new order instead of creating a playlist
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PodcastsOptions {
    /// Playlist of podcast episodes (defaults to SPOTMAX_PODCAST_PLAYLIST_ID)
    #[clap(value_parser = utils::parse_playlist_id)]
    pub playlist: Option<String>,

    /// Number of latest episodes per show
    #[clap(short = 'n', long, default_value_t = 3)]
    pub episodes: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct LibraryOptions {
    /// Also fetch the tracks of every playlist
    #[clap(long)]
    pub tracks: bool,

    /// Store the library as JSON instead of printing it
    #[clap(long, conflicts_with = "cached")]
    pub store: bool,

    /// Show the last stored library without calling the API
    #[clap(long)]
    pub cached: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file, using the environment only. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Maxlist(opt) => {
            let (playlist, prefix) = match (opt.preset, opt.playlist, opt.prefix) {
                (Some(preset), _, _) => {
                    let (playlist, prefix) = preset.source();
                    (playlist, prefix.to_string())
                }
                (None, Some(playlist), Some(prefix)) => (playlist, prefix),
                _ => error!("Either a playlist and prefix or --preset is required."),
            };
            cli::maxlist(playlist, prefix).await
        }
        Command::Shuffle(opt) => cli::shuffle(opt.playlist, opt.strategy, opt.dry_run).await,
        Command::Podcasts(opt) => cli::podcasts(opt.playlist, opt.episodes).await,
        Command::Library(opt) => cli::library(opt.tracks, opt.store, opt.cached).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
