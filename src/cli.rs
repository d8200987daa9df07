use std::io::Write;

use clap::{CommandFactory, Parser};
use log::info;

use crate::clients::{
    entities::SearchKind,
    errors::Result,
    service::MusicService,
};
use crate::display::write_profile;
use crate::menu::InteractiveMenu;
use crate::search::{self, SearchRequest};
use crate::terminal::Input;

const EXAMPLES: &str = "\
Examples:
  rspotty -t track -q \"Bohemian Rhapsody\"
  rspotty -t track -q \"Bohemian Rhapsody\" -a \"Queen\"
  rspotty -t album -q \"Dark Side of the Moon\" -l 3
  rspotty -t playlist -q \"workout\" -d
  rspotty -i
  rspotty -q \"Bohemian Rhapsody\" -r
  rspotty -q \"Bohemian Rhapsody\" -k
  rspotty -q \"Bohemian Rhapsody\" -p
  rspotty -s
  rspotty -u spotify";

/// Command-line flags.
#[derive(Parser, Debug)]
#[command(name = "rspotty")]
#[command(
    version,
    about = "A CLI tool to search and play Spotify tracks, albums, and playlists.",
    long_about = None,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Type of search: track, album, or playlist
    #[arg(short = 't', long = "type", default_value = "track")]
    pub search_type: String,

    /// Search query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Artist name to filter results (only for track search)
    #[arg(short, long, default_value = "")]
    pub artist: String,

    /// Number of results to display
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,

    /// Show detailed information about the results
    #[arg(short, long)]
    pub details: bool,

    /// Run in interactive mode with a menu interface
    #[arg(short, long)]
    pub interactive: bool,

    /// Return to a results menu after viewing search results
    #[arg(short, long)]
    pub return_to_menu: bool,

    /// Keep music playing when exiting the player interface
    #[arg(short, long)]
    pub keep_playing: bool,

    /// Automatically play the first result and exit
    #[arg(short = 'p', long)]
    pub auto_play: bool,

    /// Stop the currently playing track
    #[arg(short, long)]
    pub stop: bool,

    /// Spotify user ID to look up profile information
    #[arg(short, long, default_value = "")]
    pub user: String,
}

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The requested action ran to completion.
    Done,
    /// Flags failed validation; the error and usage were printed.
    Usage,
}

/// Print the generated help text to `err`.
pub fn write_usage<W: Write>(err: &mut W) -> Result<()> {
    let help = Cli::command().render_help();
    writeln!(err, "{help}")?;
    Ok(())
}

/// Route parsed flags to a profile lookup, stop, the interactive menu or a
/// search.
///
/// Normal output goes to `out`, validation errors and usage to `err`.
pub async fn dispatch<S, I, W, E>(
    cli: &Cli,
    service: &S,
    input: &mut I,
    out: &mut W,
    err: &mut E,
) -> Result<Outcome>
where
    S: MusicService,
    I: Input + ?Sized,
    W: Write,
    E: Write,
{
    if !cli.user.is_empty() {
        info!("Looking up profile for {}", cli.user);
        let profile = service.user_profile(&cli.user).await?;
        write_profile(out, &profile)?;
        return Ok(Outcome::Done);
    }

    if cli.stop {
        service.stop().await?;
        writeln!(out, "Playback stopped.")?;
        return Ok(Outcome::Done);
    }

    if cli.interactive {
        let mut menu = InteractiveMenu::new(service, input, out);
        menu.set_keep_playing(cli.keep_playing);
        menu.set_limit(cli.limit);
        menu.run().await?;
        return Ok(Outcome::Done);
    }

    let Ok(kind) = cli.search_type.parse::<SearchKind>() else {
        writeln!(
            err,
            "Error: invalid search type '{}'. Must be one of: track, album, playlist",
            cli.search_type
        )?;
        write_usage(err)?;
        return Ok(Outcome::Usage);
    };

    if cli.query.trim().is_empty() {
        writeln!(err, "Error: missing search query")?;
        write_usage(err)?;
        return Ok(Outcome::Usage);
    }

    let request = SearchRequest {
        kind,
        query: cli.query.clone(),
        artist: cli.artist.clone(),
        limit: cli.limit,
        details: cli.details,
        keep_playing: cli.keep_playing,
        auto_play: cli.auto_play,
        return_to_menu: cli.return_to_menu,
    };
    search::run(service, &request, input, out).await?;
    Ok(Outcome::Done)
}
