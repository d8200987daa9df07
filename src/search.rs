use std::io::Write;

use log::debug;

use crate::clients::{
    entities::{SearchItem, SearchKind},
    errors::Result,
    service::MusicService,
};
use crate::display::{result_line, write_results};
use crate::terminal::{Input, Selection, parse_selection, prompt};

/// One non-interactive search, as described by the command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// What to search for
    pub kind: SearchKind,
    /// Free-text query, never empty once validated
    pub query: String,
    /// Only applied to track searches.
    pub artist: String,
    /// Maximum number of hits printed
    pub limit: u32,
    /// Print the detail lines under each hit
    pub details: bool,
    /// Do not pause playback when leaving the player
    pub keep_playing: bool,
    /// Play the first hit and return
    pub auto_play: bool,
    /// Offer the numbered results menu after printing
    pub return_to_menu: bool,
}

impl SearchRequest {
    /// The query string sent to the search endpoint.
    pub fn remote_query(&self) -> String {
        let artist = self.artist.trim();
        if self.kind == SearchKind::Track && !artist.is_empty() {
            format!("{} artist:{artist}", self.query)
        } else {
            self.query.clone()
        }
    }
}

enum PlayerAction {
    Back { stopped: bool },
    Quit,
}

// Shown after a selection starts playing; `None` at end of input.
fn player_prompt<I, W>(input: &mut I, out: &mut W, item: &SearchItem) -> Result<Option<String>>
where
    I: Input + ?Sized,
    W: Write,
{
    writeln!(out, "\nNow playing: {}", item.name())?;
    let answer = prompt(
        input,
        out,
        "[Enter] back to results, [s] stop playback, [q] quit: ",
    )?;
    Ok(answer.map(|a| a.to_ascii_lowercase()))
}

async fn player<S, I, W>(
    service: &S,
    input: &mut I,
    out: &mut W,
    item: &SearchItem,
) -> Result<PlayerAction>
where
    S: MusicService,
    I: Input + ?Sized,
    W: Write,
{
    loop {
        let Some(answer) = player_prompt(input, out, item)? else {
            return Ok(PlayerAction::Quit);
        };
        match answer.as_str() {
            "q" => return Ok(PlayerAction::Quit),
            "" | "b" => return Ok(PlayerAction::Back { stopped: false }),
            "s" => {
                service.stop().await?;
                writeln!(out, "Playback stopped.")?;
                return Ok(PlayerAction::Back { stopped: true });
            }
            other => writeln!(out, "Unknown option '{other}'")?,
        }
    }
}

/// Search, print the hits and act on them according to `request`.
///
/// API errors abort the flow and are returned to the caller.
pub async fn run<S, I, W>(
    service: &S,
    request: &SearchRequest,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    S: MusicService,
    I: Input + ?Sized,
    W: Write,
{
    let query = request.remote_query();
    debug!("Running {} search for {query:?}", request.kind);
    writeln!(
        out,
        "Searching for {}s matching '{}'...",
        request.kind, request.query
    )?;

    let mut items = service.search(request.kind, &query, request.limit).await?;
    items.truncate(request.limit as usize);

    if items.is_empty() {
        writeln!(out, "No {}s found for '{}'", request.kind, request.query)?;
        return Ok(());
    }

    writeln!(out)?;
    write_results(out, &items, request.details)?;

    let mut playing = false;
    if request.auto_play {
        service.play(&items[0]).await?;
        writeln!(out, "\nNow playing: {}", result_line(1, &items[0]))?;
        playing = true;
        if !request.return_to_menu {
            return Ok(());
        }
    }

    if request.return_to_menu {
        playing = results_menu(service, &items, request.details, playing, input, out).await?;
        if playing && !request.keep_playing {
            service.stop().await?;
            writeln!(out, "Playback stopped.")?;
        }
    }
    Ok(())
}

// Returns whether something is still playing when the menu is left.
async fn results_menu<S, I, W>(
    service: &S,
    items: &[SearchItem],
    details: bool,
    mut playing: bool,
    input: &mut I,
    out: &mut W,
) -> Result<bool>
where
    S: MusicService,
    I: Input + ?Sized,
    W: Write,
{
    loop {
        let message = format!("\nSelect a number to play (1-{}, 0 to exit): ", items.len());
        let Some(answer) = prompt(input, out, &message)? else {
            return Ok(playing);
        };

        match parse_selection(&answer, items.len()) {
            Selection::Back => return Ok(playing),
            Selection::Invalid => {
                writeln!(out, "Invalid selection '{answer}'")?;
            }
            Selection::Item(index) => {
                let item = &items[index];
                service.play(item).await?;
                playing = true;
                match player(service, input, out, item).await? {
                    PlayerAction::Quit => return Ok(playing),
                    PlayerAction::Back { stopped } => {
                        playing = !stopped;
                        writeln!(out)?;
                        write_results(out, items, details)?;
                    }
                }
            }
        }
    }
}
