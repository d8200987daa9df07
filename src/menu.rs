use std::io::Write;

use log::debug;

use crate::clients::{
    entities::{SearchItem, SearchKind},
    errors::{Error, Result},
    service::MusicService,
};
use crate::display::{result_line, write_results};
use crate::terminal::{Input, Selection, parse_selection, prompt};

/// Results requested per search unless [`InteractiveMenu::set_limit`] says otherwise.
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    MainMenu,
    SearchPrompt(SearchKind),
    ResultsList,
    Playing(usize),
    Quit,
}

/// Blocking, numbered-choice menu over a [`MusicService`].
///
/// Runs until the user quits or input ends. Remote failures are reported and
/// the menu falls back to the main screen; only terminal I/O errors end it.
pub struct InteractiveMenu<'a, S, I: ?Sized, W> {
    service: &'a S,
    input: &'a mut I,
    out: &'a mut W,
    keep_playing: bool,
    limit: u32,
    results: Vec<SearchItem>,
    started: bool,
}

impl<'a, S, I, W> InteractiveMenu<'a, S, I, W>
where
    S: MusicService,
    I: Input + ?Sized,
    W: Write,
{
    /// Menu reading from `input` and writing to `out`.
    pub fn new(service: &'a S, input: &'a mut I, out: &'a mut W) -> Self {
        InteractiveMenu {
            service,
            input,
            out,
            keep_playing: false,
            limit: DEFAULT_LIMIT,
            results: Vec::new(),
            started: false,
        }
    }

    /// Leave playback running after quitting.
    pub fn set_keep_playing(&mut self, keep_playing: bool) {
        self.keep_playing = keep_playing;
    }

    /// Maximum number of results per search.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    /// Loop until quit or end of input, then stop playback unless kept.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to rspotty! Search and play music from Spotify.")?;

        let mut state = MenuState::MainMenu;
        while state != MenuState::Quit {
            debug!("Menu state: {state:?}");
            state = match state {
                MenuState::MainMenu => self.main_menu().await?,
                MenuState::SearchPrompt(kind) => self.search_prompt(kind).await?,
                MenuState::ResultsList => self.results_list().await?,
                MenuState::Playing(index) => self.playing(index).await?,
                MenuState::Quit => MenuState::Quit,
            };
        }

        if self.started && !self.keep_playing {
            if let Err(e) = self.service.stop().await {
                writeln!(self.out, "Error stopping playback: {e}")?;
            }
        }
        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    // Print a remote failure and go back to the main menu.
    fn recover(&mut self, err: Error) -> Result<MenuState> {
        match err {
            Error::Io(e) => Err(Error::Io(e)),
            other => {
                writeln!(self.out, "Error: {other}")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    async fn stop(&mut self) -> Result<()> {
        self.service.stop().await?;
        self.started = false;
        writeln!(self.out, "Playback stopped.")?;
        Ok(())
    }

    async fn main_menu(&mut self) -> Result<MenuState> {
        writeln!(self.out, "\n=== Main Menu ===")?;
        writeln!(self.out, "1. Search tracks")?;
        writeln!(self.out, "2. Search albums")?;
        writeln!(self.out, "3. Search playlists")?;
        writeln!(self.out, "4. Browse last results")?;
        writeln!(self.out, "5. Stop playback")?;
        writeln!(self.out, "6. Quit")?;

        let Some(choice) = prompt(self.input, self.out, "Enter your choice: ")? else {
            return Ok(MenuState::Quit);
        };
        let next = match choice.to_ascii_lowercase().as_str() {
            "1" => MenuState::SearchPrompt(SearchKind::Track),
            "2" => MenuState::SearchPrompt(SearchKind::Album),
            "3" => MenuState::SearchPrompt(SearchKind::Playlist),
            "4" if self.results.is_empty() => {
                writeln!(self.out, "No results yet; search first.")?;
                MenuState::MainMenu
            }
            "4" => MenuState::ResultsList,
            "5" => match self.stop().await {
                Ok(()) => MenuState::MainMenu,
                Err(e) => return self.recover(e),
            },
            "6" | "q" => MenuState::Quit,
            other => {
                writeln!(self.out, "Invalid choice '{other}'")?;
                MenuState::MainMenu
            }
        };
        Ok(next)
    }

    async fn search_prompt(&mut self, kind: SearchKind) -> Result<MenuState> {
        let message = format!("Enter {kind} search query (empty to go back): ");
        let Some(query) = prompt(self.input, self.out, &message)? else {
            return Ok(MenuState::Quit);
        };
        if query.is_empty() {
            return Ok(MenuState::MainMenu);
        }

        let mut items = match self.service.search(kind, &query, self.limit).await {
            Ok(items) => items,
            Err(e) => return self.recover(e),
        };
        items.truncate(self.limit as usize);

        if items.is_empty() {
            writeln!(self.out, "No {kind}s found for '{query}'")?;
            return Ok(MenuState::MainMenu);
        }
        self.results = items;
        Ok(MenuState::ResultsList)
    }

    async fn results_list(&mut self) -> Result<MenuState> {
        writeln!(self.out, "\n=== Results ===")?;
        write_results(self.out, &self.results, false)?;

        let Some(answer) = prompt(
            self.input,
            self.out,
            "Select a number to play (0 to go back): ",
        )?
        else {
            return Ok(MenuState::Quit);
        };

        match parse_selection(&answer, self.results.len()) {
            Selection::Back => Ok(MenuState::MainMenu),
            Selection::Invalid => {
                writeln!(self.out, "Invalid selection '{answer}'")?;
                Ok(MenuState::ResultsList)
            }
            Selection::Item(index) => match self.service.play(&self.results[index]).await {
                Ok(()) => {
                    self.started = true;
                    Ok(MenuState::Playing(index))
                }
                Err(e) => self.recover(e),
            },
        }
    }

    async fn playing(&mut self, index: usize) -> Result<MenuState> {
        writeln!(
            self.out,
            "\nNow playing: {}",
            result_line(index + 1, &self.results[index])
        )?;

        let Some(answer) = prompt(
            self.input,
            self.out,
            "[Enter] back to results, [s] stop, [m] main menu, [q] quit: ",
        )?
        else {
            return Ok(MenuState::Quit);
        };

        let next = match answer.to_ascii_lowercase().as_str() {
            "" | "b" => MenuState::ResultsList,
            "s" => match self.stop().await {
                Ok(()) => MenuState::ResultsList,
                Err(e) => return self.recover(e),
            },
            "m" => MenuState::MainMenu,
            "q" => MenuState::Quit,
            other => {
                writeln!(self.out, "Unknown option '{other}'")?;
                MenuState::Playing(index)
            }
        };
        Ok(next)
    }
}
